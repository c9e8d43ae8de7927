//! Fixed-point iteration.

use crate::algorithms::Algorithm;
use crate::config::{check_abstol, check_max_iter};
use crate::errors::ConfigError;
use crate::rate::rate_estimate;
use crate::report::{SolveTrace, TerminationReason};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FixedPointError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid initial guess: x0={x0} must be finite")]
    InvalidGuess { x0: f64 },
}

/// Finds a fixed point of `g` by
/// [fixed-point iteration](https://en.wikipedia.org/wiki/Fixed-point_iteration):
/// `x_i = g(x_{i-1})`, starting from `x0`.
///
/// # Arguments
/// - `g`        : the iteration function
/// - `x0`       : finite initial guess (not recorded in the trace)
/// - `abstol`   : absolute tolerance on `|x_i - x_{i-1}|`
/// - `max_iter` : optional cap on recorded iterates; `None` is unbounded
///
/// # Returns
/// [`SolveTrace`] with one iterate and one rate entry per iteration. Rate
/// entries at index < 2 are NaN; from index 2 on they are computed from the
/// current, previous, and one-step-lookahead differences, so each iteration
/// evaluates `g` twice.
///
/// # Errors
/// - [`FixedPointError::InvalidGuess`]  : `x0` non-finite
/// - [`ConfigError::InvalidAbsTol`]     : `abstol` <= 0 or non-finite
/// - [`ConfigError::InvalidMaxIter`]    : `max_iter` = 0
///
/// # Behavior
/// - Convergence is linear with ratio `|g'(x*)|` near an attracting fixed
///   point; the recorded rate approaches 1 there.
/// - With `max_iter = None` an oscillating `g` loops forever; bounding the
///   run is the caller's responsibility. A NaN iterate (e.g. `g` evaluated
///   outside its domain) ends the run as [`TerminationReason::Stalled`] with
///   the NaN recorded, not raised.
pub fn fixed_point<G>(
    mut g: G,
    x0: f64,
    abstol: f64,
    max_iter: Option<usize>,
) -> Result<SolveTrace, FixedPointError>
where
    G: FnMut(f64) -> f64,
{
    if !x0.is_finite() {
        return Err(FixedPointError::InvalidGuess { x0 });
    }
    check_abstol(abstol)?;
    check_max_iter(max_iter)?;

    let mut iterates = Vec::new();
    let mut rates = Vec::new();

    // first iteration outside the loop
    iterates.push(g(x0));
    rates.push(f64::NAN);
    let mut currtol = (iterates[0] - x0).abs();

    let mut i = 1;
    let mut termination = TerminationReason::ToleranceReached;
    while currtol > abstol {
        if let Some(cap) = max_iter {
            if i >= cap {
                termination = TerminationReason::IterationLimit;
                break;
            }
        }

        let x_prev = iterates[i - 1];
        let x_i = g(x_prev);
        iterates.push(x_i);
        let x_ahead = g(x_i); // lookahead for the rate estimate

        currtol = (x_i - x_prev).abs();
        let rate = if i >= 2 {
            rate_estimate(
                (x_ahead - x_i).abs(),
                currtol,
                (x_prev - iterates[i - 2]).abs(),
            )
        } else {
            f64::NAN
        };
        rates.push(rate);
        i += 1;
    }

    // a NaN difference also ends the loop: the tolerance can no longer be decided
    if termination == TerminationReason::ToleranceReached && currtol.is_nan() {
        termination = TerminationReason::Stalled;
    }

    Ok(SolveTrace {
        iterates,
        iterations: i,
        rates,
        termination,
        algorithm: Algorithm::FixedPoint,
    })
}
