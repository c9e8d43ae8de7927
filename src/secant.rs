//! Secant method.

use crate::algorithms::Algorithm;
use crate::config::{check_abstol, check_max_iter};
use crate::errors::ConfigError;
use crate::rate::rate_estimate;
use crate::report::{SolveTrace, TerminationReason};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SecantError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid initial guesses: x0={x0} and x1={x1} must be finite and distinct")]
    InvalidGuess { x0: f64, x1: f64 },
}

/// One secant update from the two most recent values:
/// `x_curr - f(x_curr) * (x_curr - x_prev) / (f(x_curr) - f(x_prev))`.
#[inline]
fn secant_step<F>(func: &mut F, x_curr: f64, x_prev: f64) -> f64
where
    F: FnMut(f64) -> f64,
{
    let f_curr = func(x_curr);
    let f_prev = func(x_prev);
    x_curr - f_curr * ((x_curr - x_prev) / (f_curr - f_prev))
}

/// Finds a root of `func` using the
/// [secant method](https://en.wikipedia.org/wiki/Secant_method).
///
/// # Arguments
/// - `func`     : the function whose root is sought
/// - `x0`, `x1` : two finite, distinct seeds (not recorded in the trace;
///   index 0 of the iterate sequence is the first *computed* value)
/// - `abstol`   : absolute tolerance on `|x_i - x_{i-1}|`
/// - `max_iter` : optional cap on recorded iterates; `None` is unbounded
///
/// # Returns
/// [`SolveTrace`] with one iterate and one rate entry per iteration. The
/// rate uses a one-step lookahead, so each iteration evaluates the secant
/// update twice.
///
/// # Errors
/// - [`SecantError::InvalidGuess`]   : a seed non-finite, or `x0 == x1`
/// - [`ConfigError::InvalidAbsTol`]  : `abstol` <= 0 or non-finite
/// - [`ConfigError::InvalidMaxIter`] : `max_iter` = 0
///
/// # Behavior
/// - Convergence is superlinear (order ~1.618) near a simple root.
/// - `f(x_i) == f(x_{i-1})` makes the update divide toward Inf/NaN; the
///   value is recorded and the run ends as [`TerminationReason::Stalled`].
/// - With `max_iter = None` a non-convergent iteration loops forever;
///   bounding the run is the caller's responsibility.
pub fn secant<F>(
    mut func: F,
    x0: f64,
    x1: f64,
    abstol: f64,
    max_iter: Option<usize>,
) -> Result<SolveTrace, SecantError>
where
    F: FnMut(f64) -> f64,
{
    if !(x0.is_finite() && x1.is_finite()) || x0 == x1 {
        return Err(SecantError::InvalidGuess { x0, x1 });
    }
    check_abstol(abstol)?;
    check_max_iter(max_iter)?;

    let mut iterates = Vec::new();
    let mut rates = Vec::new();

    // first iteration outside the loop
    iterates.push(secant_step(&mut func, x1, x0));
    rates.push(f64::NAN);
    let mut currtol = (iterates[0] - x1).abs();

    let mut i = 1;
    let mut termination = TerminationReason::ToleranceReached;
    while currtol > abstol {
        if let Some(cap) = max_iter {
            if i >= cap {
                termination = TerminationReason::IterationLimit;
                break;
            }
        }

        let x_prev1 = iterates[i - 1];
        // the seed x1 backs the very first in-loop update
        let x_prev2 = if i >= 2 { iterates[i - 2] } else { x1 };
        let x_i = secant_step(&mut func, x_prev1, x_prev2);
        iterates.push(x_i);
        let x_ahead = secant_step(&mut func, x_i, x_prev1); // lookahead for the rate estimate

        currtol = (x_i - x_prev1).abs();
        let rate = if i >= 2 {
            rate_estimate(
                (x_ahead - x_i).abs(),
                currtol,
                (x_prev1 - x_prev2).abs(),
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
        algorithm: Algorithm::Secant,
    })
}
