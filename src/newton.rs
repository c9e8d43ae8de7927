//! Newton's method with a central-difference derivative.

use crate::algorithms::Algorithm;
use crate::config::{check_abstol, check_max_iter};
use crate::derivative::derivative;
use crate::errors::ConfigError;
use crate::rate::rate_estimate;
use crate::report::{SolveTrace, TerminationReason};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NewtonError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid initial guess: x0={x0} must be finite")]
    InvalidGuess { x0: f64 },
}

/// One Newton update `x - f(x) / f'(x)` with the estimated derivative.
#[inline]
fn newton_step<F>(func: &mut F, x: f64) -> f64
where
    F: FnMut(f64) -> f64,
{
    let fx = func(x);
    let dfx = derivative(&mut *func, x);
    x - fx / dfx
}

/// Finds a root of `func` using the
/// [Newton-Raphson method](https://en.wikipedia.org/wiki/Newton%27s_method)
/// with a central-difference derivative estimate (see
/// [`derivative`](crate::derivative::derivative)).
///
/// # Arguments
/// - `func`     : the function whose root is sought
/// - `x0`       : finite initial guess (not recorded in the trace)
/// - `abstol`   : absolute tolerance on `|x_i - x_{i-1}|`
/// - `max_iter` : optional cap on recorded iterates; `None` is unbounded
///
/// # Returns
/// [`SolveTrace`] with one iterate and one rate entry per iteration. Each
/// loop step invokes the derivative estimator twice: once for the update and
/// once for the lookahead point feeding the rate estimate.
///
/// # Errors
/// - [`NewtonError::InvalidGuess`]   : `x0` non-finite
/// - [`ConfigError::InvalidAbsTol`]  : `abstol` <= 0 or non-finite
/// - [`ConfigError::InvalidMaxIter`] : `max_iter` = 0
///
/// # Behavior
/// - Convergence is local and quadratic near a simple root with a good
///   guess; the recorded rate approaches 2 there.
/// - A derivative estimate of zero (or underflow) makes the update divide
///   toward Inf/NaN. The value is recorded and the run ends as
///   [`TerminationReason::Stalled`]; there is no distinct "stuck" error.
/// - With `max_iter = None` a cycling iteration loops forever; bounding the
///   run is the caller's responsibility.
pub fn newton<F>(
    mut func: F,
    x0: f64,
    abstol: f64,
    max_iter: Option<usize>,
) -> Result<SolveTrace, NewtonError>
where
    F: FnMut(f64) -> f64,
{
    if !x0.is_finite() {
        return Err(NewtonError::InvalidGuess { x0 });
    }
    check_abstol(abstol)?;
    check_max_iter(max_iter)?;

    let mut iterates = Vec::new();
    let mut rates = Vec::new();

    // first iteration outside the loop
    iterates.push(newton_step(&mut func, x0));
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
        let x_i = newton_step(&mut func, x_prev);
        iterates.push(x_i);
        let x_ahead = newton_step(&mut func, x_i); // lookahead for the rate estimate

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
        algorithm: Algorithm::Newton,
    })
}
