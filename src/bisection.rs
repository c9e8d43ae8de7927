//! Bisection method.

use crate::algorithms::Algorithm;
use crate::config::check_abstol;
use crate::errors::ConfigError;
use crate::rate::rate_estimate;
use crate::report::{SolveTrace, TerminationReason};
use crate::signs::sign;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BisectionError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid bounds: a and b must be finite with a < b. got [{a}, {b}]")]
    InvalidBounds { a: f64, b: f64 },
}

/// Midpoint of [a, b].
#[inline]
fn midpoint(a: f64, b: f64) -> f64 {
    a + (b - a) * 0.5
}

/// Finds a root of `func` using the
/// [bisection method](https://en.wikipedia.org/wiki/Bisection_method).
///
/// # Precondition
/// `func(a)` and `func(b)` must have opposite signs. This is NOT checked:
/// honoring the bracket is the caller's responsibility, and a bracket
/// without a sign change converges to an arbitrary point of the interval.
///
/// # Arguments
/// - `func`      : the function whose root is sought; only its sign at the
///   midpoint is consulted
/// - `a`         : lower bound of the bracket. Must be finite and less than `b`
/// - `b`         : upper bound of the bracket. Must be finite and greater than `a`
/// - `abstol`    : absolute tolerance on the midpoint-to-previous-midpoint
///   distance
/// - `num_iters` : hard iteration cap; this is the only bounded solver
///
/// # Returns
/// [`SolveTrace`] where each iteration records the current *upper bound* of
/// the bracket (not the tested midpoint; a long-standing reporting choice
/// kept as is) and one rate entry. The first iteration has no previous
/// midpoint, so its rate entry is NaN; from the second iteration on the
/// estimate is formed from midpoint distances and the previously recorded
/// bound.
///
/// # Errors
/// - [`BisectionError::InvalidBounds`] : `a` or `b` NaN/Inf, or `a >= b`
/// - [`ConfigError::InvalidAbsTol`]    : `abstol` <= 0 or non-finite
/// - [`ConfigError::InvalidMaxIter`]   : `num_iters` = 0
///
/// # Behavior
/// - Each iteration halves the bracket: the side whose endpoint shares the
///   sign of `func(midpoint)` is replaced. `sign(0) = -1`, so an exact zero
///   at the midpoint counts as negative and the search continues instead of
///   terminating on the exact root.
/// - Terminates on whichever comes first: the midpoint distance dropping
///   below `abstol`, or the iteration cap.
pub fn bisection<F>(
    mut func: F,
    a: f64,
    b: f64,
    abstol: f64,
    num_iters: usize,
) -> Result<SolveTrace, BisectionError>
where
    F: FnMut(f64) -> f64,
{
    if !(a.is_finite() && b.is_finite()) || a >= b {
        return Err(BisectionError::InvalidBounds { a, b });
    }
    check_abstol(abstol)?;
    if num_iters == 0 {
        return Err(ConfigError::InvalidMaxIter { got: 0 }.into());
    }

    let mut iterates = Vec::with_capacity(num_iters);
    let mut rates = Vec::with_capacity(num_iters);

    let mut l = a;
    let mut u = b;
    let mut prevc = f64::NAN; // no previous midpoint yet
    let mut n = 1;
    let mut termination = TerminationReason::IterationLimit;
    while n <= num_iters {
        let c = midpoint(l, u);
        iterates.push(u); // the upper bound is what gets reported

        // NaN on the first pass, so the comparison cannot stop the run early
        let currtol = (c - prevc).abs();
        if currtol < abstol {
            rates.push(f64::NAN);
            termination = TerminationReason::ToleranceReached;
            break;
        }

        if sign(func(c)) == sign(func(l)) {
            l = c;
        } else {
            u = c;
        }

        let nextc = midpoint(l, u);
        let rate = if n >= 2 {
            rate_estimate(
                (nextc - c).abs(),
                currtol,
                (prevc - iterates[n - 2]).abs(),
            )
        } else {
            f64::NAN
        };
        rates.push(rate);

        prevc = c;
        n += 1;
    }

    let iterations = iterates.len();
    Ok(SolveTrace {
        iterates,
        iterations,
        rates,
        termination,
        algorithm: Algorithm::Bisection,
    })
}
