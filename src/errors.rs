//! Shared error types for the solvers.
//!
//! ┌ [`ConfigError`] : invalid per-call configuration
//! │   ├ bad absolute tolerance
//! │   └ zero iteration cap
//! │
//! └ Each solver module defines its own error enum wrapping [`ConfigError`]
//!   and adding its guess/bounds variants.
//!
//! Only static inputs are validated. Numerical degeneracies during a run
//! (NaN from a domain violation, Inf from a vanishing denominator) are never
//! errors: they propagate through the iterate sequence as sentinel values.

use thiserror::Error;

/// Configuration errors common to all solvers.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid `abstol`: must be finite and > 0. got {got}")]
    InvalidAbsTol { got: f64 },

    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter { got: usize },
}
