//! Shared validation for solver inputs.

use crate::errors::ConfigError;

/// Checks that the absolute tolerance is finite and positive.
pub(crate) fn check_abstol(abstol: f64) -> Result<(), ConfigError> {
    if !abstol.is_finite() || abstol <= 0.0 {
        return Err(ConfigError::InvalidAbsTol { got: abstol });
    }
    Ok(())
}

/// Checks an optional iteration cap. `None` means unbounded.
pub(crate) fn check_max_iter(max_iter: Option<usize>) -> Result<(), ConfigError> {
    if max_iter == Some(0) {
        return Err(ConfigError::InvalidMaxIter { got: 0 });
    }
    Ok(())
}
