//! tests for the secant solver
use ordena::errors::ConfigError;
use ordena::secant::{secant, SecantError};
use ordena::TerminationReason;

type TestResult = Result<(), SecantError>;

#[test]
fn converges_on_factored_quadratic() -> TestResult {
    let f = |x: f64| x * x - 3.0 * x + 2.0;
    let res = secant(f, 2.5, 2.1, 5e-7, None)?;

    assert_eq!(res.termination, TerminationReason::ToleranceReached);
    assert!((res.root() - 2.0).abs() <= 1e-5);
    assert!(res.iterations <= 10);
    Ok(())
}

#[test]
fn observed_rate_is_superlinear() -> TestResult {
    let f = |x: f64| x * x - 3.0 * x + 2.0;
    let res = secant(f, 2.5, 2.1, 5e-7, None)?;

    // golden-ratio order ~1.618; empirical estimates scatter around it
    assert!(res.rates[0].is_nan());
    assert!(res.rates[1].is_nan());
    assert!(res.rates[2] > 1.2 && res.rates[2] < 2.2);
    Ok(())
}

#[test]
fn seeds_are_not_recorded() -> TestResult {
    let f = |x: f64| x * x - 3.0 * x + 2.0;
    let res = secant(f, 2.5, 2.1, 5e-7, None)?;

    // index 0 is the first computed value, x1 - f(x1)(x1 - x0)/(f(x1) - f(x0))
    assert!((res.iterates[0] - 2.031_25).abs() <= 1e-9);
    Ok(())
}

#[test]
fn rate_sequence_stays_aligned() -> TestResult {
    let f = |x: f64| x * x - 3.0 * x + 2.0;
    let res = secant(f, 2.5, 2.1, 5e-7, None)?;

    assert_eq!(res.rates.len(), res.iterates.len());
    assert_eq!(res.iterations, res.iterates.len());
    Ok(())
}

#[test]
fn flat_function_stalls_with_non_finite_iterates() -> TestResult {
    // f(x1) == f(x0) degenerates the first update; the division blows up
    // and the run ends without an error
    let f = |_x: f64| 1.0;
    let res = secant(f, 0.0, 1.0, 1e-10, None)?;

    assert_eq!(res.termination, TerminationReason::Stalled);
    assert!(!res.root().is_finite());
    assert_eq!(res.rates.len(), res.iterates.len());
    Ok(())
}

#[test]
fn stops_at_optional_cap() -> TestResult {
    let f = |x: f64| x * x - 3.0 * x + 2.0;
    let res = secant(f, 2.5, 2.1, 1e-300, Some(2))?;

    assert_eq!(res.termination, TerminationReason::IterationLimit);
    assert_eq!(res.iterations, 2);
    Ok(())
}

#[test]
fn rejects_equal_seeds() -> TestResult {
    let f = |x: f64| x;
    let err = secant(f, 1.0, 1.0, 1e-6, None).unwrap_err();
    assert!(matches!(err, SecantError::InvalidGuess { x0, x1 } if x0 == 1.0 && x1 == 1.0));
    Ok(())
}

#[test]
fn rejects_non_finite_seed() -> TestResult {
    let f = |x: f64| x;
    let err = secant(f, f64::NAN, 1.0, 1e-6, None).unwrap_err();
    assert!(matches!(err, SecantError::InvalidGuess { .. }));
    Ok(())
}

#[test]
fn rejects_zero_cap() -> TestResult {
    let f = |x: f64| x;
    let err = secant(f, 0.0, 1.0, 1e-6, Some(0)).unwrap_err();
    assert!(matches!(
        err,
        SecantError::Config(ConfigError::InvalidMaxIter { got: 0 })
    ));
    Ok(())
}
