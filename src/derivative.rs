//! Central-difference derivative estimation.

use num_traits::Float;

/// Approximates `f'(x)` by the central difference `(f(x+h) - f(x-h)) / (2h)`
/// with `h = sqrt(machine_epsilon)` of the float type.
///
/// # Arguments
/// - `func` : single-argument function mapping a float to the same float type
/// - `x`    : evaluation point
///
/// # Notes
/// - The trait bounds are the contract: only a one-argument, float-to-float
///   callable can be passed, so a wrong-arity or non-numeric function is a
///   compile error rather than anything observable at runtime.
/// - `h` is fixed per call, not adaptive. Truncation error is O(h) and
///   rounding error is O(eps / h); callers must tolerate the combined
///   imprecision, especially where `f'` is large or changes quickly.
pub fn derivative<F, T>(mut func: F, x: T) -> T
where
    F: FnMut(T) -> T,
    T: Float,
{
    let h = T::epsilon().sqrt();
    let two = T::one() + T::one();
    (func(x + h) - func(x - h)) / (two * h)
}
