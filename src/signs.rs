//! Sign utility for the bisection bracket update.

/// Returns `1` for strictly positive values and `-1` otherwise.
///
/// Zero maps to `-1`: the bracket update treats an exact root at the
/// midpoint as a negative value and keeps searching rather than stopping.
/// NaN also maps to `-1`, so a non-finite evaluation shrinks the lower side.
#[inline]
pub(crate) fn sign(a: f64) -> i32 {
    if a > 0.0 { 1 } else { -1 }
}
