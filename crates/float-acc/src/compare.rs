//! Relative comparison with an explicit tolerance.

/// Tolerance used by [`approx_eq_default`].
pub const DEFAULT_TOLERANCE: f64 = 1e-40;

/// Whether `a` and `b` agree to relative tolerance `tol`.
///
/// Zero is special-cased: against zero the other value must be below `tol`
/// in magnitude. Values larger than `tol` with different signs never match.
/// Otherwise the test is `||a / b| - 1| < tol`.
pub fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
    if a == 0.0 && b == 0.0 {
        return true;
    } else if a == 0.0 {
        return b.abs() < tol;
    } else if b == 0.0 {
        return a.abs() < tol;
    }
    if a.abs() > tol && a.is_sign_negative() != b.is_sign_negative() {
        return false;
    }
    ((a / b).abs() - 1.0).abs() < tol
}

#[inline]
pub fn approx_eq_default(a: f64, b: f64) -> bool {
    approx_eq(a, b, DEFAULT_TOLERANCE)
}
