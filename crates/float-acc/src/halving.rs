//! Iterative-halving finder.
//!
//! Counts how many times 1.0 can be halved while staying strictly positive.
//! That is `-log2` of the smallest positive subnormal, so it measures the
//! exponent range down to underflow rather than mantissa precision. For a
//! format with `p` stored mantissa bits and bias `b` the count is
//! `p + b - 1` (149 for f32, 1074 for f64).

use crate::format::Ieee754;

/// Number of halvings of 1.0 that still yield a positive value in `F`.
///
/// Terminates for every IEEE-754 format: repeated halving rounds to exactly
/// zero once it passes the smallest subnormal.
pub fn underflow_steps<F: Ieee754>() -> u64 {
    let mut eps = F::ONE;
    let mut count: u64 = 0;
    while eps > F::ZERO {
        eps = eps / F::TWO;
        count += 1;
    }
    // the last halving produced zero
    count - 1
}
