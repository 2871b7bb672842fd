//! Build-selected native format and the `float_acc` entry points.
//!
//! `Native` is `f64` unless the crate is built with the `native-f32` feature.
//! Keeping the choice in a cargo feature makes results identical on every
//! target for a given build configuration.

use crate::bits::{machine_epsilon, mantissa_bits};
use crate::halving::underflow_steps;

#[cfg(not(feature = "native-f32"))]
pub type Native = f64;
#[cfg(feature = "native-f32")]
pub type Native = f32;

/// Mantissa bits of precision of `Native` (negative exponent of its machine
/// epsilon). Uses the bit-trick finder.
pub fn float_acc() -> u64 {
    mantissa_bits::<Native>()
}

/// Halvings of 1.0 before `Native` underflows to zero. Measures exponent
/// range, not precision; see [`crate::halving`].
pub fn float_underflow_steps() -> u64 {
    underflow_steps::<Native>()
}

/// Machine epsilon of `Native`.
pub fn native_epsilon() -> Native {
    machine_epsilon::<Native>()
}
