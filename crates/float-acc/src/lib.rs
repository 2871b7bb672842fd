//! Machine-epsilon finders for IEEE-754 binary formats.
//!
//! Two finders answer two different questions:
//! - `bits::mantissa_bits` increments the bit pattern of 1.0 to reach its
//!   successor and reports precision: `eps = 2^-mantissa_bits`.
//! - `halving::underflow_steps` halves 1.0 until it becomes zero and reports
//!   exponent range down to the smallest subnormal.
//!
//! `float_acc()` is the precision answer for the build-selected `Native`
//! format (f64 by default, f32 with the `native-f32` feature).

pub mod bits;
pub mod compare;
pub mod format;
pub mod halving;
pub mod native;
pub mod report;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use bits::{machine_epsilon, mantissa_bits, next_up, MAX_NORMALIZE_STEPS};
pub use compare::{approx_eq, approx_eq_default, DEFAULT_TOLERANCE};
pub use format::{Bits, Ieee754};
pub use halving::underflow_steps;
pub use native::{float_acc, float_underflow_steps, native_epsilon, Native};
pub use report::PrecisionReport;
