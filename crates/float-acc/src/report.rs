//! Per-format precision summary, as printed by the CLI driver.

use std::fmt;

use crate::bits::{machine_epsilon, mantissa_bits};
use crate::format::Ieee754;
use crate::halving::underflow_steps;

/// Both finders' results for one format.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PrecisionReport {
    pub format: &'static str,
    pub width: u32,
    /// Bit-trick result: `eps = 2^-mantissa_bits`.
    pub mantissa_bits: u64,
    /// Halving result: smallest positive value is `2^-underflow_steps`.
    pub underflow_steps: u64,
    pub epsilon: f64,
}

impl PrecisionReport {
    pub fn of<F: Ieee754>() -> Self {
        Self {
            format: F::NAME,
            width: F::WIDTH,
            mantissa_bits: mantissa_bits::<F>(),
            underflow_steps: underflow_steps::<F>(),
            epsilon: machine_epsilon::<F>().to_f64(),
        }
    }

    /// Reports for every supported format, narrowest first.
    pub fn all() -> Vec<Self> {
        vec![Self::of::<f32>(), Self::of::<f64>()]
    }

    /// Base-2 exponent of the smallest positive subnormal.
    #[inline]
    pub fn min_positive_exponent(&self) -> i64 {
        -(self.underflow_steps as i64)
    }
}

impl fmt::Display for PrecisionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: eps = 2^(-{}) = {:.6e}, underflow after {} halvings",
            self.format, self.mantissa_bits, self.epsilon, self.underflow_steps
        )
    }
}
