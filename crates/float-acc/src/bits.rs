//! Bit-trick finder.
//!
//! Machine epsilon is the gap between 1.0 and its successor. The successor is
//! found in O(1) by incrementing the integer view of 1.0: positive finite
//! IEEE-754 values sort the same way as their bit patterns. The gap is then
//! doubled back up to 1.0 to turn it into a bit count, which costs one
//! iteration per mantissa bit.

use crate::format::{Bits, Ieee754};

/// Upper bound on normalization iterations for any supported format.
pub const MAX_NORMALIZE_STEPS: u64 = 128;

/// Next representable value above a positive finite `x`.
#[inline]
pub fn next_up<F: Ieee754>(x: F) -> F {
    debug_assert!(x >= F::ZERO, "next_up expects a non-negative value, got {x:?}");
    F::from_bits(x.to_bits().succ())
}

/// `next_up(1.0) - 1.0`: the smallest `e` with `1.0 + e != 1.0`.
#[inline]
pub fn machine_epsilon<F: Ieee754>() -> F {
    next_up(F::ONE) - F::ONE
}

/// Stored mantissa bits of `F`, i.e. `-log2(machine_epsilon::<F>())`.
pub fn mantissa_bits<F: Ieee754>() -> u64 {
    let mut eps = machine_epsilon::<F>();
    let mut count: u64 = 0;
    while eps < F::ONE {
        eps = eps * F::TWO;
        count += 1;
        debug_assert!(
            count <= MAX_NORMALIZE_STEPS,
            "{} epsilon did not normalize within {MAX_NORMALIZE_STEPS} doublings",
            F::NAME
        );
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn textbook_mantissa_widths() {
        assert_eq!(mantissa_bits::<f32>(), 23);
        assert_eq!(mantissa_bits::<f64>(), 52);
        assert!(mantissa_bits::<f64>() <= MAX_NORMALIZE_STEPS);
    }

    #[test]
    fn epsilon_matches_std() {
        assert_eq!(machine_epsilon::<f32>(), f32::EPSILON);
        assert_eq!(machine_epsilon::<f64>(), f64::EPSILON);
        assert_ne!(1.0 + machine_epsilon::<f64>(), 1.0);
        // half of it rounds back to one (ties-to-even)
        assert_eq!(1.0 + machine_epsilon::<f64>() / 2.0, 1.0);
    }

    #[test]
    fn next_up_from_zero_is_smallest_subnormal() {
        assert_eq!(next_up(0.0f64), f64::from_bits(1));
        assert_eq!(next_up(0.0f32), f32::from_bits(1));
    }

    #[test]
    fn next_up_crosses_binade() {
        let below_two = f64::from_bits(2.0f64.to_bits() - 1);
        assert_eq!(next_up(below_two), 2.0);
    }

    proptest! {
        #[test]
        fn next_up_is_strict_successor(
            x in (0u64..0x7ff0_0000_0000_0000).prop_map(f64::from_bits)
        ) {
            let y = next_up(x);
            prop_assert!(y > x);
            // nothing lies strictly between x and y
            let mid = x + (y - x) / 2.0;
            prop_assert!(mid == x || mid == y);
        }

        #[test]
        fn next_up_f32_adds_one_ulp(x in 1.0f32..2.0) {
            prop_assert_eq!(next_up(x) - x, f32::EPSILON);
        }
    }
}
