//! IEEE-754 binary formats the finders operate on.
//!
//! - `Ieee754`: float type with a same-width unsigned integer view and its
//!   layout constants (mantissa/exponent widths, bias).
//! - `Bits`: the integer view; only needs ordering and a successor.
//!
//! Implemented for `f32` and `f64` only. The trait is the precondition of the
//! bit-trick finder: implementors must be IEEE-754 binary formats whose
//! `Bits` type has exactly the float's width, so `from_bits(to_bits(x) + 1)`
//! is the next representable value above a positive finite `x`.

use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Sub};

/// Raw bit pattern of an `Ieee754` value.
pub trait Bits: Copy + Eq + Ord + Debug {
    /// `self + 1`. Callers only pass patterns of positive finite floats,
    /// which are never the all-ones pattern.
    fn succ(self) -> Self;
}

impl Bits for u32 {
    #[inline]
    fn succ(self) -> Self {
        self + 1
    }
}

impl Bits for u64 {
    #[inline]
    fn succ(self) -> Self {
        self + 1
    }
}

/// IEEE-754 binary floating-point format.
pub trait Ieee754:
    Copy
    + PartialOrd
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// Same-width integer view.
    type Bits: Bits;

    /// Short name used in reports (`"f32"`, `"f64"`).
    const NAME: &'static str;
    /// Total storage width in bits.
    const WIDTH: u32;
    /// Stored (explicit) mantissa bits, excluding the implicit leading one.
    const MANTISSA_BITS: u64;
    const EXPONENT_BITS: u32;
    const EXPONENT_BIAS: u64;

    const ZERO: Self;
    const ONE: Self;
    const TWO: Self;

    fn to_bits(self) -> Self::Bits;
    fn from_bits(bits: Self::Bits) -> Self;
    /// Lossless widening for display and comparisons across formats.
    fn to_f64(self) -> f64;
}

macro_rules! impl_ieee754 {
    ($f:ident, $bits:ident, $name:expr, $mant:expr, $exp:expr) => {
        impl Ieee754 for $f {
            type Bits = $bits;

            const NAME: &'static str = $name;
            const WIDTH: u32 = $bits::BITS;
            const MANTISSA_BITS: u64 = $mant;
            const EXPONENT_BITS: u32 = $exp;
            const EXPONENT_BIAS: u64 = (1 << ($exp - 1)) - 1;

            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const TWO: Self = 2.0;

            #[inline]
            fn to_bits(self) -> $bits {
                $f::to_bits(self)
            }
            #[inline]
            fn from_bits(bits: $bits) -> Self {
                $f::from_bits(bits)
            }
            #[inline]
            fn to_f64(self) -> f64 {
                f64::from(self)
            }
        }
    };
}

impl_ieee754!(f32, u32, "f32", 23, 8);
impl_ieee754!(f64, u64, "f64", 52, 11);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_constants_match_std() {
        assert_eq!(<f32 as Ieee754>::MANTISSA_BITS, (f32::MANTISSA_DIGITS - 1) as u64);
        assert_eq!(<f64 as Ieee754>::MANTISSA_BITS, (f64::MANTISSA_DIGITS - 1) as u64);
        assert_eq!(<f32 as Ieee754>::EXPONENT_BIAS, 127);
        assert_eq!(<f64 as Ieee754>::EXPONENT_BIAS, 1023);
        // sign + exponent + mantissa fill the word exactly
        for (w, e, m) in [
            (<f32 as Ieee754>::WIDTH, <f32 as Ieee754>::EXPONENT_BITS, <f32 as Ieee754>::MANTISSA_BITS),
            (<f64 as Ieee754>::WIDTH, <f64 as Ieee754>::EXPONENT_BITS, <f64 as Ieee754>::MANTISSA_BITS),
        ] {
            assert_eq!(w as u64, 1 + e as u64 + m);
        }
    }

    #[test]
    fn one_has_biased_zero_exponent() {
        let bits = <f64 as Ieee754>::to_bits(1.0);
        assert_eq!(bits >> 52, 1023);
        assert_eq!(bits & ((1 << 52) - 1), 0);
        assert_eq!(<f64 as Ieee754>::from_bits(bits), 1.0);
    }
}
