//! Numeric element types for the kernels.
//!
//! The trait hierarchy is:
//! ```text
//! Scalar
//!   └── Float  (f32, f64)
//! ```
//!
//! Every matrix routine is generic over [`Float`] so callers can work in
//! `f32` or `f64` without conversion.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

// ---------------------------------------------------------------------------
// Scalar — arithmetic shared by every element type
// ---------------------------------------------------------------------------

/// Base trait for numeric types storable in a [`Matrix`](crate::Matrix).
pub trait Scalar:
    Copy
    + Clone
    + fmt::Debug
    + fmt::Display
    + PartialEq
    + PartialOrd
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + Sum
    + Default
    + 'static
{
    /// The additive identity (`0`).
    fn zero() -> Self;

    /// The multiplicative identity (`1`).
    fn one() -> Self;
}

// ---------------------------------------------------------------------------
// Float
// ---------------------------------------------------------------------------

/// Trait for floating-point scalar types (`f32`, `f64`).
pub trait Float: Scalar + Neg<Output = Self> {
    fn abs(self) -> Self;
    fn recip(self) -> Self;
    fn is_nan(self) -> bool;
    fn is_finite(self) -> bool;

    /// Convert from an `f64` (used for tolerances and constants).
    fn from_f64(v: f64) -> Self;

    /// Widen to `f64` (used in log output and tolerance comparisons).
    fn to_f64(self) -> f64;
}

macro_rules! impl_float {
    ($ty:ty) => {
        impl Scalar for $ty {
            #[inline]
            fn zero() -> Self {
                0.0
            }
            #[inline]
            fn one() -> Self {
                1.0
            }
        }

        impl Float for $ty {
            #[inline]
            fn abs(self) -> Self {
                <$ty>::abs(self)
            }
            #[inline]
            fn recip(self) -> Self {
                <$ty>::recip(self)
            }
            #[inline]
            fn is_nan(self) -> bool {
                <$ty>::is_nan(self)
            }
            #[inline]
            fn is_finite(self) -> bool {
                <$ty>::is_finite(self)
            }
            #[inline]
            #[allow(clippy::cast_possible_truncation)]
            fn from_f64(v: f64) -> Self {
                v as Self
            }
            #[inline]
            #[allow(clippy::cast_lossless)]
            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    };
}

impl_float!(f32);
impl_float!(f64);

/// `(-1)^k` as a float, used for cofactor signs.
#[inline]
pub(crate) fn alternating_sign<T: Float>(k: usize) -> T {
    if k % 2 == 0 { T::one() } else { -T::one() }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_zero_one() {
        assert_eq!(f64::zero(), 0.0);
        assert_eq!(f64::one(), 1.0);
        assert_eq!(f32::zero(), 0.0_f32);
        assert_eq!(f32::one(), 1.0_f32);
    }

    #[test]
    fn test_float_ops() {
        assert_eq!(Float::abs(-3.0_f64), 3.0);
        assert!(Float::is_nan(f64::NAN));
        assert!(!Float::is_nan(1.0_f32));
        assert_eq!(Float::recip(4.0_f64), 0.25);
        assert!(!Float::is_finite(Float::recip(1e-310_f64)));
        assert!(Float::is_finite(Float::recip(1e-300_f64)));
    }

    #[test]
    fn test_f64_conversions() {
        assert_eq!(<f32 as Float>::from_f64(0.5), 0.5_f32);
        assert_eq!(Float::to_f64(0.25_f32), 0.25);
    }

    #[test]
    fn test_alternating_sign() {
        assert_eq!(alternating_sign::<f64>(0), 1.0);
        assert_eq!(alternating_sign::<f64>(1), -1.0);
        assert_eq!(alternating_sign::<f64>(4), 1.0);
        assert_eq!(alternating_sign::<f64>(7), -1.0);
    }
}
