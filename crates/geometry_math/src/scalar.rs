//! Numeric capabilities required by the vector and matrix types

use std::ops::{Add, Div, Mul, Sub};

/// A numeric type usable as a vector or matrix component.
///
/// Covers both integral and floating-point primitives.
pub trait Scalar:
    Copy
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// Additive identity
    fn zero() -> Self;
    /// Multiplicative identity
    fn one() -> Self;
}

/// A scalar with a square root, required for lengths and normalization
pub trait Float: Scalar {
    fn sqrt(self) -> Self;
}

macro_rules! impl_scalar {
    ($zero:literal, $one:literal => $($t:ty),*) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn zero() -> Self {
                    $zero
                }

                #[inline]
                fn one() -> Self {
                    $one
                }
            }
        )*
    };
}

impl_scalar!(0, 1 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_scalar!(0.0, 1.0 => f32, f64);

impl Float for f32 {
    #[inline]
    fn sqrt(self) -> Self {
        f32::sqrt(self)
    }
}

impl Float for f64 {
    #[inline]
    fn sqrt(self) -> Self {
        f64::sqrt(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identities() {
        assert_eq!(<i32 as Scalar>::zero(), 0);
        assert_eq!(<u8 as Scalar>::one(), 1);
        assert_eq!(<f32 as Scalar>::zero(), 0.0);
        assert_eq!(<f64 as Scalar>::one(), 1.0);
    }

    #[test]
    fn test_sqrt() {
        assert_eq!(Float::sqrt(16.0f32), 4.0);
        assert_eq!(Float::sqrt(2.25f64), 1.5);
    }
}
