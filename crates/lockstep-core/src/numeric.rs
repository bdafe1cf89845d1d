//! Checked numeric accumulation.

use num_traits::{CheckedAdd, Zero};

/// A numeric type that can be summed without silent wrap-around.
///
/// Implemented for every type with [`Zero`] and [`CheckedAdd`], which covers
/// the primitive integers and, with the `decimal` feature,
/// [`rust_decimal::Decimal`].
pub trait Summable: Clone {
    /// The additive identity, reported for empty sequences.
    fn zero() -> Self;

    /// Adds `rhs`, returning `None` on overflow.
    fn checked_sum(&self, rhs: &Self) -> Option<Self>;
}

impl<T> Summable for T
where
    T: Zero + CheckedAdd + Clone,
{
    #[inline]
    fn zero() -> Self {
        <T as Zero>::zero()
    }

    #[inline]
    fn checked_sum(&self, rhs: &Self) -> Option<Self> {
        self.checked_add(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_overflow_detected() {
        assert_eq!(i32::MAX.checked_sum(&1), None);
        assert_eq!(2i32.checked_sum(&3), Some(5));
        assert_eq!(<u8 as Summable>::zero(), 0);
    }

    #[cfg(feature = "decimal")]
    #[test]
    fn test_decimal_is_exact() {
        use rust_decimal::Decimal;

        let a = Decimal::new(1, 1); // 0.1
        let b = Decimal::new(2, 1); // 0.2
        assert_eq!(a.checked_sum(&b), Some(Decimal::new(3, 1)));
        assert_eq!(Decimal::MAX.checked_sum(&Decimal::ONE), None);
    }
}
