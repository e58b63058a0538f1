//! Fixed-width integers as a Euclidean domain.
//!
//! Arithmetic wraps around on overflow, like the host integer operations.
use std::{
    fmt::{Debug, Display, Error},
    hash::Hash,
    marker::PhantomData,
};

use num_traits::{AsPrimitive, PrimInt, WrappingAdd, WrappingMul, WrappingNeg, WrappingSub};
use rand::Rng as _;

use crate::printer::PrintOptions;

use super::{euclid_gcd, EuclideanDomain, NumericRing, Ring, Scalar};

/// A host integer type that can serve as the element type of an [IntegerRing].
pub trait MachineInteger:
    PrimInt
    + WrappingAdd
    + WrappingSub
    + WrappingMul
    + WrappingNeg
    + AsPrimitive<i64>
    + Hash
    + Debug
    + Display
    + Send
    + Sync
{
    /// The name of the ring of these integers.
    const RING_NAME: &'static str;

    /// Convert from `i64`, wrapping around if the value does not fit.
    fn from_i64_wrapping(n: i64) -> Self;
    /// Truncating division and remainder. Panics if `other` is zero.
    fn wrapping_quot_rem(self, other: Self) -> (Self, Self);
}

macro_rules! impl_machine_integer {
    ($($t:ty => $name:literal),*) => {
        $(
            impl MachineInteger for $t {
                const RING_NAME: &'static str = $name;

                #[inline]
                fn from_i64_wrapping(n: i64) -> Self {
                    n as $t
                }

                #[inline]
                fn wrapping_quot_rem(self, other: Self) -> (Self, Self) {
                    (self.wrapping_div(other), self.wrapping_rem(other))
                }
            }
        )*
    };
}

impl_machine_integer!(i32 => "Z32", i64 => "Z64");

/// The ring of 32-bit integers.
pub type Z32 = IntegerRing<i32>;
/// The ring of 32-bit integers.
pub const Z32: Z32 = IntegerRing::new();
/// The ring of 64-bit integers.
pub type Z64 = IntegerRing<i64>;
/// The ring of 64-bit integers.
pub const Z64: Z64 = IntegerRing::new();

/// The ring of integers that fit in the machine type `I`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct IntegerRing<I> {
    _phantom: PhantomData<I>,
}

impl<I: MachineInteger> Default for IntegerRing<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I> IntegerRing<I> {
    pub const fn new() -> IntegerRing<I> {
        IntegerRing {
            _phantom: PhantomData,
        }
    }
}

impl<I: MachineInteger> IntegerRing<I> {
    /// Convert a host integer into an element of this ring.
    #[inline]
    pub fn to_element(&self, n: i64) -> I {
        I::from_i64_wrapping(n)
    }
}

impl<I: MachineInteger> Display for IntegerRing<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(I::RING_NAME)
    }
}

impl<I: MachineInteger> Ring for IntegerRing<I> {
    type Element = I;

    const IS_FIELD: bool = false;
    const IS_EUCLIDEAN_DOMAIN: bool = true;

    #[inline]
    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        a.wrapping_add(b)
    }

    #[inline]
    fn sub(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        a.wrapping_sub(b)
    }

    #[inline]
    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        a.wrapping_mul(b)
    }

    #[inline]
    fn neg(&self, a: &Self::Element) -> Self::Element {
        a.wrapping_neg()
    }

    #[inline]
    fn zero(&self) -> Self::Element {
        I::zero()
    }

    #[inline]
    fn one(&self) -> Self::Element {
        I::one()
    }

    #[inline]
    fn nth(&self, n: i64) -> Self::Element {
        I::from_i64_wrapping(n)
    }

    #[inline]
    fn is_zero(a: &Self::Element) -> bool {
        *a == I::zero()
    }

    #[inline]
    fn is_one(&self, a: &Self::Element) -> bool {
        *a == I::one()
    }

    fn try_div(&self, a: &Self::Element, b: &Self::Element) -> Option<Self::Element> {
        if Self::is_zero(b) {
            return None;
        }

        let (q, r) = a.wrapping_quot_rem(*b);
        if Self::is_zero(&r) {
            Some(q)
        } else {
            None
        }
    }

    fn sample(&self, rng: &mut impl rand::RngCore, range: (i64, i64)) -> Self::Element {
        I::from_i64_wrapping(rng.gen_range(range.0..range.1))
    }

    #[inline]
    fn evaluate<T: Scalar>(&self, a: &Self::Element, _x: T) -> T {
        T::from_integer(a.as_())
    }

    fn format<W: std::fmt::Write>(
        &self,
        element: &Self::Element,
        _opts: &PrintOptions,
        _in_product: bool,
        f: &mut W,
    ) -> Result<(), Error> {
        write!(f, "{}", element)
    }
}

impl<I: MachineInteger> EuclideanDomain for IntegerRing<I> {
    /// Truncating division. Panics when dividing by zero.
    fn quot_rem(&self, a: &Self::Element, b: &Self::Element) -> (Self::Element, Self::Element) {
        a.wrapping_quot_rem(*b)
    }

    fn gcd(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        euclid_gcd(self, a, b)
    }

    #[inline]
    fn pos(&self, a: &Self::Element) -> bool {
        *a > I::zero()
    }
}

impl<I: MachineInteger> NumericRing for IntegerRing<I> {
    #[inline]
    fn get<T: Scalar>(&self, a: &Self::Element) -> T {
        T::from_integer(a.as_())
    }
}

#[cfg(test)]
mod test {
    use crate::domains::{EuclideanDomain, NumericRing, Ring};

    use super::{Z32, Z64};

    #[test]
    fn arithmetic() {
        assert_eq!(Z32.add(&2, &3), 5);
        assert_eq!(Z32.sub(&2, &3), -1);
        assert_eq!(Z32.mul(&-4, &3), -12);
        assert_eq!(Z32.neg(&7), -7);
        assert_eq!(Z32.nth(12), 12);
        assert!(Z32::is_zero(&Z32.zero()));
        assert!(Z32.is_one(&Z32.one()));
    }

    #[test]
    fn wraparound() {
        assert_eq!(Z32.add(&i32::MAX, &1), i32::MIN);
        assert_eq!(Z32.neg(&i32::MIN), i32::MIN);
        assert_eq!(Z32.nth(1 << 32), 0);
        assert_eq!(Z64.mul(&(1 << 62), &4), 0);
    }

    #[test]
    fn division() {
        assert_eq!(Z32.quot_rem(&7, &2), (3, 1));
        assert_eq!(Z32.quot_rem(&-7, &2), (-3, -1));
        assert_eq!(Z32.try_div(&12, &4), Some(3));
        assert_eq!(Z32.try_div(&12, &5), None);
        assert_eq!(Z32.try_div(&12, &0), None);
    }

    #[test]
    #[should_panic]
    fn divide_by_zero() {
        let _ = Z64.quot_rem(&1, &0);
    }

    #[test]
    fn gcd_and_pos() {
        assert_eq!(Z32.gcd(&12, &6), 6);
        assert_eq!(Z32.gcd(&5, &3), 1);
        assert_eq!(Z64.gcd(&-12, &-18), 6);
        assert!(Z32.pos(&1));
        assert!(!Z32.pos(&0));
        assert!(!Z32.pos(&-1));
    }

    #[test]
    fn conversion_and_printing() {
        assert_eq!(Z32.get::<f64>(&-5), -5.);
        assert_eq!(Z32.evaluate(&3, 100f32), 3.);
        assert_eq!(Z64.printer(&-42).to_string(), "-42");
        assert_eq!(Z32.to_string(), "Z32");
    }
}
