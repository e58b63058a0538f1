//! Defines core algebraic traits and data structures.
//!
//! The core trait is [Ring], which has two binary operations, addition and multiplication.
//! Each ring has an associated element type, that should not be confused with the ring type itself.
//! For example:
//! - The ring of 32-bit integers [Z32](type@integer::Z32) has elements of type [i32].
//! - The ring of integers modulo 7, [IntegerMod<7>](integer_mod::IntegerMod), has elements of type [Residue](integer_mod::Residue).
//! - The field of rational numbers [Q64](type@rational::Q64) has elements of type [Fraction](rational::Fraction).
//! - The ring of polynomials [PolynomialRing](crate::poly::univariate::PolynomialRing) has elements of type [Polynomial](crate::poly::univariate::Polynomial).
//!
//! The ring elements do not know how to add or multiply themselves,
//! but rather the ring itself does. Most structures in this crate are generic over the ring type.
//!
//! An extension of the ring trait is the [`EuclideanDomain`] trait, which adds the ability to compute remainders, quotients, and gcds.
//! Another extension is the [`Field`] trait, which adds the ability to divide and invert elements.
pub mod integer;
pub mod integer_mod;
pub mod rational;

use std::fmt::{Debug, Display, Error, Formatter};
use std::hash::Hash;

use num_traits::{AsPrimitive, Num};

use crate::printer::PrintOptions;

/// A numerical type into which ring elements can be evaluated,
/// for example `f64` or `i64`.
pub trait Scalar: Num + Copy + 'static {
    /// Convert a host integer into the scalar type.
    fn from_integer(n: i64) -> Self;
}

impl<T: Num + Copy + 'static> Scalar for T
where
    i64: AsPrimitive<T>,
{
    #[inline]
    fn from_integer(n: i64) -> T {
        n.as_()
    }
}

/// A ring is a set with two binary operations, addition and multiplication.
/// Examples of rings include the integers, the integers modulo `n` and polynomials.
///
/// Each ring has an element type, that should not be confused with the ring type itself.
/// The ring objects are cheap to clone and carry all the information needed
/// to operate on their elements.
pub trait Ring: Clone + PartialEq + Eq + Hash + Debug + Display {
    /// The element of a ring. For example, the elements of the ring of integers [Z32](type@integer::Z32), `Z32::Element`, are [i32].
    type Element: Clone + PartialEq + Eq + Hash + Debug;

    /// Every nonzero element has a multiplicative inverse.
    const IS_FIELD: bool;
    /// Division with remainder is available.
    const IS_EUCLIDEAN_DOMAIN: bool;

    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn sub(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn neg(&self, a: &Self::Element) -> Self::Element;
    fn zero(&self) -> Self::Element;
    fn one(&self) -> Self::Element;
    /// Return the nth element by computing `n * 1`.
    fn nth(&self, n: i64) -> Self::Element;
    fn is_zero(a: &Self::Element) -> bool;
    fn is_one(&self, a: &Self::Element) -> bool;
    /// Divide `a` by `b` if the division is exact.
    fn try_div(&self, a: &Self::Element, b: &Self::Element) -> Option<Self::Element>;
    /// Sample a random element. The range bounds the size of the parts of
    /// the element, for example the coefficients of a polynomial.
    fn sample(&self, rng: &mut impl rand::RngCore, range: (i64, i64)) -> Self::Element;
    /// Evaluate the element, with `x` substituted for the variable if the ring has one.
    fn evaluate<T: Scalar>(&self, a: &Self::Element, x: T) -> T;
    /// Write the element to `f`. If `in_product` is set, the element is
    /// about to be multiplied by something else and compound elements should
    /// be delimited.
    fn format<W: std::fmt::Write>(
        &self,
        element: &Self::Element,
        opts: &PrintOptions,
        in_product: bool,
        f: &mut W,
    ) -> Result<(), Error>;

    fn add_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        *a = self.add(a, b);
    }

    fn sub_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        *a = self.sub(a, b);
    }

    fn mul_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        *a = self.mul(a, b);
    }

    /// Compute `a += b * c`.
    fn add_mul_assign(&self, a: &mut Self::Element, b: &Self::Element, c: &Self::Element) {
        *a = self.add(a, &self.mul(b, c));
    }

    /// Compute `b^e` by repeated squaring.
    fn pow(&self, b: &Self::Element, mut e: u64) -> Self::Element {
        let mut result = self.one();
        let mut base = b.clone();
        while e > 0 {
            if e & 1 == 1 {
                self.mul_assign(&mut result, &base);
            }
            e >>= 1;
            if e > 0 {
                base = self.mul(&base, &base);
            }
        }
        result
    }

    /// Whether the printed element consists of more than a single factor,
    /// so that it must be delimited inside a product or a fraction.
    fn is_compound(&self, _element: &Self::Element) -> bool {
        false
    }

    fn printer<'a>(&'a self, element: &'a Self::Element) -> RingPrinter<'a, Self> {
        RingPrinter::new(self, element)
    }

    /// Add all elements of the iterator.
    fn sum<'a, I: IntoIterator<Item = &'a Self::Element>>(&self, elements: I) -> Self::Element
    where
        Self::Element: 'a,
    {
        elements.into_iter().fold(self.zero(), |acc, e| self.add(&acc, e))
    }

    /// Multiply all elements of the iterator.
    fn product<'a, I: IntoIterator<Item = &'a Self::Element>>(&self, elements: I) -> Self::Element
    where
        Self::Element: 'a,
    {
        elements.into_iter().fold(self.one(), |acc, e| self.mul(&acc, e))
    }
}

/// A Euclidean domain is a ring that supports division with remainder, quotients, and gcds.
pub trait EuclideanDomain: Ring {
    /// Compute the quotient and remainder of `a / b`. The remainder is
    /// smaller than `b` in the size measure of the domain, such as the
    /// absolute value or the degree.
    fn quot_rem(&self, a: &Self::Element, b: &Self::Element) -> (Self::Element, Self::Element);
    fn gcd(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    /// Whether `a` is positive in the ordering of the domain. The
    /// representative of a gcd or the denominator of a fraction is chosen
    /// such that it is positive.
    fn pos(&self, a: &Self::Element) -> bool;

    fn quot(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        self.quot_rem(a, b).0
    }

    fn rem(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        self.quot_rem(a, b).1
    }
}

/// A field is a ring that supports division and inversion.
pub trait Field: EuclideanDomain {
    fn div(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn inv(&self, a: &Self::Element) -> Self::Element;

    fn div_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        *a = self.div(a, b);
    }
}

/// Rings whose elements are plain numbers that can be read out directly.
pub trait NumericRing: Ring {
    /// Convert the element to the scalar type `T`.
    fn get<T: Scalar>(&self, a: &Self::Element) -> T;
}

/// Compute the gcd of `a` and `b` using the Euclidean algorithm.
/// The result is normalized to be positive in the ordering of the domain.
///
/// Termination requires that the remainder is strictly smaller than the
/// divisor in every step.
pub fn euclid_gcd<R: EuclideanDomain>(ring: &R, a: &R::Element, b: &R::Element) -> R::Element {
    let mut a = a.clone();
    let mut b = b.clone();

    while !R::is_zero(&b) {
        let r = ring.rem(&a, &b);
        a = std::mem::replace(&mut b, r);
    }

    if ring.pos(&a) {
        a
    } else {
        ring.neg(&a)
    }
}

/// Provides an interface for printing elements of a ring with optional customization,
/// suitable as an argument to [format!]. Internally, it will call [Ring::format].
pub struct RingPrinter<'a, R: Ring> {
    pub ring: &'a R,
    pub element: &'a R::Element,
    pub opts: PrintOptions,
}

impl<'a, R: Ring> RingPrinter<'a, R> {
    pub fn new(ring: &'a R, element: &'a R::Element) -> RingPrinter<'a, R> {
        RingPrinter {
            ring,
            element,
            opts: PrintOptions::default(),
        }
    }

    pub fn with_options(mut self, opts: PrintOptions) -> RingPrinter<'a, R> {
        self.opts = opts;
        self
    }
}

impl<'a, R: Ring> Display for RingPrinter<'a, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.ring.format(self.element, &self.opts, false, f)
    }
}

#[cfg(test)]
mod test {
    use super::{euclid_gcd, Ring, Scalar};
    use crate::domains::integer::{Z32, Z64};

    #[test]
    fn gcd() {
        assert_eq!(euclid_gcd(&Z32, &12, &6), 6);
        assert_eq!(euclid_gcd(&Z32, &5, &3), 1);
        assert_eq!(euclid_gcd(&Z32, &-4, &6), 2);
        assert_eq!(euclid_gcd(&Z32, &0, &-7), 7);
        assert_eq!(euclid_gcd(&Z32, &0, &0), 0);
    }

    #[test]
    fn pow_sum_product() {
        assert_eq!(Z64.pow(&3, 5), 243);
        assert_eq!(Z64.pow(&-2, 0), 1);
        assert_eq!(Z64.sum(&[1, 2, 3, 4]), 10);
        assert_eq!(Z64.product(&[1, 2, 3, 4]), 24);
        assert_eq!(Z64.sum(&[]), 0);
    }

    #[test]
    fn scalar_conversion() {
        assert_eq!(f64::from_integer(-3), -3.);
        assert_eq!(i32::from_integer(7), 7);
        assert_eq!(f32::from_integer(1 << 20), 1048576.);
    }
}
