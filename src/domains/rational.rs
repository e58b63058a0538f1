//! The field of fractions over a Euclidean domain.
//!
//! Fractions are kept in normal form: the gcd of numerator and denominator is
//! a unit, the denominator is multiplied by its [FractionNormalization] factor
//! and zero is represented as `0/1`. Integer denominators are positive,
//! polynomial denominators over the rationals have coprime integer
//! coefficients and a positive leading coefficient.
use std::fmt::{Display, Error, Formatter};

use rand::RngCore;

use crate::{
    error::AlgebraError,
    poly::univariate::PolynomialRing,
    printer::PrintOptions,
};

use super::{
    integer::{IntegerRing, MachineInteger, Z32, Z64},
    integer_mod::IntegerMod,
    EuclideanDomain, Field, NumericRing, Ring, Scalar,
};

/// The field of rational numbers with 32-bit numerator and denominator.
pub type Q32 = FractionField<IntegerRing<i32>>;
/// The field of rational numbers with 32-bit numerator and denominator.
pub const Q32: Q32 = FractionField::new(Z32);
/// The field of rational numbers with 64-bit numerator and denominator.
pub type Q64 = FractionField<IntegerRing<i64>>;
/// The field of rational numbers with 64-bit numerator and denominator.
pub const Q64: Q64 = FractionField::new(Z64);

/// Map a Euclidean domain to its field of fractions. A domain that already
/// is a field is its own field of fractions, so that fractions are never
/// nested.
pub trait ToFractionField: EuclideanDomain {
    type FractionField: Field;

    fn fraction_field(&self) -> Self::FractionField;
    /// Embed `a` into the fraction field as `a/1`.
    fn inject(&self, a: &Self::Element) -> <Self::FractionField as Ring>::Element;
    /// Create the fraction `numerator/denominator`.
    fn to_fraction(
        &self,
        numerator: &Self::Element,
        denominator: &Self::Element,
    ) -> <Self::FractionField as Ring>::Element;
    /// Get the numerator of a fraction. For an integral fraction this is
    /// the inverse of [ToFractionField::inject].
    fn numerator(&self, a: &<Self::FractionField as Ring>::Element) -> Self::Element;
}

/// Rings whose elements can serve as the denominator of a fraction in
/// normal form.
pub trait FractionNormalization: EuclideanDomain {
    /// Get the factor that normalizes the element `a`.
    /// - For a field, this is the inverse of `a`.
    /// - For the integers, this is the sign of `a`.
    /// - For a polynomial ring, this is the factor that normalizes all coefficients jointly.
    fn get_normalization_factor(&self, a: &Self::Element) -> Self::Element;

    /// Get a factor that normalizes all `elements` jointly, for example
    /// the coefficients of a polynomial. The first nonzero element decides.
    fn get_joint_normalization_factor(&self, elements: &[Self::Element]) -> Self::Element {
        elements
            .iter()
            .find(|e| !Self::is_zero(e))
            .map(|e| self.get_normalization_factor(e))
            .unwrap_or_else(|| self.one())
    }
}

impl<I: MachineInteger> FractionNormalization for IntegerRing<I> {
    fn get_normalization_factor(&self, a: &I) -> I {
        if *a < I::zero() {
            self.neg(&I::one())
        } else {
            I::one()
        }
    }
}

impl<const P: i32> FractionNormalization for IntegerMod<P> {
    fn get_normalization_factor(&self, a: &Self::Element) -> Self::Element {
        self.inv(a)
    }
}

impl<R: FractionNormalization> FractionNormalization for FractionField<R> {
    fn get_normalization_factor(&self, a: &Self::Element) -> Self::Element {
        self.inv(a)
    }

    /// Divide by the content, the gcd of all elements, with the sign of the
    /// first nonzero element.
    fn get_joint_normalization_factor(&self, elements: &[Self::Element]) -> Self::Element {
        let Some(first) = elements.iter().find(|e| !Self::is_zero(e)) else {
            return self.one();
        };

        let content = elements
            .iter()
            .fold(self.zero(), |acc, e| self.gcd(&acc, e));
        if self.pos(first) {
            self.inv(&content)
        } else {
            self.neg(&self.inv(&content))
        }
    }
}

impl<R: FractionNormalization> FractionNormalization for PolynomialRing<R> {
    fn get_normalization_factor(&self, a: &Self::Element) -> Self::Element {
        a.constant(
            self.coefficient_ring()
                .get_joint_normalization_factor(a.coefficients()),
        )
    }
}

/// The fraction field of `R`.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct FractionField<R: Ring> {
    ring: R,
}

impl<R: Ring> FractionField<R> {
    pub const fn new(ring: R) -> FractionField<R> {
        FractionField { ring }
    }

    /// The ring of numerators and denominators.
    pub fn ring(&self) -> &R {
        &self.ring
    }
}

impl<R: Ring> Display for FractionField<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Frac({})", self.ring)
    }
}

/// A fraction of two elements of the ring `R`.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Fraction<R: Ring> {
    numerator: R::Element,
    denominator: R::Element,
}

impl<R: Ring> Fraction<R> {
    pub fn numerator(&self) -> &R::Element {
        &self.numerator
    }

    pub fn denominator(&self) -> &R::Element {
        &self.denominator
    }
}

impl<R: FractionNormalization> FractionField<R> {
    /// Create the fraction `numerator/denominator` in normal form.
    ///
    /// Panics if the denominator is zero and the numerator is not.
    pub fn to_element(&self, numerator: R::Element, denominator: R::Element) -> Fraction<R> {
        if R::is_zero(&denominator) && !R::is_zero(&numerator) {
            panic!("Division by zero");
        }

        self.normalize(numerator, denominator)
    }

    /// Create the fraction `numerator/1`.
    pub fn to_element_numerator(&self, numerator: R::Element) -> Fraction<R> {
        Fraction {
            numerator,
            denominator: self.ring.one(),
        }
    }

    /// Bring a fraction into normal form.
    pub fn simplify(&self, a: &Fraction<R>) -> Fraction<R> {
        self.normalize(a.numerator.clone(), a.denominator.clone())
    }

    /// Divide `a` by `b`, returning an error if `b` is zero and `a` is not.
    pub fn checked_div(&self, a: &Fraction<R>, b: &Fraction<R>) -> Result<Fraction<R>, AlgebraError> {
        if Self::is_zero(b) && !Self::is_zero(a) {
            Err(AlgebraError::DivisionByZero)
        } else {
            Ok(self.div(a, b))
        }
    }

    fn normalize(&self, mut numerator: R::Element, mut denominator: R::Element) -> Fraction<R> {
        if R::is_zero(&numerator) {
            return self.zero();
        }

        let g = self.ring.gcd(&numerator, &denominator);
        if !self.ring.is_one(&g) {
            numerator = self.ring.quot(&numerator, &g);
            denominator = self.ring.quot(&denominator, &g);
        }

        let f = self.ring.get_normalization_factor(&denominator);
        if self.ring.is_one(&f) {
            Fraction {
                numerator,
                denominator,
            }
        } else {
            Fraction {
                numerator: self.ring.mul(&numerator, &f),
                denominator: self.ring.mul(&denominator, &f),
            }
        }
    }
}

impl<R: FractionNormalization> Ring for FractionField<R> {
    type Element = Fraction<R>;

    const IS_FIELD: bool = true;
    const IS_EUCLIDEAN_DOMAIN: bool = true;

    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        if a.denominator == b.denominator {
            return self.normalize(
                self.ring.add(&a.numerator, &b.numerator),
                a.denominator.clone(),
            );
        }

        let numerator = self.ring.add(
            &self.ring.mul(&a.numerator, &b.denominator),
            &self.ring.mul(&b.numerator, &a.denominator),
        );
        self.normalize(numerator, self.ring.mul(&a.denominator, &b.denominator))
    }

    fn sub(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        self.add(a, &self.neg(b))
    }

    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        self.normalize(
            self.ring.mul(&a.numerator, &b.numerator),
            self.ring.mul(&a.denominator, &b.denominator),
        )
    }

    fn neg(&self, a: &Self::Element) -> Self::Element {
        Fraction {
            numerator: self.ring.neg(&a.numerator),
            denominator: a.denominator.clone(),
        }
    }

    fn zero(&self) -> Self::Element {
        Fraction {
            numerator: self.ring.zero(),
            denominator: self.ring.one(),
        }
    }

    fn one(&self) -> Self::Element {
        Fraction {
            numerator: self.ring.one(),
            denominator: self.ring.one(),
        }
    }

    fn nth(&self, n: i64) -> Self::Element {
        self.to_element_numerator(self.ring.nth(n))
    }

    fn pow(&self, b: &Self::Element, e: u64) -> Self::Element {
        // the powers of coprime parts are coprime
        Fraction {
            numerator: self.ring.pow(&b.numerator, e),
            denominator: self.ring.pow(&b.denominator, e),
        }
    }

    fn is_zero(a: &Self::Element) -> bool {
        R::is_zero(&a.numerator)
    }

    fn is_one(&self, a: &Self::Element) -> bool {
        self.ring.is_one(&a.numerator) && self.ring.is_one(&a.denominator)
    }

    fn try_div(&self, a: &Self::Element, b: &Self::Element) -> Option<Self::Element> {
        if Self::is_zero(b) {
            None
        } else {
            Some(self.div(a, b))
        }
    }

    fn sample(&self, rng: &mut impl RngCore, range: (i64, i64)) -> Self::Element {
        let numerator = self.ring.sample(rng, range);
        let denominator = self.ring.sample(rng, (1, range.1.max(2)));
        if R::is_zero(&denominator) {
            self.to_element_numerator(numerator)
        } else {
            self.normalize(numerator, denominator)
        }
    }

    fn evaluate<T: Scalar>(&self, a: &Self::Element, x: T) -> T {
        self.ring.evaluate(&a.numerator, x) / self.ring.evaluate(&a.denominator, x)
    }

    fn is_compound(&self, a: &Self::Element) -> bool {
        !self.ring.is_one(&a.denominator) || self.ring.is_compound(&a.numerator)
    }

    fn format<W: std::fmt::Write>(
        &self,
        element: &Self::Element,
        opts: &PrintOptions,
        in_product: bool,
        f: &mut W,
    ) -> Result<(), Error> {
        if self.ring.is_one(&element.denominator) {
            return self.ring.format(&element.numerator, opts, in_product, f);
        }

        let wrap = in_product && opts.parenthesize_fractions;
        if wrap {
            f.write_char('(')?;
        }

        self.ring.format(&element.numerator, opts, true, f)?;
        if self.ring.is_compound(&element.numerator) || self.ring.is_compound(&element.denominator)
        {
            f.write_str(opts.division_separator())?;
        } else {
            f.write_char('/')?;
        }
        self.ring.format(&element.denominator, opts, true, f)?;

        if wrap {
            f.write_char(')')?;
        }
        Ok(())
    }
}

impl<R: FractionNormalization> EuclideanDomain for FractionField<R> {
    fn quot_rem(&self, a: &Self::Element, b: &Self::Element) -> (Self::Element, Self::Element) {
        (self.div(a, b), self.zero())
    }

    /// The gcd of the numerators divided by the lcm of the denominators.
    fn gcd(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        let numerator = self.ring.gcd(&a.numerator, &b.numerator);
        if R::is_zero(&numerator) {
            return self.zero();
        }

        let g = self.ring.gcd(&a.denominator, &b.denominator);
        let lcm = self
            .ring
            .mul(&self.ring.quot(&a.denominator, &g), &b.denominator);
        self.normalize(numerator, lcm)
    }

    fn pos(&self, a: &Self::Element) -> bool {
        self.ring.pos(&a.numerator) == self.ring.pos(&a.denominator)
    }
}

impl<R: FractionNormalization> Field for FractionField<R> {
    /// Divide `a` by `b`. Dividing zero by zero yields one.
    ///
    /// Panics if `b` is zero and `a` is not.
    fn div(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        if Self::is_zero(b) {
            if Self::is_zero(a) {
                return self.one();
            }
            panic!("Division by zero");
        }

        self.normalize(
            self.ring.mul(&a.numerator, &b.denominator),
            self.ring.mul(&a.denominator, &b.numerator),
        )
    }

    fn inv(&self, a: &Self::Element) -> Self::Element {
        self.div(&self.one(), a)
    }
}

impl<R: FractionNormalization + NumericRing> NumericRing for FractionField<R> {
    fn get<T: Scalar>(&self, a: &Self::Element) -> T {
        self.ring.get::<T>(&a.numerator) / self.ring.get::<T>(&a.denominator)
    }
}

impl<I: MachineInteger> ToFractionField for IntegerRing<I> {
    type FractionField = FractionField<IntegerRing<I>>;

    fn fraction_field(&self) -> Self::FractionField {
        FractionField::new(*self)
    }

    fn inject(&self, a: &I) -> Fraction<Self> {
        self.fraction_field().to_element_numerator(*a)
    }

    fn to_fraction(&self, numerator: &I, denominator: &I) -> Fraction<Self> {
        self.fraction_field().to_element(*numerator, *denominator)
    }

    fn numerator(&self, a: &Fraction<Self>) -> I {
        a.numerator
    }
}

impl<R: FractionNormalization> ToFractionField for PolynomialRing<R> {
    type FractionField = FractionField<PolynomialRing<R>>;

    fn fraction_field(&self) -> Self::FractionField {
        FractionField::new(self.clone())
    }

    fn inject(&self, a: &Self::Element) -> Fraction<Self> {
        Fraction {
            numerator: a.clone(),
            denominator: self.one(),
        }
    }

    fn to_fraction(&self, numerator: &Self::Element, denominator: &Self::Element) -> Fraction<Self> {
        self.fraction_field()
            .to_element(numerator.clone(), denominator.clone())
    }

    fn numerator(&self, a: &Fraction<Self>) -> Self::Element {
        a.numerator.clone()
    }
}

impl<R: FractionNormalization> ToFractionField for FractionField<R> {
    type FractionField = Self;

    fn fraction_field(&self) -> Self {
        self.clone()
    }

    fn inject(&self, a: &Fraction<R>) -> Fraction<R> {
        a.clone()
    }

    fn to_fraction(&self, numerator: &Fraction<R>, denominator: &Fraction<R>) -> Fraction<R> {
        self.div(numerator, denominator)
    }

    fn numerator(&self, a: &Fraction<R>) -> Fraction<R> {
        a.clone()
    }
}
