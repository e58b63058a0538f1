//! Dense univariate polynomials over an arbitrary coefficient ring.
//!
//! Coefficients are stored with the highest power first. A polynomial in
//! canonical form has a nonzero leading coefficient, except for the zero
//! polynomial which is the single constant `0`. All arithmetic returns
//! canonical polynomials.
use std::{
    fmt::{Error, Write},
    ops::{Add, Div, Mul, Neg, Rem, Sub},
};

use rand::Rng as _;
use tracing::{debug, instrument};

use crate::{
    domains::{euclid_gcd, EuclideanDomain, Ring, Scalar},
    printer::PrintOptions,
    sequence::Sequence,
};

use super::{Variable, DEFAULT_VARIABLE};

/// The ring of polynomials in one variable with coefficients in `R`.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct PolynomialRing<R: Ring> {
    ring: R,
    variable: Variable,
}

impl<R: Ring> PolynomialRing<R> {
    /// Create a polynomial ring in the variable `x`.
    pub fn new(coeff_ring: R) -> PolynomialRing<R> {
        Self::with_variable(coeff_ring, DEFAULT_VARIABLE)
    }

    pub fn with_variable(coeff_ring: R, variable: &str) -> PolynomialRing<R> {
        PolynomialRing {
            ring: coeff_ring,
            variable: variable.into(),
        }
    }

    pub fn new_from_poly(poly: &Polynomial<R>) -> PolynomialRing<R> {
        PolynomialRing {
            ring: poly.ring.clone(),
            variable: poly.variable.clone(),
        }
    }

    pub fn coefficient_ring(&self) -> &R {
        &self.ring
    }

    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// Create a polynomial from its coefficients, highest power first.
    pub fn from_coefficients<I: IntoIterator<Item = R::Element>>(
        &self,
        coefficients: I,
    ) -> Polynomial<R> {
        self.from_raw_coefficients(coefficients).canonicalize()
    }

    /// Create a polynomial from its coefficients, highest power first,
    /// keeping leading zeros.
    pub fn from_raw_coefficients<I: IntoIterator<Item = R::Element>>(
        &self,
        coefficients: I,
    ) -> Polynomial<R> {
        let mut coefficients: Sequence<_> = coefficients.into_iter().collect();
        if coefficients.is_empty() {
            coefficients.push(self.ring.zero());
        }

        Polynomial {
            coefficients,
            ring: self.ring.clone(),
            variable: self.variable.clone(),
        }
    }

    /// Create the constant polynomial `c`.
    pub fn constant(&self, c: R::Element) -> Polynomial<R> {
        self.from_raw_coefficients([c])
    }

    /// Create the polynomial `c * x^exponent`.
    pub fn monomial(&self, c: R::Element, exponent: usize) -> Polynomial<R> {
        self.constant(c).mul_exp(exponent)
    }

    /// Create the polynomial `x`.
    pub fn var(&self) -> Polynomial<R> {
        self.monomial(self.ring.one(), 1)
    }
}

impl<R: Ring> std::fmt::Display for PolynomialRing<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[{}]", self.ring, self.variable)
    }
}

impl<R: EuclideanDomain> Ring for PolynomialRing<R> {
    type Element = Polynomial<R>;

    const IS_FIELD: bool = false;
    const IS_EUCLIDEAN_DOMAIN: bool = R::IS_EUCLIDEAN_DOMAIN;

    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        a + b
    }

    fn sub(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        a - b
    }

    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        a * b
    }

    fn neg(&self, a: &Self::Element) -> Self::Element {
        a.clone().neg()
    }

    fn zero(&self) -> Self::Element {
        self.constant(self.ring.zero())
    }

    fn one(&self) -> Self::Element {
        self.constant(self.ring.one())
    }

    fn nth(&self, n: i64) -> Self::Element {
        self.constant(self.ring.nth(n))
    }

    fn pow(&self, b: &Self::Element, e: u64) -> Self::Element {
        b.pow(e)
    }

    fn is_zero(a: &Self::Element) -> bool {
        a.is_zero()
    }

    fn is_one(&self, a: &Self::Element) -> bool {
        a.is_one()
    }

    fn try_div(&self, a: &Self::Element, b: &Self::Element) -> Option<Self::Element> {
        if b.is_zero() {
            return None;
        }

        let (q, r) = a.quot_rem(b);
        if r.is_zero() {
            Some(q)
        } else {
            None
        }
    }

    /// Sample a polynomial of degree at most 3.
    fn sample(&self, rng: &mut impl rand::RngCore, range: (i64, i64)) -> Self::Element {
        let terms = rng.gen_range(1..5);
        let mut coefficients = Sequence::with_capacity(terms);
        for _ in 0..terms {
            coefficients.push(self.ring.sample(&mut *rng, range));
        }
        self.from_coefficients(coefficients)
    }

    fn evaluate<T: Scalar>(&self, a: &Self::Element, x: T) -> T {
        a.evaluate(x)
    }

    fn is_compound(&self, a: &Self::Element) -> bool {
        a.is_compound()
    }

    fn format<W: Write>(
        &self,
        element: &Self::Element,
        opts: &PrintOptions,
        in_product: bool,
        f: &mut W,
    ) -> Result<(), Error> {
        element.format(opts, in_product, f)
    }
}

impl<R: EuclideanDomain> EuclideanDomain for PolynomialRing<R> {
    /// Divide `a` by `b` with remainder. Panics if the coefficient division is
    /// not exact enough to make the degree of the remainder smaller than
    /// the degree of `b`.
    fn quot_rem(&self, a: &Self::Element, b: &Self::Element) -> (Self::Element, Self::Element) {
        let (q, r) = a.quot_rem(b);
        assert!(
            r.is_zero() || r.degree() < b.degree(),
            "Cannot reduce {} modulo {}: the leading coefficient does not divide",
            a,
            b
        );
        (q, r)
    }

    /// The monic gcd. Panics when a division step is inexact, see [Polynomial::gcd].
    fn gcd(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        a.gcd(b)
    }

    fn pos(&self, a: &Self::Element) -> bool {
        a.pos()
    }
}

/// A univariate polynomial with coefficients in the ring `R`.
#[derive(Clone)]
pub struct Polynomial<R: Ring> {
    coefficients: Sequence<R::Element>,
    ring: R,
    variable: Variable,
}

impl<R: Ring> std::fmt::Debug for Polynomial<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut first = true;
        write!(f, "[ ")?;
        for c in self.coefficients.iter() {
            if first {
                first = false;
            } else {
                write!(f, ", ")?;
            }
            write!(f, "{{ {:?} }}", c)?;
        }
        write!(f, " ]")
    }
}

impl<R: Ring> std::fmt::Display for Polynomial<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.format(&PrintOptions::default(), false, f)
    }
}

impl<R: Ring> Polynomial<R> {
    /// Create a polynomial with the given coefficients, inheriting the ring
    /// and variable from `self`.
    #[inline]
    fn with_coefficients(&self, coefficients: Sequence<R::Element>) -> Self {
        Polynomial {
            coefficients,
            ring: self.ring.clone(),
            variable: self.variable.clone(),
        }
    }

    /// Constructs a zero polynomial, inheriting the ring and variable from `self`.
    #[inline]
    pub fn zero(&self) -> Self {
        self.constant(self.ring.zero())
    }

    /// Constructs a polynomial that is one, inheriting the ring and variable from `self`.
    #[inline]
    pub fn one(&self) -> Self {
        self.constant(self.ring.one())
    }

    /// Constructs a constant polynomial, inheriting the ring and variable from `self`.
    #[inline]
    pub fn constant(&self, coeff: R::Element) -> Self {
        self.with_coefficients(Sequence::from_elem(coeff, 1))
    }

    /// Constructs the polynomial `coeff * x^exponent`.
    pub fn monomial(&self, coeff: R::Element, exponent: usize) -> Self {
        self.constant(coeff).mul_exp(exponent)
    }

    pub fn ring(&self) -> &R {
        &self.ring
    }

    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// The coefficients, highest power first.
    pub fn coefficients(&self) -> &[R::Element] {
        self.coefficients.as_slice()
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.coefficients.iter().all(R::is_zero)
    }

    #[inline]
    pub fn is_one(&self) -> bool {
        self.is_constant() && self.ring.is_one(&self.coefficients[self.degree()])
    }

    /// Returns true if all non-constant coefficients are zero.
    #[inline]
    pub fn is_constant(&self) -> bool {
        self.coefficients.as_slice()[..self.degree()]
            .iter()
            .all(R::is_zero)
    }

    /// Returns true if the leading coefficient is nonzero or if the
    /// polynomial is a constant.
    pub fn is_canonical(&self) -> bool {
        self.degree() == 0 || !R::is_zero(&self.coefficients[0])
    }

    fn coeff_ref(&self, power: usize) -> Option<&R::Element> {
        if power > self.degree() {
            None
        } else {
            Some(&self.coefficients[self.degree() - power])
        }
    }

    /// Get the coefficient of `x^power`.
    pub fn coeff_at(&self, power: usize) -> R::Element {
        self.coeff_ref(power)
            .cloned()
            .unwrap_or_else(|| self.ring.zero())
    }

    /// Get the leading coefficient, skipping leading zeros.
    pub fn lcoeff(&self) -> R::Element {
        self.coefficients
            .iter()
            .find(|c| !R::is_zero(c))
            .unwrap_or(&self.coefficients[0])
            .clone()
    }

    /// Remove leading zero coefficients.
    pub fn canonicalize(mut self) -> Self {
        let leading_zeros = self
            .coefficients
            .iter()
            .take_while(|c| R::is_zero(c))
            .count();

        if leading_zeros == self.coefficients.len() {
            self.coefficients = Sequence::from_elem(self.ring.zero(), 1);
        } else if leading_zeros > 0 {
            self.coefficients = self.coefficients.split(leading_zeros).1;
        }

        self
    }

    /// Drop the leading coefficient. A constant is returned unchanged.
    /// The result may have leading zeros.
    pub fn strip(&self) -> Self {
        if self.degree() == 0 {
            return self.clone();
        }

        self.with_coefficients(self.coefficients.clone().split(1).1)
    }

    /// Multiply by `x^exp`.
    pub fn mul_exp(&self, exp: usize) -> Self {
        if exp == 0 || self.is_zero() {
            return self.clone();
        }

        self.with_coefficients(
            self.coefficients
                .clone()
                .concat(Sequence::from_elem(self.ring.zero(), exp)),
        )
    }

    /// Multiply every coefficient by `coeff`.
    pub fn mul_coeff(mut self, coeff: &R::Element) -> Self {
        for c in self.coefficients.as_mut_slice() {
            if !R::is_zero(c) {
                self.ring.mul_assign(c, coeff);
            }
        }

        self.canonicalize()
    }

    /// Compute `self^pow`.
    pub fn pow(&self, mut pow: u64) -> Self {
        if pow == 0 {
            return self.one();
        }

        let mut x = self.clone();
        let mut y = self.one();
        while pow != 1 {
            if pow % 2 == 1 {
                y = &y * &x;
                pow -= 1;
            }

            x = &x * &x;
            pow /= 2;
        }

        x * &y
    }

    /// Evaluate the polynomial at `x` in the scalar type `T` using Horner's scheme.
    /// Each coefficient is converted to `T` separately.
    pub fn evaluate<T: Scalar>(&self, x: T) -> T {
        self.coefficients
            .iter()
            .fold(T::zero(), |acc, c| acc * x + self.ring.evaluate(c, x))
    }

    /// Evaluate the polynomial at a ring element `x`.
    pub fn evaluate_at(&self, x: &R::Element) -> R::Element {
        let mut res = self.ring.zero();
        for c in self.coefficients.iter() {
            res = self.ring.mul(&res, x);
            self.ring.add_assign(&mut res, c);
        }
        res
    }

    /// Substitute `other` for the variable.
    pub fn compose(&self, other: &Self) -> Self {
        let mut res = self.zero();
        for c in self.coefficients.iter() {
            res = &(&res * other) + &self.constant(c.clone());
        }
        res
    }

    /// Compute the derivative with respect to the variable.
    pub fn derivative(&self) -> Self {
        let d = self.degree();
        if d == 0 {
            return self.zero();
        }

        let coefficients = self
            .coefficients
            .iter()
            .take(d)
            .enumerate()
            .map(|(i, c)| self.ring.mul(c, &self.ring.nth((d - i) as i64)))
            .collect();

        self.with_coefficients(coefficients).canonicalize()
    }

    /// Whether the printed polynomial is more than a single factor.
    pub(crate) fn is_compound(&self) -> bool {
        let mut terms = self
            .coefficients
            .iter()
            .enumerate()
            .filter(|(_, c)| !R::is_zero(c));

        match (terms.next(), terms.next()) {
            (Some(_), Some(_)) => true,
            (Some((i, c)), None) => {
                if i == self.degree() {
                    self.ring.is_compound(c)
                } else {
                    !self.ring.is_one(c)
                }
            }
            _ => false,
        }
    }

    pub(crate) fn format<W: Write>(
        &self,
        opts: &PrintOptions,
        in_product: bool,
        f: &mut W,
    ) -> Result<(), Error> {
        if self.is_zero() {
            return f.write_char('0');
        }

        let wrap = in_product && self.is_compound();
        if wrap {
            f.write_char('(')?;
        }

        let d = self.degree();
        let mut first = true;
        for (i, c) in self.coefficients.iter().enumerate() {
            if R::is_zero(c) {
                continue;
            }

            if first {
                first = false;
            } else {
                f.write_str(opts.sum_separator())?;
            }

            let power = d - i;
            if power == 0 {
                self.ring.format(c, opts, false, f)?;
                continue;
            }

            if !self.ring.is_one(c) {
                self.ring.format(c, opts, true, f)?;
                f.write_char(opts.multiplication_operator)?;
            }

            f.write_str(&self.variable)?;
            if power > 1 {
                write!(f, "{}{}", opts.power_operator, power)?;
            }
        }

        if wrap {
            f.write_char(')')?;
        }

        Ok(())
    }

    fn add_or_sub(&self, other: &Self, subtract: bool) -> Self {
        let zero = self.ring.zero();
        let d = self.degree().max(other.degree());

        let coefficients = (0..=d)
            .rev()
            .map(|power| {
                let a = self.coeff_ref(power).unwrap_or(&zero);
                let b = other.coeff_ref(power).unwrap_or(&zero);
                if subtract {
                    self.ring.sub(a, b)
                } else {
                    self.ring.add(a, b)
                }
            })
            .collect();

        self.with_coefficients(coefficients).canonicalize()
    }
}

impl<R: EuclideanDomain> Polynomial<R> {
    /// Whether the leading coefficient is positive.
    pub fn pos(&self) -> bool {
        self.ring.pos(&self.lcoeff())
    }

    /// Divide by `div` using long division, returning the quotient and the remainder.
    /// Every step divides the leading coefficients in the coefficient ring, so
    /// the division stops early if the leading coefficient of `div` does not
    /// divide the leading coefficient of the remainder.
    ///
    /// Panics if `div` is zero.
    pub fn quot_rem(&self, div: &Self) -> (Self, Self) {
        if div.is_zero() {
            panic!("Cannot divide by 0 polynomial");
        }

        let div = div.clone().canonicalize();
        let m = div.degree();
        let lc = div.lcoeff();

        let mut q = self.zero();
        let mut r = self.clone().canonicalize();
        while !r.is_zero() && r.degree() >= m {
            let c = self.ring.quot(&r.lcoeff(), &lc);
            if R::is_zero(&c) {
                break;
            }

            let shift = r.degree() - m;
            r = &r - &div.mul_exp(shift).mul_coeff(&c);
            q = &q + &self.monomial(c, shift);
        }

        (q, r)
    }

    pub fn quot(&self, div: &Self) -> Self {
        self.quot_rem(div).0
    }

    pub fn rem(&self, div: &Self) -> Self {
        self.quot_rem(div).1
    }

    /// Divide every coefficient by the leading coefficient.
    pub fn make_monic(self) -> Self {
        if self.is_zero() {
            return self;
        }

        let lc = self.lcoeff();
        if self.ring.is_one(&lc) {
            return self.canonicalize();
        }

        let coefficients = self
            .coefficients
            .iter()
            .map(|c| self.ring.quot(c, &lc))
            .collect();
        self.with_coefficients(coefficients).canonicalize()
    }

    /// Compute the gcd using Euclid's algorithm. The result is made monic.
    ///
    /// The coefficients should come from a field, so that every division step
    /// lowers the degree of the remainder. Over other coefficient rings this
    /// panics as soon as a leading coefficient does not divide, for example
    /// for `gcd(x, 2)` over the integers.
    #[instrument(level = "trace", skip_all, fields(a = %self, b = %b))]
    pub fn gcd(&self, b: &Self) -> Self {
        let ring = PolynomialRing::new_from_poly(self);
        let g = euclid_gcd(&ring, self, b);
        debug!("gcd before normalization: {}", g);
        g.make_monic()
    }
}

impl<R: Ring> PartialEq for Polynomial<R> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.degree() == other.degree() && self.coefficients == other.coefficients
    }
}

impl<R: Ring> Eq for Polynomial<R> {}

impl<R: Ring> std::hash::Hash for Polynomial<R> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.coefficients.hash(state);
    }
}

impl<R: Ring> Add for Polynomial<R> {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        self.add_or_sub(&other, false)
    }
}

impl<'a, 'b, R: Ring> Add<&'a Polynomial<R>> for &'b Polynomial<R> {
    type Output = Polynomial<R>;

    fn add(self, other: &'a Polynomial<R>) -> Self::Output {
        self.add_or_sub(other, false)
    }
}

impl<R: Ring> Sub for Polynomial<R> {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        self.add_or_sub(&other, true)
    }
}

impl<'a, 'b, R: Ring> Sub<&'a Polynomial<R>> for &'b Polynomial<R> {
    type Output = Polynomial<R>;

    fn sub(self, other: &'a Polynomial<R>) -> Self::Output {
        self.add_or_sub(other, true)
    }
}

impl<R: Ring> Neg for Polynomial<R> {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        for c in self.coefficients.as_mut_slice() {
            *c = self.ring.neg(c);
        }
        self
    }
}

impl<'a, 'b, R: Ring> Mul<&'a Polynomial<R>> for &'b Polynomial<R> {
    type Output = Polynomial<R>;

    fn mul(self, rhs: &'a Polynomial<R>) -> Self::Output {
        if self.is_zero() || rhs.is_zero() {
            return self.zero();
        }

        let mut coefficients =
            Sequence::from_elem(self.ring.zero(), self.degree() + rhs.degree() + 1);
        let res = coefficients.as_mut_slice();

        // the power of an index is the degree minus the index, so products
        // of entries i and j land at index i + j
        for (i, a) in self.coefficients.iter().enumerate() {
            if R::is_zero(a) {
                continue;
            }

            for (j, b) in rhs.coefficients.iter().enumerate() {
                if !R::is_zero(b) {
                    self.ring.add_mul_assign(&mut res[i + j], a, b);
                }
            }
        }

        self.with_coefficients(coefficients).canonicalize()
    }
}

impl<'a, R: Ring> Mul<&'a Polynomial<R>> for Polynomial<R> {
    type Output = Polynomial<R>;

    fn mul(self, rhs: &'a Polynomial<R>) -> Self::Output {
        (&self) * rhs
    }
}

impl<R: Ring> Mul for Polynomial<R> {
    type Output = Polynomial<R>;

    fn mul(self, rhs: Self) -> Self::Output {
        (&self) * &rhs
    }
}

impl<'a, 'b, R: EuclideanDomain> Div<&'a Polynomial<R>> for &'b Polynomial<R> {
    type Output = Polynomial<R>;

    fn div(self, other: &'a Polynomial<R>) -> Self::Output {
        self.quot_rem(other).0
    }
}

impl<'a, 'b, R: EuclideanDomain> Rem<&'a Polynomial<R>> for &'b Polynomial<R> {
    type Output = Polynomial<R>;

    fn rem(self, other: &'a Polynomial<R>) -> Self::Output {
        self.quot_rem(other).1
    }
}

#[cfg(test)]
mod test {
    use crate::{
        domains::{
            integer::{Z32, Z64},
            integer_mod::IntegerMod,
            rational::Q32,
            EuclideanDomain, Ring,
        },
        printer::PrintOptions,
    };

    use super::PolynomialRing;

    #[test]
    fn canonical_form() {
        let ring = PolynomialRing::new(Z32);
        let p = ring.from_raw_coefficients([0, 0, 2, 1]);
        assert_eq!(p.degree(), 3);
        assert!(!p.is_canonical());

        let c = p.clone().canonicalize();
        assert_eq!(c.degree(), 1);
        assert_eq!(c.coefficients(), &[2, 1]);
        assert_eq!(c.clone().canonicalize(), c);
        assert_eq!(p.evaluate(3i64), c.evaluate(3i64));

        let zero = ring.from_coefficients([0, 0, 0]);
        assert_eq!(zero.degree(), 0);
        assert!(zero.is_zero());
        assert_eq!(zero, ring.zero());
        assert_eq!(ring.from_coefficients([]), ring.zero());
    }

    #[test]
    fn accessors() {
        let ring = PolynomialRing::new(Z32);
        let p = ring.from_coefficients([3, 0, 2, 1]);
        assert_eq!(p.coeff_at(0), 1);
        assert_eq!(p.coeff_at(1), 2);
        assert_eq!(p.coeff_at(2), 0);
        assert_eq!(p.coeff_at(3), 3);
        assert_eq!(p.coeff_at(10), 0);
        assert_eq!(p.lcoeff(), 3);
        assert_eq!(p.strip().coefficients(), &[0, 2, 1]);
        assert_eq!(ring.constant(4).strip(), ring.constant(4));
        assert_eq!(ring.monomial(5, 2).coefficients(), &[5, 0, 0]);
        assert_eq!(ring.var().coefficients(), &[1, 0]);
    }

    #[test]
    fn arithmetic() {
        let ring = PolynomialRing::new(Z32);
        let a = ring.from_coefficients([1, 2, 3]);
        let b = ring.from_coefficients([-1, 1]);

        assert_eq!(&a + &b, ring.from_coefficients([1, 1, 4]));
        assert_eq!(&a - &a, ring.zero());
        assert_eq!(&b - &a, ring.from_coefficients([-1, -3, -2]));
        assert_eq!(&a * &b, ring.from_coefficients([-1, -1, -1, 3]));
        assert_eq!(-b.clone(), ring.from_coefficients([1, -1]));
        assert_eq!(b.pow(2), ring.from_coefficients([1, -2, 1]));
        assert_eq!(b.pow(0), ring.one());
        assert_eq!(a.mul_exp(2), ring.from_coefficients([1, 2, 3, 0, 0]));
        assert_eq!(a.clone().mul_coeff(&2), ring.from_coefficients([2, 4, 6]));
    }

    #[test]
    fn zero_divisors_are_canonicalized() {
        let z6 = IntegerMod::<6>::new();
        let ring = PolynomialRing::new(z6);
        let a = ring.from_coefficients([z6.nth(2), z6.nth(1)]);
        let b = ring.from_coefficients([z6.nth(3), z6.nth(0)]);
        let p = &a * &b;
        assert_eq!(p.degree(), 1);
        assert_eq!(p, ring.from_coefficients([z6.nth(3), z6.nth(0)]));
    }

    #[test]
    fn evaluation() {
        let ring = PolynomialRing::new(Z32);
        let p = ring.from_coefficients([3, 2, 1]);
        assert_eq!(p.evaluate(1i32), 6);
        assert_eq!(p.evaluate(2.0f64), 17.0);
        assert_eq!(p.evaluate_at(&2), 17);

        let ring = PolynomialRing::new(Q32);
        let p = ring.from_coefficients([Q32.to_element(3, 2), Q32.to_element(1, 2)]);
        assert_eq!(p.evaluate(1.0f32), 2.0);
        assert_eq!(p.evaluate(-1.0f64), -1.0);
    }

    #[test]
    fn division() {
        let ring = PolynomialRing::new(Z32);

        let (q, r) = ring
            .from_coefficients([1, 1, 1])
            .quot_rem(&ring.from_coefficients([1, 1]));
        assert_eq!(q, ring.var());
        assert_eq!(r, ring.one());

        let (q, r) = ring
            .from_coefficients([2, 2, 2])
            .quot_rem(&ring.constant(2));
        assert_eq!(q, ring.from_coefficients([1, 1, 1]));
        assert!(r.is_zero());

        // (x - 1)(x + 1) / (x - 1)
        let xm1 = ring.from_coefficients([1, -1]);
        let xp1 = ring.from_coefficients([1, 1]);
        let (q, r) = (&xm1 * &xp1).quot_rem(&xm1);
        assert_eq!(q, xp1);
        assert!(r.is_zero());
        assert_eq!(&(&xm1 * &xp1) / &xp1, xm1);
        assert_eq!(&ring.from_coefficients([1, 0, 0]) % &xp1, ring.one());

        // (x^2 - 1) / (2x + 2) = x/2 - 1/2 over Q
        let ring = PolynomialRing::new(Q32);
        let (q, r) = ring
            .from_coefficients([Q32.one(), Q32.zero(), Q32.nth(-1)])
            .quot_rem(&ring.from_coefficients([Q32.nth(2), Q32.nth(2)]));
        assert_eq!(
            q,
            ring.from_coefficients([Q32.to_element(1, 2), Q32.to_element(-1, 2)])
        );
        assert!(r.is_zero());
    }

    #[test]
    fn inexact_division_stops() {
        let ring = PolynomialRing::new(Z64);
        let a = ring.from_coefficients([3, 1]);
        let b = ring.from_coefficients([2, 0]);
        let (q, r) = a.quot_rem(&b);
        assert_eq!(q, ring.one());
        assert_eq!(r, ring.from_coefficients([1, 1]));
        assert_eq!(ring.try_div(&a, &b), None);
    }

    #[test]
    #[should_panic(expected = "Cannot divide by 0 polynomial")]
    fn divide_by_zero() {
        let ring = PolynomialRing::new(Z32);
        let _ = ring.var().quot_rem(&ring.zero());
    }

    #[test]
    fn gcd() {
        let ring = PolynomialRing::new(Q32);
        let xp1 = ring.from_coefficients([Q32.one(), Q32.one()]);
        let xm1 = ring.from_coefficients([Q32.one(), Q32.nth(-1)]);

        let a = xp1.pow(2);
        let b = &xp1 * &xm1;
        assert_eq!(a.gcd(&b), xp1);
        assert_eq!(ring.gcd(&b, &a), xp1);

        let c = xp1.clone().mul_coeff(&Q32.nth(3));
        assert_eq!(c.gcd(&ring.zero()), xp1);
        assert_eq!(xp1.gcd(&xm1), ring.one());
    }

    #[test]
    #[should_panic(expected = "Cannot reduce")]
    fn gcd_over_integers_needs_exact_division() {
        let ring = PolynomialRing::new(Z32);
        ring.gcd(&ring.var(), &ring.nth(2));
    }

    #[test]
    fn leading_zeros() {
        let ring = PolynomialRing::new(Q32);
        let raw = ring.from_raw_coefficients([Q32.zero(), Q32.nth(-2), Q32.nth(2)]);
        assert_eq!(raw.degree(), 2);
        assert_eq!(raw.lcoeff(), Q32.nth(-2));
        assert!(!raw.pos());

        let xm1 = ring.from_coefficients([Q32.one(), Q32.nth(-1)]);
        let (q, r) = ring.quot_rem(&ring.from_coefficients([Q32.one(), Q32.zero(), Q32.nth(-1)]), &raw);
        assert_eq!(q, ring.from_coefficients([Q32.to_element(-1, 2), Q32.to_element(-1, 2)]));
        assert!(r.is_zero());
        assert_eq!(raw.clone().make_monic(), xm1);
        assert_eq!(raw.canonicalize().degree(), 1);
    }

    #[test]
    fn derivative() {
        let ring = PolynomialRing::new(Z32);
        let p = ring.from_coefficients([1, 3, 0, 7]);
        assert_eq!(p.derivative(), ring.from_coefficients([3, 6, 0]));
        assert_eq!(ring.constant(5).derivative(), ring.zero());

        let z3 = IntegerMod::<3>::new();
        let ring = PolynomialRing::new(z3);
        let p = ring.from_coefficients([z3.one(), z3.zero(), z3.zero(), z3.one()]);
        assert_eq!(p.derivative(), ring.zero());
    }

    #[test]
    fn composition() {
        let ring = PolynomialRing::new(Z32);
        let p = ring.from_coefficients([1, 0, 1]);
        let q = ring.from_coefficients([1, 1]);
        assert_eq!(p.compose(&q), ring.from_coefficients([1, 2, 2]));
        assert_eq!(p.compose(&ring.var()), p);
    }

    #[test]
    fn ring_properties() {
        let ring = PolynomialRing::new(Z32);
        assert!(!PolynomialRing::<Z32>::IS_FIELD);
        assert!(ring.pos(&ring.from_coefficients([2, -5])));
        assert!(!ring.pos(&ring.from_coefficients([-2, 5])));
        assert_eq!(ring.nth(3), ring.constant(3));
        assert!(ring.is_one(&ring.one()));
        assert_eq!(ring.to_string(), "Z32[x]");
    }

    #[test]
    fn printing() {
        let ring = PolynomialRing::new(Z32);
        assert_eq!(ring.from_coefficients([1, 2, 3]).to_string(), "x^2 + 2 x + 3");
        assert_eq!(ring.from_coefficients([2, 0, 0, -1]).to_string(), "2 x^3 + -1");
        assert_eq!(ring.from_coefficients([1, 0]).to_string(), "x");
        assert_eq!(ring.zero().to_string(), "0");
        assert_eq!(ring.one().to_string(), "1");
        assert_eq!(
            ring.printer(&ring.from_coefficients([2, 1, 1]))
                .with_options(PrintOptions::compact())
                .to_string(),
            "2*x^2+x+1"
        );

        let ring = PolynomialRing::with_variable(Q32, "y");
        let p = ring.from_coefficients([Q32.to_element(1, 2), Q32.nth(3), Q32.to_element(-1, 3)]);
        assert_eq!(p.to_string(), "(1/2) y^2 + 3 y + -1/3");
    }
}
