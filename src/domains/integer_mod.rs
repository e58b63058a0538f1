//! Integers modulo a compile-time constant.
//!
//! For a prime modulus the ring is a finite field. Using field operations
//! such as [Field::div] on a composite modulus is rejected when the crate
//! using it is compiled:
//!
//! ```compile_fail
//! use taylorica::domains::{integer_mod::IntegerMod, Field, Ring};
//!
//! let r = IntegerMod::<6>::new();
//! let _ = r.div(&r.one(), &r.nth(5));
//! ```
use std::fmt::{Display, Error, Formatter};

use rand::Rng as _;

use crate::printer::PrintOptions;

use super::{
    euclid_gcd, rational::ToFractionField, EuclideanDomain, Field, NumericRing, Ring, Scalar,
};

/// Test whether `n` is a prime number using trial division by `6k ± 1`.
pub const fn is_prime(n: i64) -> bool {
    if n == 2 || n == 3 {
        return true;
    }
    if n <= 1 || n % 2 == 0 || n % 3 == 0 {
        return false;
    }

    let mut i = 5;
    while i <= n / i {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// An element of [IntegerMod], stored as its representative in `[0, P)`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct Residue(i32);

impl Residue {
    /// The representative of the residue class in `[0, P)`.
    #[inline]
    pub fn value(&self) -> i32 {
        self.0
    }
}

impl Display for Residue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// The ring of integers modulo `P`, which is a field if `P` is prime.
///
/// For a prime modulus, [EuclideanDomain::quot_rem] is field division
/// `a * b^-1` with remainder zero rather than integer division of the
/// representatives, so that polynomial division over the field is exact.
/// For a composite modulus the representatives are divided as integers.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct IntegerMod<const P: i32>(());

impl<const P: i32> Default for IntegerMod<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const P: i32> IntegerMod<P> {
    const POSITIVE_MODULUS: () = assert!(P > 0, "The modulus must be positive");
    const PRIME_MODULUS: () = assert!(
        is_prime(P as i64),
        "Field operations require a prime modulus"
    );

    pub const fn new() -> IntegerMod<P> {
        let () = Self::POSITIVE_MODULUS;
        IntegerMod(())
    }

    #[inline]
    pub const fn modulus(&self) -> i32 {
        P
    }

    /// Reduce `n` to its canonical representative.
    #[inline]
    pub fn to_element(&self, n: i64) -> Residue {
        Residue(n.rem_euclid(P as i64) as i32)
    }

    /// Compute the inverse of `a` using the extended Euclidean algorithm,
    /// if it exists.
    pub fn try_inv(&self, a: &Residue) -> Option<Residue> {
        let (mut r0, mut r1) = (P as i64, a.0 as i64);
        let (mut t0, mut t1) = (0i64, 1i64);

        while r1 != 0 {
            let q = r0 / r1;
            (r0, r1) = (r1, r0 - q * r1);
            (t0, t1) = (t1, t0 - q * t1);
        }

        if r0 == 1 {
            Some(self.to_element(t0))
        } else {
            None
        }
    }
}

impl<const P: i32> Display for IntegerMod<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Z/{}Z", P)
    }
}

impl<const P: i32> Ring for IntegerMod<P> {
    type Element = Residue;

    const IS_FIELD: bool = is_prime(P as i64);
    const IS_EUCLIDEAN_DOMAIN: bool = true;

    #[inline]
    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        self.to_element(a.0 as i64 + b.0 as i64)
    }

    #[inline]
    fn sub(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        self.to_element(a.0 as i64 - b.0 as i64)
    }

    #[inline]
    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        self.to_element(a.0 as i64 * b.0 as i64)
    }

    #[inline]
    fn neg(&self, a: &Self::Element) -> Self::Element {
        self.to_element(-(a.0 as i64))
    }

    #[inline]
    fn zero(&self) -> Self::Element {
        Residue(0)
    }

    #[inline]
    fn one(&self) -> Self::Element {
        self.to_element(1)
    }

    #[inline]
    fn nth(&self, n: i64) -> Self::Element {
        self.to_element(n)
    }

    #[inline]
    fn is_zero(a: &Self::Element) -> bool {
        a.0 == 0
    }

    #[inline]
    fn is_one(&self, a: &Self::Element) -> bool {
        *a == self.one()
    }

    fn try_div(&self, a: &Self::Element, b: &Self::Element) -> Option<Self::Element> {
        if Self::is_zero(b) {
            return None;
        }

        if Self::IS_FIELD {
            return Some(self.mul(a, &self.try_inv(b)?));
        }

        if a.0 % b.0 == 0 {
            Some(Residue(a.0 / b.0))
        } else {
            None
        }
    }

    fn sample(&self, rng: &mut impl rand::RngCore, range: (i64, i64)) -> Self::Element {
        self.to_element(rng.gen_range(range.0..range.1))
    }

    #[inline]
    fn evaluate<T: Scalar>(&self, a: &Self::Element, _x: T) -> T {
        T::from_integer(a.0 as i64)
    }

    fn format<W: std::fmt::Write>(
        &self,
        element: &Self::Element,
        _opts: &PrintOptions,
        _in_product: bool,
        f: &mut W,
    ) -> Result<(), Error> {
        write!(f, "{}", element.0)
    }
}

impl<const P: i32> EuclideanDomain for IntegerMod<P> {
    /// For a prime modulus this is field division with a zero remainder.
    /// Otherwise the representatives are divided as integers.
    fn quot_rem(&self, a: &Self::Element, b: &Self::Element) -> (Self::Element, Self::Element) {
        if Self::IS_FIELD {
            let inv = self
                .try_inv(b)
                .unwrap_or_else(|| panic!("Cannot divide by 0 in {}", self));
            (self.mul(a, &inv), self.zero())
        } else {
            (Residue(a.0 / b.0), Residue(a.0 % b.0))
        }
    }

    fn gcd(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        euclid_gcd(self, a, b)
    }

    #[inline]
    fn pos(&self, a: &Self::Element) -> bool {
        a.0 > 0
    }
}

impl<const P: i32> Field for IntegerMod<P> {
    fn div(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        self.mul(a, &self.inv(b))
    }

    fn inv(&self, a: &Self::Element) -> Self::Element {
        let () = Self::PRIME_MODULUS;
        self.try_inv(a)
            .unwrap_or_else(|| panic!("{} is not invertible mod {}", a, P))
    }
}

impl<const P: i32> NumericRing for IntegerMod<P> {
    #[inline]
    fn get<T: Scalar>(&self, a: &Self::Element) -> T {
        T::from_integer(a.0 as i64)
    }
}

impl<const P: i32> ToFractionField for IntegerMod<P> {
    type FractionField = Self;

    fn fraction_field(&self) -> Self {
        let () = Self::PRIME_MODULUS;
        *self
    }

    fn inject(&self, a: &Self::Element) -> Self::Element {
        *a
    }

    fn to_fraction(&self, numerator: &Self::Element, denominator: &Self::Element) -> Self::Element {
        self.div(numerator, denominator)
    }

    fn numerator(&self, a: &Self::Element) -> Self::Element {
        *a
    }
}

#[cfg(test)]
mod test {
    use std::any::TypeId;

    use crate::domains::{rational::ToFractionField, EuclideanDomain, Field, Ring};

    use super::{is_prime, IntegerMod};

    #[test]
    fn primality() {
        for p in [2, 3, 5, 7, 31, 7919, 2147483647] {
            assert!(is_prime(p), "{} is prime", p);
        }
        for n in [-7, 0, 1, 4, 6, 8, 9, 10, 25, 49, 100, 7917] {
            assert!(!is_prime(n), "{} is not prime", n);
        }
    }

    #[test]
    fn canonical_representatives() {
        let r = IntegerMod::<7>::new();
        assert_eq!(r.to_element(-1).value(), 6);
        assert_eq!(r.to_element(15).value(), 1);
        assert_eq!(r.nth(-14), r.zero());
        assert_eq!(r.neg(&r.nth(3)).value(), 4);
        assert_eq!(r.sub(&r.nth(2), &r.nth(5)).value(), 4);
    }

    #[test]
    fn prime_field() {
        let f = IntegerMod::<7>::new();
        assert!(IntegerMod::<7>::IS_FIELD);
        assert_eq!(f.mul(&f.nth(3), &f.nth(5)), f.one());
        assert_eq!(f.inv(&f.nth(3)), f.nth(5));
        assert_eq!(f.div(&f.nth(1), &f.nth(3)), f.nth(5));
        assert_eq!(f.quot_rem(&f.nth(4), &f.nth(2)), (f.nth(2), f.zero()));
        assert_eq!(f.try_div(&f.nth(1), &f.nth(0)), None);
        assert_eq!(f.pow(&f.nth(3), 6), f.one());
    }

    #[test]
    #[should_panic]
    fn invert_zero() {
        let f = IntegerMod::<5>::new();
        f.inv(&f.zero());
    }

    #[test]
    fn composite_modulus() {
        let r = IntegerMod::<6>::new();
        assert!(!IntegerMod::<6>::IS_FIELD);
        assert_eq!(r.quot_rem(&r.nth(5), &r.nth(2)), (r.nth(2), r.nth(1)));
        assert_eq!(r.mul(&r.nth(2), &r.nth(3)), r.zero());
        assert_eq!(r.try_inv(&r.nth(5)), Some(r.nth(5)));
        assert_eq!(r.try_inv(&r.nth(2)), None);
    }

    #[test]
    fn fraction_field_is_itself() {
        let f = IntegerMod::<5>::new();
        assert_eq!(
            TypeId::of::<<IntegerMod<5> as ToFractionField>::FractionField>(),
            TypeId::of::<IntegerMod<5>>()
        );
        assert_eq!(f.fraction_field(), f);
        assert_eq!(f.to_fraction(&f.nth(1), &f.nth(2)), f.nth(3));
    }
}
