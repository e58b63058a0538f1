//! Truncated Taylor series around zero of elementary functions, with exact
//! coefficients in the fraction field of a ring.
//!
//! # Examples
//! ```
//! use taylorica::{domains::integer::Z64, poly::series};
//!
//! let p = series::exp(&Z64, 3);
//! assert_eq!(p.to_string(), "(1/6) x^3 + (1/2) x^2 + x + 1");
//! assert!((p.evaluate(0.1f64) - 0.1f64.exp()).abs() < 1e-5);
//! ```
use std::{fmt::Display, str::FromStr};

use tracing::debug;

use crate::{
    combinatorics::{alternate, binomial_fraction, factorial, pow, BernoulliCache, FractionElement},
    domains::{rational::ToFractionField, Field, Ring},
    error::AlgebraError,
};

use super::univariate::{Polynomial, PolynomialRing};

/// Build the polynomial `sum_{i=0}^{degree} f(i) x^i` over the fraction field of `ring`.
/// The coefficients are requested in increasing order of `i`.
///
/// The result always has degree `degree` and holds `f(i)` at position
/// `degree - i`, even when the leading coefficients vanish.
pub fn taylor<R, F>(ring: &R, degree: usize, coefficient: F) -> Polynomial<R::FractionField>
where
    R: ToFractionField,
    F: FnMut(usize) -> FractionElement<R>,
{
    let mut coefficients: Vec<_> = (0..=degree).map(coefficient).collect();
    coefficients.reverse();
    PolynomialRing::new(ring.fraction_field()).from_raw_coefficients(coefficients)
}

/// A function with a known Taylor series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaylorFunction {
    Exp,
    /// `exp(x) - 1`
    Expm1,
    /// `log(1 + x)`
    Log1p,
    Sin,
    Cos,
    Sinh,
    Cosh,
    Tan,
    Tanh,
    Asin,
    Asinh,
    Atan,
    Atanh,
    /// `1 / (1 - x)`
    Geometric,
}

impl TaylorFunction {
    pub const ALL: [TaylorFunction; 14] = [
        TaylorFunction::Exp,
        TaylorFunction::Expm1,
        TaylorFunction::Log1p,
        TaylorFunction::Sin,
        TaylorFunction::Cos,
        TaylorFunction::Sinh,
        TaylorFunction::Cosh,
        TaylorFunction::Tan,
        TaylorFunction::Tanh,
        TaylorFunction::Asin,
        TaylorFunction::Asinh,
        TaylorFunction::Atan,
        TaylorFunction::Atanh,
        TaylorFunction::Geometric,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TaylorFunction::Exp => "exp",
            TaylorFunction::Expm1 => "expm1",
            TaylorFunction::Log1p => "log1p",
            TaylorFunction::Sin => "sin",
            TaylorFunction::Cos => "cos",
            TaylorFunction::Sinh => "sinh",
            TaylorFunction::Cosh => "cosh",
            TaylorFunction::Tan => "tan",
            TaylorFunction::Tanh => "tanh",
            TaylorFunction::Asin => "asin",
            TaylorFunction::Asinh => "asinh",
            TaylorFunction::Atan => "atan",
            TaylorFunction::Atanh => "atanh",
            TaylorFunction::Geometric => "geometric",
        }
    }

    /// Compute the Taylor polynomial of degree `degree` around zero.
    pub fn series<R: ToFractionField>(
        &self,
        ring: &R,
        degree: usize,
    ) -> Polynomial<R::FractionField> {
        debug!(function = %self, degree, "building Taylor polynomial");

        let mut coefficients = Coefficients::new(ring.clone());
        taylor(ring, degree, |i| coefficients.get(*self, i))
    }
}

impl Display for TaylorFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TaylorFunction {
    type Err = AlgebraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TaylorFunction::ALL
            .iter()
            .find(|f| f.name() == s)
            .copied()
            .ok_or_else(|| AlgebraError::UnknownFunction(s.to_string()))
    }
}

/// Compute the Taylor polynomial of `function` of degree `degree`.
pub fn taylor_series<R: ToFractionField>(
    ring: &R,
    function: TaylorFunction,
    degree: usize,
) -> Polynomial<R::FractionField> {
    function.series(ring, degree)
}

macro_rules! series_constructors {
    ($($name:ident => $function:ident, $doc:literal;)*) => {
        $(
            #[doc = $doc]
            pub fn $name<R: ToFractionField>(ring: &R, degree: usize) -> Polynomial<R::FractionField> {
                TaylorFunction::$function.series(ring, degree)
            }
        )*
    };
}

series_constructors!(
    exp => Exp, "The Taylor polynomial of `exp(x)`.";
    expm1 => Expm1, "The Taylor polynomial of `exp(x) - 1`.";
    log1p => Log1p, "The Taylor polynomial of `log(1 + x)`.";
    sin => Sin, "The Taylor polynomial of `sin(x)`.";
    cos => Cos, "The Taylor polynomial of `cos(x)`.";
    sinh => Sinh, "The Taylor polynomial of `sinh(x)`.";
    cosh => Cosh, "The Taylor polynomial of `cosh(x)`.";
    tan => Tan, "The Taylor polynomial of `tan(x)`.";
    tanh => Tanh, "The Taylor polynomial of `tanh(x)`.";
    asin => Asin, "The Taylor polynomial of `asin(x)`.";
    asinh => Asinh, "The Taylor polynomial of `asinh(x)`.";
    atan => Atan, "The Taylor polynomial of `atan(x)`.";
    atanh => Atanh, "The Taylor polynomial of `atanh(x)`.";
    geometric => Geometric, "The Taylor polynomial of `1 / (1 - x)`.";
);

/// Generates the coefficients of the Taylor series.
struct Coefficients<R: ToFractionField> {
    ring: R,
    field: R::FractionField,
    bernoulli: BernoulliCache<R>,
}

impl<R: ToFractionField> Coefficients<R> {
    fn new(ring: R) -> Coefficients<R> {
        Coefficients {
            field: ring.fraction_field(),
            bernoulli: BernoulliCache::new(ring.clone()),
            ring,
        }
    }

    /// The coefficient of `x^i`.
    fn get(&mut self, function: TaylorFunction, i: usize) -> FractionElement<R> {
        let vanishes = match function {
            TaylorFunction::Sin
            | TaylorFunction::Sinh
            | TaylorFunction::Tan
            | TaylorFunction::Tanh
            | TaylorFunction::Asin
            | TaylorFunction::Asinh
            | TaylorFunction::Atan
            | TaylorFunction::Atanh => i % 2 == 0,
            TaylorFunction::Cos | TaylorFunction::Cosh => i % 2 == 1,
            TaylorFunction::Log1p | TaylorFunction::Expm1 => i == 0,
            TaylorFunction::Exp | TaylorFunction::Geometric => false,
        };

        if vanishes {
            return self.field.zero();
        }

        let r = &self.ring;
        let n = i as u64;
        match function {
            TaylorFunction::Exp
            | TaylorFunction::Expm1
            | TaylorFunction::Sinh
            | TaylorFunction::Cosh => r.to_fraction(&r.one(), &factorial(r, n)),
            TaylorFunction::Sin | TaylorFunction::Cos => {
                r.to_fraction(&alternate(r, n / 2), &factorial(r, n))
            }
            TaylorFunction::Log1p => r.to_fraction(&alternate(r, n + 1), &r.nth(i as i64)),
            TaylorFunction::Atan => r.to_fraction(&alternate(r, n / 2), &r.nth(i as i64)),
            TaylorFunction::Atanh => r.to_fraction(&r.one(), &r.nth(i as i64)),
            TaylorFunction::Geometric => self.field.one(),
            TaylorFunction::Asin => self.arcsine(i, false),
            TaylorFunction::Asinh => self.arcsine(i, true),
            TaylorFunction::Tan => self.tangent(i, true),
            TaylorFunction::Tanh => self.tangent(i, false),
        }
    }

    /// `(i-1)! / (i 4^k (k!)^2)` for `i = 2k + 1`, computed as `C(2k, k) / (i 4^k)`.
    fn arcsine(&self, i: usize, alternating: bool) -> FractionElement<R> {
        let k = (i / 2) as u64;
        let r = &self.ring;

        let sign = if alternating {
            alternate(r, k)
        } else {
            r.one()
        };
        let denominator = r.mul(&r.nth(i as i64), &pow(r, 4, k));

        self.field.mul(
            &binomial_fraction(r, k, 2 * k),
            &r.to_fraction(&sign, &denominator),
        )
    }

    /// `4^n (4^n - 1) B_{2n} / (2n)!` for `i = 2n - 1`, times `(-1)^(n-1)`
    /// for the circular tangent.
    fn tangent(&mut self, i: usize, alternating: bool) -> FractionElement<R> {
        let n = (i as u64 + 1) / 2;

        let four_n = self.ring.inject(&pow(&self.ring, 4, n));
        let b = self.bernoulli.get(i + 1);
        let f = &self.field;

        let mut c = f.mul(&b, &f.sub(&four_n, &f.one()));
        c = f.mul(&c, &four_n);
        c = f.div(&c, &self.ring.inject(&factorial(&self.ring, 2 * n)));

        if alternating {
            c = f.mul(&c, &self.ring.inject(&alternate(&self.ring, n - 1)));
        }
        c
    }
}

#[cfg(test)]
mod test {
    use crate::domains::{
        integer::{Z32, Z64},
        integer_mod::IntegerMod,
        rational::{Q32, Q64},
        Ring,
    };

    use super::{taylor, taylor_series, TaylorFunction};

    fn assert_close(function: TaylorFunction, degree: usize, x: f64, expected: f64, tol: f64) {
        let p = function.series(&Z64, degree);
        let y = p.evaluate(x);
        assert!(
            (y - expected).abs() < tol,
            "{}({}) = {} with degree {}, expected {}",
            function,
            x,
            y,
            degree,
            expected
        );
    }

    #[test]
    fn exponential() {
        let p = super::exp(&Z32, 8);
        assert_eq!(p.degree(), 8);
        assert_eq!(p.evaluate(0.0f64), 1.0);
        assert!((p.evaluate(0.1f64) - 0.1f64.exp()).abs() < 1e-7);
        assert_eq!(p.coeff_at(8), Q32.to_element(1, 40320));

        let q = super::expm1(&Z64, 10);
        assert_eq!(q.degree(), 10);
        assert!(Q64::is_zero(&q.coeff_at(0)));
        assert_eq!(q.coeff_at(1), Q64.one());
        assert!((q.evaluate(1e-3f64) - 1e-3f64.exp_m1()).abs() < 1e-16);
    }

    #[test]
    fn trigonometric_coefficients() {
        let s = super::sin(&Z64, 8);
        assert_eq!(s.degree(), 8);
        assert_eq!(s.coefficients().len(), 9);
        assert_eq!(s.coeff_at(8), Q64.zero());
        assert_eq!(s.coeff_at(0), Q64.zero());
        assert_eq!(s.coeff_at(1), Q64.one());
        assert_eq!(s.coeff_at(3), Q64.to_element(-1, 6));
        assert_eq!(s.coeff_at(5), Q64.to_element(1, 120));
        assert_eq!(s.coeff_at(7), Q64.to_element(-1, 5040));

        let c = super::cos(&Z64, 4);
        assert_eq!(
            c.coefficients(),
            &[Q64.to_element(1, 24), Q64.zero(), Q64.to_element(-1, 2), Q64.zero(), Q64.one()]
        );

        let c = super::cos(&Z64, 5);
        assert_eq!(c.degree(), 5);
        assert!(!c.is_canonical());
        assert_eq!(c.to_string(), "(1/24) x^4 + (-1/2) x^2 + 1");

        let t = super::tan(&Z64, 7);
        assert_eq!(t.coeff_at(1), Q64.one());
        assert_eq!(t.coeff_at(3), Q64.to_element(1, 3));
        assert_eq!(t.coeff_at(5), Q64.to_element(2, 15));
        assert_eq!(t.coeff_at(7), Q64.to_element(17, 315));

        let th = super::tanh(&Z64, 5);
        assert_eq!(th.coeff_at(3), Q64.to_element(-1, 3));
        assert_eq!(th.coeff_at(5), Q64.to_element(2, 15));
    }

    #[test]
    fn inverse_coefficients() {
        let a = super::asin(&Z64, 5);
        assert_eq!(a.coeff_at(3), Q64.to_element(1, 6));
        assert_eq!(a.coeff_at(5), Q64.to_element(3, 40));

        let a = super::asinh(&Z64, 5);
        assert_eq!(a.coeff_at(3), Q64.to_element(-1, 6));
        assert_eq!(a.coeff_at(5), Q64.to_element(3, 40));

        let a = super::atan(&Z64, 5);
        assert_eq!(a.coeff_at(3), Q64.to_element(-1, 3));
        assert_eq!(a.coeff_at(5), Q64.to_element(1, 5));

        let a = super::atanh(&Z64, 5);
        assert_eq!(a.coeff_at(3), Q64.to_element(1, 3));
        assert_eq!(a.coeff_at(5), Q64.to_element(1, 5));

        let l = super::log1p(&Z64, 4);
        assert_eq!(
            l.coefficients(),
            &[
                Q64.to_element(-1, 4),
                Q64.to_element(1, 3),
                Q64.to_element(-1, 2),
                Q64.one(),
                Q64.zero()
            ]
        );
    }

    #[test]
    fn numerical_agreement() {
        assert_close(TaylorFunction::Sin, 15, 0.5, 0.5f64.sin(), 1e-14);
        assert_close(TaylorFunction::Cos, 14, 0.5, 0.5f64.cos(), 1e-14);
        assert_close(TaylorFunction::Sinh, 15, 0.5, 0.5f64.sinh(), 1e-14);
        assert_close(TaylorFunction::Cosh, 14, 0.5, 0.5f64.cosh(), 1e-14);
        assert_close(TaylorFunction::Tan, 11, 0.2, 0.2f64.tan(), 1e-10);
        assert_close(TaylorFunction::Tanh, 11, 0.2, 0.2f64.tanh(), 1e-10);
        assert_close(TaylorFunction::Asin, 21, 0.3, 0.3f64.asin(), 1e-12);
        assert_close(TaylorFunction::Asinh, 21, 0.3, 0.3f64.asinh(), 1e-12);
        assert_close(TaylorFunction::Atan, 21, 0.2, 0.2f64.atan(), 1e-14);
        assert_close(TaylorFunction::Atanh, 21, 0.2, 0.2f64.atanh(), 1e-14);
        assert_close(TaylorFunction::Log1p, 20, 0.1, 0.1f64.ln_1p(), 1e-14);
        assert_close(TaylorFunction::Geometric, 30, 0.5, 2.0, 1e-8);
    }

    #[test]
    fn modular_coefficients() {
        let f = IntegerMod::<7>::new();
        let p = super::exp(&f, 3);
        assert_eq!(p.coefficients(), &[f.nth(6), f.nth(4), f.one(), f.one()]);
    }

    #[test]
    fn custom_series() {
        // sum_i i x^i
        let p = taylor(&Z32, 3, |i| Q32.nth(i as i64));
        assert_eq!(p.to_string(), "3 x^3 + 2 x^2 + x");
        assert_eq!(
            taylor_series(&Z32, TaylorFunction::Geometric, 2).to_string(),
            "x^2 + x + 1"
        );
    }

    #[test]
    fn function_names() {
        for f in TaylorFunction::ALL {
            assert_eq!(f.to_string().parse::<TaylorFunction>(), Ok(f));
        }
        assert!("gamma".parse::<TaylorFunction>().is_err());
    }
}
