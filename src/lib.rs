//! Taylorica is an exact-arithmetic algebra engine that builds truncated
//! Taylor series of elementary functions as polynomials with exact rational
//! coefficients, which can then be evaluated fast in any numeric type.
//!
//! The algebraic structures compose: fixed-width integers and integers
//! modulo a constant are the leaf rings, polynomials can be formed over any
//! ring and fractions over any Euclidean domain.
//!
//! For example:
//!
//! ```
//! use taylorica::{domains::integer::Z64, poly::series};
//!
//! let expm1 = series::expm1(&Z64, 10);
//! let y: f64 = expm1.evaluate(1e-3);
//! assert!((y - 1e-3f64.exp_m1()).abs() < 1e-15);
//! ```
//!
//! Rational functions are fractions of polynomials over a field:
//!
//! ```
//! use taylorica::{
//!     domains::{rational::{ToFractionField, Q32}, Ring},
//!     poly::univariate::PolynomialRing,
//! };
//!
//! let ring = PolynomialRing::new(Q32);
//! let field = ring.fraction_field();
//! let f = field.to_element(
//!     ring.from_coefficients([Q32.one(), Q32.zero(), Q32.nth(-1)]),
//!     ring.from_coefficients([Q32.one(), Q32.nth(3), Q32.nth(2)]),
//! );
//! assert_eq!(field.printer(&f).to_string(), "(x + -1) / (x + 2)");
//! ```
pub mod combinatorics;
pub mod continued_fraction;
pub mod domains;
pub mod error;
pub mod poly;
pub mod printer;
pub mod sequence;
