//! Classical families of orthogonal polynomials, built with their
//! three-term recurrences.
//!
//! ```
//! use taylorica::{domains::integer::Z64, poly::{special::hermite, univariate::PolynomialRing}};
//!
//! let h = hermite(&PolynomialRing::new(Z64), 3);
//! assert_eq!(h.to_string(), "8 x^3 + -12 x");
//! ```
use crate::domains::Ring;

use super::univariate::{Polynomial, PolynomialRing};

/// Run the recurrence `p_{k+1} = 2x p_k - c(k) p_{k-1}` starting from `p_0 = 1` and `p_1`.
fn three_term_recurrence<R: Ring>(
    ring: &PolynomialRing<R>,
    n: usize,
    first: Polynomial<R>,
    mut c: impl FnMut(usize) -> R::Element,
) -> Polynomial<R> {
    let one = ring.constant(ring.coefficient_ring().one());
    if n == 0 {
        return one;
    }

    let two_x = ring.monomial(ring.coefficient_ring().nth(2), 1);
    let mut prev = one;
    let mut cur = first;
    for k in 1..n {
        let next = &(&two_x * &cur) - &prev.mul_coeff(&c(k));
        prev = std::mem::replace(&mut cur, next);
    }
    cur
}

/// The Chebyshev polynomial of the first kind `T_n`.
pub fn chebyshev_t<R: Ring>(ring: &PolynomialRing<R>, n: usize) -> Polynomial<R> {
    let one = ring.coefficient_ring().one();
    three_term_recurrence(ring, n, ring.var(), |_| one.clone())
}

/// The Chebyshev polynomial of the second kind `U_n`.
pub fn chebyshev_u<R: Ring>(ring: &PolynomialRing<R>, n: usize) -> Polynomial<R> {
    let one = ring.coefficient_ring().one();
    let two_x = ring.monomial(ring.coefficient_ring().nth(2), 1);
    three_term_recurrence(ring, n, two_x, |_| one.clone())
}

/// The physicists' Hermite polynomial `H_n`.
pub fn hermite<R: Ring>(ring: &PolynomialRing<R>, n: usize) -> Polynomial<R> {
    let two_x = ring.monomial(ring.coefficient_ring().nth(2), 1);
    let coeffs = ring.coefficient_ring().clone();
    three_term_recurrence(ring, n, two_x, |k| coeffs.nth(2 * k as i64))
}
