//! Simple continued fractions `a0 + 1/(a1 + 1/(a2 + ...))`, evaluated
//! exactly over [Q64].
//!
//! ```
//! use taylorica::continued_fraction::ContinuedFraction;
//!
//! let c = ContinuedFraction::new(&[3, 7, 15, 1]).unwrap();
//! assert_eq!(c.to_string(), "355/113");
//! ```
use std::fmt::Display;

use crate::{
    domains::{
        integer::Z64,
        rational::{Fraction, Q64},
        NumericRing, Ring,
    },
    error::AlgebraError,
};

/// The first terms of the continued fraction of `pi`.
pub const PI_TERMS: [i64; 21] = [
    3, 7, 15, 1, 292, 1, 1, 1, 2, 1, 3, 1, 14, 2, 1, 1, 2, 2, 2, 2, 1,
];

/// The first terms of the continued fraction of `e`.
pub const E_TERMS: [i64; 23] = [
    2, 1, 2, 1, 1, 4, 1, 1, 6, 1, 1, 8, 1, 1, 10, 1, 1, 12, 1, 1, 14, 1, 1,
];

/// The first terms of the continued fraction of `sqrt(2)`.
pub const SQRT2_TERMS: [i64; 22] = [
    1, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2,
];

/// The first terms of the continued fraction of `sqrt(3)`.
pub const SQRT3_TERMS: [i64; 31] = [
    1, 1, 2, 1, 2, 1, 2, 1, 2, 1, 2, 1, 2, 1, 2, 1, 2, 1, 2, 1, 2, 1, 2, 1, 2, 1, 2, 1, 2, 1, 2,
];

/// A finite simple continued fraction together with its exact value.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct ContinuedFraction {
    terms: Vec<i64>,
    value: Fraction<Z64>,
}

impl ContinuedFraction {
    /// Evaluate the continued fraction with the given terms, from the
    /// innermost term outwards.
    pub fn new(terms: &[i64]) -> Result<ContinuedFraction, AlgebraError> {
        let (last, rest) = terms
            .split_last()
            .ok_or(AlgebraError::EmptyContinuedFraction)?;

        let mut value = Q64.nth(*last);
        for a in rest.iter().rev() {
            let inv = Q64.checked_div(&Q64.one(), &value)?;
            value = Q64.add(&Q64.nth(*a), &inv);
        }

        Ok(ContinuedFraction {
            terms: terms.to_vec(),
            value,
        })
    }

    /// A rational approximation of `pi`.
    pub fn pi() -> ContinuedFraction {
        Self::from_positive_terms(&PI_TERMS)
    }

    /// A rational approximation of `e`.
    pub fn e() -> ContinuedFraction {
        Self::from_positive_terms(&E_TERMS)
    }

    /// A rational approximation of `sqrt(2)`.
    pub fn sqrt2() -> ContinuedFraction {
        Self::from_positive_terms(&SQRT2_TERMS)
    }

    /// A rational approximation of `sqrt(3)`.
    pub fn sqrt3() -> ContinuedFraction {
        Self::from_positive_terms(&SQRT3_TERMS)
    }

    /// Evaluate the terms of a known constant. All terms after the first are
    /// positive, so no intermediate value is zero.
    fn from_positive_terms(terms: &[i64]) -> ContinuedFraction {
        match Self::new(terms) {
            Ok(c) => c,
            Err(e) => unreachable!("terms of a known constant failed to evaluate: {}", e),
        }
    }

    pub fn terms(&self) -> &[i64] {
        &self.terms
    }

    /// The exact value.
    pub fn value(&self) -> &Fraction<Z64> {
        &self.value
    }

    pub fn to_f64(&self) -> f64 {
        Q64.get(&self.value)
    }

    /// The values of the continued fractions of all nonempty prefixes of the terms.
    /// The last convergent is the value itself. Prefixes with an infinite
    /// value, which need a zero term after the first, are skipped.
    pub fn convergents(&self) -> Vec<Fraction<Z64>> {
        // p_k = a_k p_{k-1} + p_{k-2}, q_k = a_k q_{k-1} + q_{k-2}
        let (mut p, mut p_prev) = (1i64, 0i64);
        let (mut q, mut q_prev) = (0i64, 1i64);

        let mut convergents = Vec::with_capacity(self.terms.len());
        for a in &self.terms {
            (p, p_prev) = (a.wrapping_mul(p).wrapping_add(p_prev), p);
            (q, q_prev) = (a.wrapping_mul(q).wrapping_add(q_prev), q);
            if q != 0 {
                convergents.push(Q64.to_element(p, q));
            }
        }
        convergents
    }
}

impl Display for ContinuedFraction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Q64.printer(&self.value))
    }
}
