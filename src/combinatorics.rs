//! Combinatorial numbers over an arbitrary ring: factorials, binomial
//! coefficients, alternating signs and Bernoulli numbers.
//!
//! Binomial coefficients and Bernoulli numbers are computed with exact
//! fractions over the fraction field of the ring:
//!
//! ```rust
//! use taylorica::combinatorics::{bernoulli, binomial};
//! use taylorica::domains::{integer::Z64, rational::Q64};
//!
//! assert_eq!(binomial(&Z64, 2, 6), 15);
//! assert_eq!(bernoulli(&Z64, 2), Q64.to_element(1, 6));
//! ```
use ahash::HashMap;
use tracing::debug;

use crate::domains::{rational::ToFractionField, Ring};

/// The element type of the fraction field of `R`.
pub type FractionElement<R> =
    <<R as ToFractionField>::FractionField as Ring>::Element;

/// Compute `n!` in the ring.
pub fn factorial<R: Ring>(ring: &R, n: u64) -> R::Element {
    (1..=n).fold(ring.one(), |acc, i| ring.mul(&ring.nth(i as i64), &acc))
}

/// Compute `(-1)^k`.
pub fn alternate<R: Ring>(ring: &R, k: u64) -> R::Element {
    if k % 2 == 0 {
        ring.one()
    } else {
        ring.neg(&ring.one())
    }
}

/// Compute `base^exponent` for a small integer `base`.
pub fn pow<R: Ring>(ring: &R, base: i64, exponent: u64) -> R::Element {
    ring.pow(&ring.nth(base), exponent)
}

/// Compute the binomial coefficient `C(n, k)`, the number of ways to choose
/// `k` elements out of `n`. It is zero for `k > n`.
pub fn binomial<R: ToFractionField>(ring: &R, k: u64, n: u64) -> R::Element {
    ring.numerator(&binomial_fraction(ring, k, n))
}

/// Compute the binomial coefficient `C(n, k)` in the fraction field.
pub fn binomial_fraction<R: ToFractionField>(ring: &R, k: u64, n: u64) -> FractionElement<R> {
    let field = ring.fraction_field();
    if k > n {
        return field.zero();
    }

    let k = if k > n / 2 { n - k } else { k };

    // walk up from C(n - k, 0) using C(m, j) = C(m - 1, j - 1) * m / j
    (1..=k).fold(field.one(), |acc, j| {
        let step = ring.to_fraction(&ring.nth((n - k + j) as i64), &ring.nth(j as i64));
        field.mul(&acc, &step)
    })
}

/// Compute the Bernoulli number `B_m`, with the convention `B_1 = -1/2`.
///
/// Use a [BernoulliCache] when many Bernoulli numbers are needed.
pub fn bernoulli<R: ToFractionField>(ring: &R, m: usize) -> FractionElement<R> {
    BernoulliCache::new(ring.clone()).get(m)
}

/// A memoized sequence of Bernoulli numbers, computed with the recurrence
/// `B_m = -1/(m+1) * sum_{k<m} C(m+1, k) B_k`.
pub struct BernoulliCache<R: ToFractionField> {
    ring: R,
    field: R::FractionField,
    numbers: Vec<FractionElement<R>>,
    binomials: HashMap<(u64, u64), FractionElement<R>>,
}

impl<R: ToFractionField> BernoulliCache<R> {
    pub fn new(ring: R) -> BernoulliCache<R> {
        let field = ring.fraction_field();
        BernoulliCache {
            numbers: vec![field.one()],
            binomials: HashMap::default(),
            ring,
            field,
        }
    }

    /// The number of Bernoulli numbers that have been computed.
    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    /// Get `B_m`, computing all missing lower Bernoulli numbers.
    pub fn get(&mut self, m: usize) -> FractionElement<R> {
        while self.numbers.len() <= m {
            let j = self.numbers.len();

            let mut sum = self.field.zero();
            for k in 0..j {
                let c = self.binomial(k as u64, j as u64 + 1);
                self.field.add_mul_assign(&mut sum, &c, &self.numbers[k]);
            }

            let factor = self
                .ring
                .to_fraction(&self.ring.nth(-1), &self.ring.nth(j as i64 + 1));
            let b = self.field.mul(&sum, &factor);
            debug!("B_{} = {}", j, self.field.printer(&b));
            self.numbers.push(b);
        }

        self.numbers[m].clone()
    }

    fn binomial(&mut self, k: u64, n: u64) -> FractionElement<R> {
        if let Some(c) = self.binomials.get(&(k, n)) {
            return c.clone();
        }

        let c = binomial_fraction(&self.ring, k, n);
        self.binomials.insert((k, n), c.clone());
        c
    }
}
