use taylorica::{
    combinatorics::bernoulli,
    domains::{
        integer::{Z32, Z64},
        integer_mod::{is_prime, IntegerMod},
        rational::{ToFractionField, Q32, Q64},
        EuclideanDomain, Field, Ring,
    },
    poly::{
        series::{self, TaylorFunction},
        univariate::PolynomialRing,
    },
};

#[test]
fn integer_gcd() {
    assert_eq!(Z32.gcd(&12, &6), 6);
    assert_eq!(Z32.gcd(&5, &3), 1);
    assert_eq!(Z64.gcd(&-12, &18), 6);
}

#[test]
fn exact_polynomial_division() {
    let ring = PolynomialRing::new(Q32);
    let xm1 = ring.from_coefficients([Q32.one(), Q32.nth(-1)]);
    let xp1 = ring.from_coefficients([Q32.one(), Q32.one()]);

    let product = &xm1 * &xp1;
    assert_eq!(product, ring.from_coefficients([Q32.one(), Q32.zero(), Q32.nth(-1)]));

    let (q, r) = ring.quot_rem(&product, &xm1);
    assert_eq!(q, xp1);
    assert!(r.is_zero());
}

#[test]
fn rational_addition() {
    let half = Q32.to_element(1, 2);
    let quarter = Q32.to_element(1, 4);
    assert_eq!(Q32.add(&half, &quarter), Q32.to_element(3, 4));
    assert_eq!(Q32.printer(&Q32.add(&half, &quarter)).to_string(), "3/4");
    assert_eq!(Q32.div(&half, &quarter), Q32.nth(2));
}

#[test]
fn fraction_field_of_a_field_is_itself() {
    let field = Q32.fraction_field();
    assert_eq!(field, Q32);
    assert_eq!(Q32.inject(&Q32.to_element(2, 3)), Q32.to_element(2, 3));

    let f7 = IntegerMod::<7>::new();
    assert_eq!(f7.fraction_field(), f7);
}

#[test]
fn exponential_series() {
    let p = series::exp(&Z32, 8);
    assert_eq!(p.degree(), 8);

    let mut factorial = 1;
    for i in 0..=8 {
        if i > 0 {
            factorial *= i as i32;
        }
        assert_eq!(p.coeff_at(i), Q32.to_element(1, factorial));
    }

    assert_eq!(p.evaluate(0.0f64), 1.0);
    assert!((p.evaluate(0.1f64) - 0.1f64.exp()).abs() < 1e-7);
    assert!((p.evaluate(0.5f64) - 0.5f64.exp()).abs() < 1e-6);
}

#[test]
fn bernoulli_numbers() {
    assert_eq!(bernoulli(&Z64, 0), Q64.one());
    assert_eq!(bernoulli(&Z64, 1), Q64.to_element(-1, 2));
    assert_eq!(bernoulli(&Z64, 2), Q64.to_element(1, 6));
    assert_eq!(bernoulli(&Z64, 3), Q64.zero());
    assert_eq!(bernoulli(&Z64, 4), Q64.to_element(-1, 30));
}

#[test]
fn primality() {
    for p in [2, 3, 5, 7, 31, 65537] {
        assert!(is_prime(p), "{} is prime", p);
    }
    for n in [-7, 0, 1, 4, 6, 8, 9, 10, 100, 65535] {
        assert!(!is_prime(n), "{} is not prime", n);
    }

    assert!(<IntegerMod<7> as Ring>::IS_FIELD);
    assert!(!<IntegerMod<8> as Ring>::IS_FIELD);
}

#[test]
fn every_function_is_named() {
    for f in TaylorFunction::ALL {
        let parsed: TaylorFunction = f.name().parse().unwrap();
        assert_eq!(parsed, f);
        assert_eq!(f.series(&Z64, 7).variable(), "x");
    }
    assert!("gamma".parse::<TaylorFunction>().is_err());
}
