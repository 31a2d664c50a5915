//! Field axiom tests over a handful of the moduli curve explorers use.

use toyfield::{Error, FieldElement, PRIMES};

toyfield::test_field_laws!(f2, 2);
toyfield::test_field_laws!(f17, 17);
toyfield::test_field_laws!(f97, 97);
toyfield::test_field_laws!(f541, 541);

#[test]
fn every_table_prime_is_a_valid_modulus() {
    for p in PRIMES {
        let minus_one = FieldElement::new(-1, p).unwrap();
        assert_eq!(minus_one.value(), p - 1);
        assert_eq!(minus_one.square(), FieldElement::one(p).unwrap());
    }
}

#[test]
fn zero_has_no_inverse_in_any_field() {
    for p in PRIMES {
        assert_eq!(
            FieldElement::zero(p).unwrap().invert(),
            Err(Error::DivisionByZero)
        );
    }
}

#[test]
fn errors_render() {
    assert_eq!(
        Error::InvalidPrime(21).to_string(),
        "modulus 21 is not a prime"
    );
    assert_eq!(
        Error::FieldMismatch { left: 17, right: 19 }.to_string(),
        "field mismatch: cannot combine elements of F_17 and F_19"
    );
}
