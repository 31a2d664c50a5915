//! Elements of a prime field whose modulus is picked at runtime.

use crate::{Error, Result, primes::is_prime};
use core::{
    fmt,
    hash::{Hash, Hasher},
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};
use subtle::{Choice, ConstantTimeEq};

/// Element of the prime field `F_p`.
///
/// The modulus travels with the value. All arithmetic results are reduced
/// back into `[0, p)`.
#[derive(Clone, Copy, Debug)]
pub struct FieldElement {
    value: u64,
    prime: u64,
}

impl FieldElement {
    /// Create a field element, reducing `value` into `[0, prime)`.
    ///
    /// Negative values wrap around, so `-1` becomes `prime - 1`. Fails with
    /// [`Error::InvalidPrime`] if `prime` is not a prime.
    pub fn new(value: i64, prime: u64) -> Result<Self> {
        if !is_prime(prime) {
            return Err(Error::InvalidPrime(prime));
        }

        Ok(Self::reduce(value, prime))
    }

    /// Create a field element from an unsigned value.
    pub fn from_u64(value: u64, prime: u64) -> Result<Self> {
        if !is_prime(prime) {
            return Err(Error::InvalidPrime(prime));
        }

        Ok(Self {
            value: value % prime,
            prime,
        })
    }

    /// Additive identity of `F_prime`.
    pub fn zero(prime: u64) -> Result<Self> {
        Self::from_u64(0, prime)
    }

    /// Multiplicative identity of `F_prime`.
    pub fn one(prime: u64) -> Result<Self> {
        Self::from_u64(1, prime)
    }

    /// Element of the same field as `self` holding `value`.
    pub fn with_value(&self, value: i64) -> Self {
        Self::reduce(value, self.prime)
    }

    /// Element of the same field as `self` holding `value mod p`.
    pub fn with_u64(&self, value: u64) -> Self {
        Self {
            value: value % self.prime,
            prime: self.prime,
        }
    }

    fn reduce(value: i64, prime: u64) -> Self {
        let value = i128::from(value).rem_euclid(i128::from(prime)) as u64;
        Self { value, prime }
    }

    /// Canonical representative in `[0, p)`.
    pub const fn value(&self) -> u64 {
        self.value
    }

    /// Modulus of the field this element belongs to.
    pub const fn prime(&self) -> u64 {
        self.prime
    }

    /// Is this element zero?
    pub const fn is_zero(&self) -> bool {
        self.value == 0
    }

    /// Do `self` and `other` belong to the same field?
    pub const fn same_field(&self, other: &Self) -> bool {
        self.prime == other.prime
    }

    fn ensure_same_field(&self, rhs: &Self) -> Result<()> {
        if self.same_field(rhs) {
            Ok(())
        } else {
            Err(Error::FieldMismatch {
                left: self.prime,
                right: rhs.prime,
            })
        }
    }

    #[track_caller]
    fn assert_same_field(&self, rhs: &Self) {
        assert!(
            self.same_field(rhs),
            "field mismatch: F_{} and F_{}",
            self.prime,
            rhs.prime
        );
    }

    /// Returns `self + rhs`, or [`Error::FieldMismatch`].
    pub fn checked_add(&self, rhs: &Self) -> Result<Self> {
        self.ensure_same_field(rhs)?;
        Ok(self.add_mod(rhs))
    }

    /// Returns `self - rhs`, or [`Error::FieldMismatch`].
    pub fn checked_sub(&self, rhs: &Self) -> Result<Self> {
        self.ensure_same_field(rhs)?;
        Ok(self.sub_mod(rhs))
    }

    /// Returns `self * rhs`, or [`Error::FieldMismatch`].
    pub fn checked_mul(&self, rhs: &Self) -> Result<Self> {
        self.ensure_same_field(rhs)?;
        Ok(self.mul_mod(rhs))
    }

    /// Returns `self / rhs`.
    ///
    /// Fails with [`Error::FieldMismatch`] for elements of different fields and
    /// with [`Error::DivisionByZero`] when `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self> {
        self.ensure_same_field(rhs)?;
        Ok(self.mul_mod(&rhs.invert()?))
    }

    fn add_mod(&self, rhs: &Self) -> Self {
        let sum = (u128::from(self.value) + u128::from(rhs.value)) % u128::from(self.prime);
        Self {
            value: sum as u64,
            prime: self.prime,
        }
    }

    fn sub_mod(&self, rhs: &Self) -> Self {
        self.add_mod(&rhs.neg_mod())
    }

    fn mul_mod(&self, rhs: &Self) -> Self {
        let product = (u128::from(self.value) * u128::from(rhs.value)) % u128::from(self.prime);
        Self {
            value: product as u64,
            prime: self.prime,
        }
    }

    fn neg_mod(&self) -> Self {
        Self {
            value: (self.prime - self.value) % self.prime,
            prime: self.prime,
        }
    }

    /// Returns `2 * self`.
    pub fn double(&self) -> Self {
        self.add_mod(self)
    }

    /// Returns `self * self`.
    pub fn square(&self) -> Self {
        self.mul_mod(self)
    }

    /// Returns `self^exp` by square-and-multiply.
    ///
    /// `0^0` is defined as `1`.
    pub fn pow(&self, exp: u64) -> Self {
        let mut base = *self;
        let mut exp = exp;
        let mut acc = self.with_value(1);

        while exp > 0 {
            if exp & 1 == 1 {
                acc = acc.mul_mod(&base);
            }
            base = base.square();
            exp >>= 1;
        }

        acc
    }

    /// Returns `self^exp` where a negative exponent raises the inverse.
    pub fn pow_signed(&self, exp: i64) -> Result<Self> {
        if exp >= 0 {
            Ok(self.pow(exp.unsigned_abs()))
        } else {
            Ok(self.invert()?.pow(exp.unsigned_abs()))
        }
    }

    /// Returns the multiplicative inverse of `self`.
    ///
    /// Since the modulus is prime, Fermat's little theorem gives
    /// `a^(p-1) ≡ 1`, hence `a^(p-2) * a ≡ 1 (mod p)`.
    pub fn invert(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(Error::DivisionByZero);
        }

        Ok(self.pow(self.prime - 2))
    }
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.value.ct_eq(&other.value) & self.prime.ct_eq(&other.prime)
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for FieldElement {}

impl Hash for FieldElement {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
        self.prime.hash(state);
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<FieldElement> for u64 {
    fn from(fe: FieldElement) -> u64 {
        fe.value
    }
}

//
// Arithmetic trait impls
//

/// Emit a `core::ops` trait wrapper for an inherent method.
///
/// The operator form panics when the operands belong to different fields.
macro_rules! field_op {
    ($op:tt, $func:ident, $inner_func:ident) => {
        impl $op for FieldElement {
            type Output = FieldElement;

            #[inline]
            #[track_caller]
            fn $func(self, rhs: FieldElement) -> FieldElement {
                self.assert_same_field(&rhs);
                FieldElement::$inner_func(&self, &rhs)
            }
        }

        impl $op<&FieldElement> for FieldElement {
            type Output = FieldElement;

            #[inline]
            #[track_caller]
            fn $func(self, rhs: &FieldElement) -> FieldElement {
                self.assert_same_field(rhs);
                FieldElement::$inner_func(&self, rhs)
            }
        }

        impl $op<&FieldElement> for &FieldElement {
            type Output = FieldElement;

            #[inline]
            #[track_caller]
            fn $func(self, rhs: &FieldElement) -> FieldElement {
                self.assert_same_field(rhs);
                FieldElement::$inner_func(self, rhs)
            }
        }
    };
}

field_op!(Add, add, add_mod);
field_op!(Sub, sub, sub_mod);
field_op!(Mul, mul, mul_mod);

impl AddAssign for FieldElement {
    #[inline]
    #[track_caller]
    fn add_assign(&mut self, rhs: FieldElement) {
        *self = *self + rhs;
    }
}

impl SubAssign for FieldElement {
    #[inline]
    #[track_caller]
    fn sub_assign(&mut self, rhs: FieldElement) {
        *self = *self - rhs;
    }
}

impl MulAssign for FieldElement {
    #[inline]
    #[track_caller]
    fn mul_assign(&mut self, rhs: FieldElement) {
        *self = *self * rhs;
    }
}

impl Neg for FieldElement {
    type Output = FieldElement;

    #[inline]
    fn neg(self) -> FieldElement {
        self.neg_mod()
    }
}

impl Neg for &FieldElement {
    type Output = FieldElement;

    #[inline]
    fn neg(self) -> FieldElement {
        self.neg_mod()
    }
}

#[cfg(test)]
mod tests {
    use super::FieldElement;
    use crate::Error;

    fn fe(value: i64) -> FieldElement {
        FieldElement::new(value, 17).unwrap()
    }

    #[test]
    fn construction_reduces() {
        assert_eq!(fe(20).value(), 3);
        assert_eq!(fe(-1).value(), 16);
        assert_eq!(fe(-35).value(), 16);
        assert_eq!(
            fe(i64::MIN).value(),
            (i128::from(i64::MIN).rem_euclid(17)) as u64
        );
    }

    #[test]
    fn rejects_composite_and_tiny_moduli() {
        assert_eq!(FieldElement::new(1, 0), Err(Error::InvalidPrime(0)));
        assert_eq!(FieldElement::new(1, 1), Err(Error::InvalidPrime(1)));
        assert_eq!(FieldElement::new(1, 15), Err(Error::InvalidPrime(15)));
        assert!(FieldElement::new(1, 2).is_ok());
    }

    #[test]
    fn arithmetic() {
        assert_eq!(fe(7) + fe(12), fe(2));
        assert_eq!(fe(3) - fe(9), fe(11));
        assert_eq!(fe(5) * fe(8), fe(6));
        assert_eq!(-fe(5), fe(12));
        assert_eq!(-fe(0), fe(0));
        assert_eq!(fe(3).pow(3), fe(10));
        assert_eq!(fe(0).pow(0), fe(1));
    }

    #[test]
    fn invert() {
        for v in 1..17 {
            let a = fe(v);
            assert_eq!(a * a.invert().unwrap(), fe(1));
        }
        assert_eq!(fe(0).invert(), Err(Error::DivisionByZero));
    }

    #[test]
    fn negative_exponent() {
        assert_eq!(fe(3).pow_signed(-1), fe(3).invert());
        assert_eq!(fe(3).pow_signed(-2).unwrap() * fe(9), fe(1));
        assert_eq!(fe(0).pow_signed(-1), Err(Error::DivisionByZero));
    }

    #[test]
    fn checked_ops_reject_foreign_fields() {
        let a = fe(3);
        let b = FieldElement::new(3, 19).unwrap();
        let mismatch = Err(Error::FieldMismatch {
            left: 17,
            right: 19,
        });

        assert_eq!(a.checked_add(&b), mismatch);
        assert_eq!(a.checked_sub(&b), mismatch);
        assert_eq!(a.checked_mul(&b), mismatch);
        assert_eq!(a.checked_div(&b), mismatch);
        assert_ne!(a, b);
    }

    #[test]
    fn checked_div() {
        assert_eq!(fe(6).checked_div(&fe(3)), Ok(fe(2)));
        assert_eq!(fe(6).checked_div(&fe(0)), Err(Error::DivisionByZero));
    }

    #[test]
    #[should_panic(expected = "field mismatch")]
    fn operator_panics_on_foreign_fields() {
        let _ = fe(1) + FieldElement::new(1, 19).unwrap();
    }

    #[test]
    fn field_of_two() {
        let one = FieldElement::one(2).unwrap();
        assert_eq!(one + one, FieldElement::zero(2).unwrap());
        assert_eq!(one.invert(), Ok(one));
    }
}
