//! Scalar multiplication.

use crate::CurvePoint;
use core::ops::{Mul, MulAssign};

impl CurvePoint {
    /// Returns `[n] self`, `self` added to itself `n` times.
    ///
    /// `n = 0` yields the point at infinity and a negative `n` multiplies the
    /// negated point by `|n|`. Uses left-to-right double-and-add, which
    /// agrees with repeated addition since the group law is associative.
    ///
    /// **This operation is variable time with respect to the scalar.**
    pub fn multiply(&self, n: i64) -> Self {
        if n < 0 {
            self.negate().multiply_unsigned(n.unsigned_abs())
        } else {
            self.multiply_unsigned(n.unsigned_abs())
        }
    }

    /// Returns `[k] self` for an unsigned scalar.
    pub fn multiply_unsigned(&self, k: u64) -> Self {
        let mut acc = self.curve().identity();
        for i in (0..u64::BITS - k.leading_zeros()).rev() {
            acc = acc.double();
            if (k >> i) & 1 == 1 {
                acc += self;
            }
        }

        acc
    }
}

impl Mul<i64> for CurvePoint {
    type Output = CurvePoint;

    fn mul(self, n: i64) -> CurvePoint {
        self.multiply(n)
    }
}

impl Mul<i64> for &CurvePoint {
    type Output = CurvePoint;

    fn mul(self, n: i64) -> CurvePoint {
        self.multiply(n)
    }
}

impl Mul<CurvePoint> for i64 {
    type Output = CurvePoint;

    fn mul(self, point: CurvePoint) -> CurvePoint {
        point.multiply(self)
    }
}

impl Mul<&CurvePoint> for i64 {
    type Output = CurvePoint;

    fn mul(self, point: &CurvePoint) -> CurvePoint {
        point.multiply(self)
    }
}

impl MulAssign<i64> for CurvePoint {
    fn mul_assign(&mut self, n: i64) {
        *self = self.multiply(n);
    }
}
