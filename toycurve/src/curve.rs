//! Curve identities.

use crate::{CurvePoint, Error, Result};
use core::fmt;
use toyfield::{FieldElement, prime_at};

/// Short Weierstrass curve `y² = x³ + ax + b` over `F_p`.
///
/// A curve is identified by its `(p, a, b)` triple, with both coefficients
/// reduced into `[0, p)`. It is the key under which group-level facts such as
/// the group order are cached, and it scopes which points may be combined.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Curve {
    a: FieldElement,
    b: FieldElement,
}

impl Curve {
    /// Curve with the given prime modulus and coefficients.
    ///
    /// Negative coefficients wrap around, so `a = -1` over `F_17` is the same
    /// curve as `a = 16`.
    pub fn new(prime: u64, a: i64, b: i64) -> Result<Self> {
        Ok(Self {
            a: FieldElement::new(a, prime)?,
            b: FieldElement::new(b, prime)?,
        })
    }

    /// Curve over the `index`-th field of [`PRIMES`][toyfield::PRIMES].
    pub fn from_prime_index(index: usize, a: i64, b: i64) -> Result<Self> {
        let prime = prime_at(index).ok_or(Error::UnknownPrime(index))?;
        Self::new(prime, a, b)
    }

    /// Curve with coefficients given as field elements.
    ///
    /// Both must belong to the same field.
    pub fn from_coefficients(a: FieldElement, b: FieldElement) -> Result<Self> {
        if !a.same_field(&b) {
            return Err(toyfield::Error::FieldMismatch {
                left: a.prime(),
                right: b.prime(),
            }
            .into());
        }

        Ok(Self { a, b })
    }

    /// Field modulus `p`.
    pub const fn prime(&self) -> u64 {
        self.a.prime()
    }

    /// Coefficient `a`.
    pub const fn a(&self) -> FieldElement {
        self.a
    }

    /// Coefficient `b`.
    pub const fn b(&self) -> FieldElement {
        self.b
    }

    /// Element of this curve's base field.
    pub fn element(&self, value: u64) -> FieldElement {
        self.a.with_u64(value)
    }

    /// Is the discriminant `4a³ + 27b²` zero?
    ///
    /// Singular cubics are not elliptic curves: the group law is only
    /// meaningful on their non-singular points and Lagrange's theorem no
    /// longer bounds point orders by the point count. They are still accepted
    /// so that they can be drawn and explored.
    pub fn is_singular(&self) -> bool {
        let four_a3 = self.a.pow(3) * self.a.with_value(4);
        let twenty_seven_b2 = self.b.square() * self.b.with_value(27);
        (four_a3 + twenty_seven_b2).is_zero()
    }

    /// Right-hand side of the curve equation, `x³ + ax + b`.
    pub fn rhs(&self, x: &FieldElement) -> FieldElement {
        x.pow(3) + self.a * x + self.b
    }

    /// Does `(x, y)` satisfy the curve equation?
    pub fn contains(&self, x: u64, y: u64) -> bool {
        let (x, y) = (self.element(x), self.element(y));
        y.square() == self.rhs(&x)
    }

    /// Validated curve point at `(x, y)`.
    pub fn point(&self, x: u64, y: u64) -> Result<CurvePoint> {
        CurvePoint::from_affine(*self, self.element(x), self.element(y))
    }

    /// The point at infinity of this curve.
    pub fn identity(&self) -> CurvePoint {
        CurvePoint::at_infinity(*self)
    }

    /// Iterate over every affine point of the curve.
    ///
    /// Points come out row by row: ascending `y`, then ascending `x` within a
    /// row, which is the layout of a membership grid plotted over the field.
    pub fn points(&self) -> Points {
        Points {
            curve: *self,
            x: 0,
            y: 0,
        }
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "y^2 = x^3 + {}x + {} over F_{}",
            self.a,
            self.b,
            self.prime()
        )
    }
}

/// Iterator over the affine points of a [`Curve`].
#[derive(Clone, Debug)]
pub struct Points {
    curve: Curve,
    x: u64,
    y: u64,
}

impl Iterator for Points {
    type Item = CurvePoint;

    fn next(&mut self) -> Option<CurvePoint> {
        let p = self.curve.prime();

        while self.y < p {
            let (x, y) = (self.x, self.y);

            self.x += 1;
            if self.x == p {
                self.x = 0;
                self.y += 1;
            }

            if let Ok(point) = self.curve.point(x, y) {
                return Some(point);
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::Curve;
    use crate::Error;

    #[test]
    fn coefficients_are_reduced() {
        assert_eq!(
            Curve::new(17, -1, 24).unwrap(),
            Curve::new(17, 16, 7).unwrap()
        );
    }

    #[test]
    fn composite_modulus_is_rejected() {
        assert_eq!(
            Curve::new(15, 0, 7),
            Err(Error::Field(toyfield::Error::InvalidPrime(15)))
        );
    }

    #[test]
    fn prime_index() {
        assert_eq!(Curve::from_prime_index(6, 0, 7), Curve::new(17, 0, 7));
        assert_eq!(
            Curve::from_prime_index(100, 0, 7),
            Err(Error::UnknownPrime(100))
        );
    }

    #[test]
    fn singular() {
        assert!(Curve::new(17, 0, 0).unwrap().is_singular());
        // 4·(-3)³ + 27·2² = -108 + 108
        assert!(Curve::new(17, -3, 2).unwrap().is_singular());
        assert!(!Curve::new(17, 0, 7).unwrap().is_singular());
        assert!(!Curve::new(17, 2, 2).unwrap().is_singular());
    }

    #[test]
    fn membership() {
        let curve = Curve::new(17, 0, 7).unwrap();
        assert!(curve.contains(5, 8));
        assert!(curve.contains(5, 9));
        assert!(!curve.contains(5, 7));
    }

    #[test]
    fn enumerates_points_row_major() {
        let curve = Curve::new(17, 0, 7).unwrap();
        let points: Vec<(u64, u64)> = curve
            .points()
            .map(|p| (p.x().unwrap().value(), p.y().unwrap().value()))
            .collect();

        assert_eq!(
            points,
            [
                (3, 0),
                (12, 1),
                (10, 2),
                (8, 3),
                (15, 4),
                (1, 5),
                (6, 6),
                (2, 7),
                (5, 8),
                (5, 9),
                (2, 10),
                (6, 11),
                (1, 12),
                (15, 13),
                (8, 14),
                (10, 15),
                (12, 16),
            ]
        );
    }

    #[test]
    fn display() {
        assert_eq!(
            Curve::new(17, 2, 2).unwrap().to_string(),
            "y^2 = x^3 + 2x + 2 over F_17"
        );
    }
}
