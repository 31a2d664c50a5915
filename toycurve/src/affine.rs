//! Affine curve points.

use crate::{Curve, Error, Result, point_arithmetic};
use core::{
    fmt,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
};
use toyfield::FieldElement;

/// Point on a short Weierstrass curve in affine coordinates.
///
/// Every point remembers the curve it lies on. The point at infinity is a
/// variant of its own and carries no coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CurvePoint {
    curve: Curve,
    coords: Coordinates,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Coordinates {
    Infinity,
    Affine { x: FieldElement, y: FieldElement },
}

impl CurvePoint {
    /// The point at infinity (additive identity) of `curve`.
    pub const fn at_infinity(curve: Curve) -> Self {
        Self {
            curve,
            coords: Coordinates::Infinity,
        }
    }

    /// Validated point `(x, y)` on `y² = x³ + ax + b`.
    ///
    /// All four elements must belong to the same field. Coordinates which do
    /// not satisfy the curve equation are rejected with
    /// [`Error::InvalidPoint`].
    pub fn new(x: FieldElement, y: FieldElement, a: FieldElement, b: FieldElement) -> Result<Self> {
        Self::from_affine(Curve::from_coefficients(a, b)?, x, y)
    }

    /// Validated point `(x, y)` on `curve`.
    pub fn from_affine(curve: Curve, x: FieldElement, y: FieldElement) -> Result<Self> {
        let field_mismatch = |fe: &FieldElement| toyfield::Error::FieldMismatch {
            left: fe.prime(),
            right: curve.prime(),
        };

        if !x.same_field(&curve.a()) {
            return Err(field_mismatch(&x).into());
        }
        if !y.same_field(&curve.a()) {
            return Err(field_mismatch(&y).into());
        }

        if y.square() != curve.rhs(&x) {
            return Err(Error::InvalidPoint {
                x: x.value(),
                y: y.value(),
                curve,
            });
        }

        Ok(Self::from_affine_unchecked(curve, x, y))
    }

    /// Point from coordinates already known to satisfy the curve equation.
    pub(crate) fn from_affine_unchecked(curve: Curve, x: FieldElement, y: FieldElement) -> Self {
        debug_assert_eq!(y.square(), curve.rhs(&x), "point is not on the curve");
        Self {
            curve,
            coords: Coordinates::Affine { x, y },
        }
    }

    /// Curve this point lies on.
    pub const fn curve(&self) -> Curve {
        self.curve
    }

    /// Is this the point at infinity?
    pub const fn is_identity(&self) -> bool {
        matches!(self.coords, Coordinates::Infinity)
    }

    /// Affine coordinates, or `None` for the point at infinity.
    pub const fn coordinates(&self) -> Option<(FieldElement, FieldElement)> {
        match self.coords {
            Coordinates::Infinity => None,
            Coordinates::Affine { x, y } => Some((x, y)),
        }
    }

    /// x-coordinate, or `None` for the point at infinity.
    pub const fn x(&self) -> Option<FieldElement> {
        match self.coords {
            Coordinates::Infinity => None,
            Coordinates::Affine { x, .. } => Some(x),
        }
    }

    /// y-coordinate, or `None` for the point at infinity.
    pub const fn y(&self) -> Option<FieldElement> {
        match self.coords {
            Coordinates::Infinity => None,
            Coordinates::Affine { y, .. } => Some(y),
        }
    }

    /// Returns `-self`, the reflection `(x, -y)`.
    pub fn negate(&self) -> Self {
        match self.coords {
            Coordinates::Infinity => *self,
            Coordinates::Affine { x, y } => Self {
                curve: self.curve,
                coords: Coordinates::Affine { x, y: -y },
            },
        }
    }

    /// Returns `self + self`.
    pub fn double(&self) -> Self {
        point_arithmetic::double(self)
    }

    /// Returns `self + other`, or [`Error::CurveMismatch`] if the points lie
    /// on different curves.
    pub fn checked_add(&self, other: &Self) -> Result<Self> {
        self.ensure_same_curve(other)?;
        Ok(point_arithmetic::add(self, other))
    }

    /// Returns `self - other`, or [`Error::CurveMismatch`] if the points lie
    /// on different curves.
    pub fn checked_sub(&self, other: &Self) -> Result<Self> {
        self.checked_add(&other.negate())
    }

    /// Returns `self - other`, panicking if the points lie on different
    /// curves.
    #[track_caller]
    fn subtract(&self, other: &Self) -> Self {
        self.assert_same_curve(other);
        point_arithmetic::add(self, &other.negate())
    }

    fn ensure_same_curve(&self, other: &Self) -> Result<()> {
        if self.curve == other.curve {
            Ok(())
        } else {
            Err(Error::CurveMismatch {
                left: self.curve,
                right: other.curve,
            })
        }
    }

    #[track_caller]
    fn assert_same_curve(&self, other: &Self) {
        assert!(
            self.curve == other.curve,
            "curve mismatch: {} and {}",
            self.curve,
            other.curve
        );
    }
}

/// Points render as `(x,y)`, the point at infinity as `∞`.
impl fmt::Display for CurvePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.coords {
            Coordinates::Infinity => f.write_str("∞"),
            Coordinates::Affine { x, y } => write!(f, "({x},{y})"),
        }
    }
}

//
// Arithmetic trait impls
//
// The operator forms treat points from different curves as a programming
// error and panic; use `checked_add`/`checked_sub` to get an `Error` instead.
//

impl Add<CurvePoint> for CurvePoint {
    type Output = CurvePoint;

    #[track_caller]
    fn add(self, other: CurvePoint) -> CurvePoint {
        self.assert_same_curve(&other);
        point_arithmetic::add(&self, &other)
    }
}

impl Add<&CurvePoint> for CurvePoint {
    type Output = CurvePoint;

    #[track_caller]
    fn add(self, other: &CurvePoint) -> CurvePoint {
        self.assert_same_curve(other);
        point_arithmetic::add(&self, other)
    }
}

impl Add<&CurvePoint> for &CurvePoint {
    type Output = CurvePoint;

    #[track_caller]
    fn add(self, other: &CurvePoint) -> CurvePoint {
        self.assert_same_curve(other);
        point_arithmetic::add(self, other)
    }
}

impl AddAssign<CurvePoint> for CurvePoint {
    #[track_caller]
    fn add_assign(&mut self, rhs: CurvePoint) {
        *self = *self + rhs;
    }
}

impl AddAssign<&CurvePoint> for CurvePoint {
    #[track_caller]
    fn add_assign(&mut self, rhs: &CurvePoint) {
        *self = *self + rhs;
    }
}

impl Sub<CurvePoint> for CurvePoint {
    type Output = CurvePoint;

    #[track_caller]
    fn sub(self, other: CurvePoint) -> CurvePoint {
        self.subtract(&other)
    }
}

impl Sub<&CurvePoint> for &CurvePoint {
    type Output = CurvePoint;

    #[track_caller]
    fn sub(self, other: &CurvePoint) -> CurvePoint {
        self.subtract(other)
    }
}

impl SubAssign<CurvePoint> for CurvePoint {
    #[track_caller]
    fn sub_assign(&mut self, rhs: CurvePoint) {
        *self = *self - rhs;
    }
}

impl Neg for CurvePoint {
    type Output = CurvePoint;

    fn neg(self) -> CurvePoint {
        self.negate()
    }
}

impl Neg for &CurvePoint {
    type Output = CurvePoint;

    fn neg(self) -> CurvePoint {
        self.negate()
    }
}
