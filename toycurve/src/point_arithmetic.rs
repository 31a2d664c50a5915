//! Chord-and-tangent group law in affine coordinates.
//!
//! Both operands must lie on the same curve; callers check this before
//! getting here. Vertical chords and vertical tangents are detected before a
//! slope is formed, so no inversion of zero can happen.

use crate::CurvePoint;
use toyfield::FieldElement;

/// Returns `lhs + rhs`.
pub(crate) fn add(lhs: &CurvePoint, rhs: &CurvePoint) -> CurvePoint {
    debug_assert_eq!(lhs.curve(), rhs.curve());

    let ((x1, y1), (x2, y2)) = match (lhs.coordinates(), rhs.coordinates()) {
        (None, _) => return *rhs,
        (_, None) => return *lhs,
        (Some(p), Some(q)) => (p, q),
    };

    if x1 == x2 {
        // Either Q = -P (vertical chord) or Q = P.
        if y1 == -y2 {
            return lhs.curve().identity();
        }
        return double(lhs);
    }

    let slope = (y2 - y1) * invert_nonzero(&(x2 - x1));
    chord(lhs, slope, (x1, y1), x2)
}

/// Returns `point + point`.
pub(crate) fn double(point: &CurvePoint) -> CurvePoint {
    let Some((x, y)) = point.coordinates() else {
        return *point;
    };

    // Vertical tangent, including y = 0 and every tangent over F_2.
    let two_y = y.double();
    if two_y.is_zero() {
        return point.curve().identity();
    }

    let three_x2 = x.square() * x.with_value(3);
    let slope = (three_x2 + point.curve().a()) * invert_nonzero(&two_y);
    chord(point, slope, (x, y), x)
}

/// Third intersection of the line with the given slope through `(x1, y1)`,
/// reflected: `x3 = s² - x1 - x2`, `y3 = s(x1 - x3) - y1`.
fn chord(
    p: &CurvePoint,
    slope: FieldElement,
    (x1, y1): (FieldElement, FieldElement),
    x2: FieldElement,
) -> CurvePoint {
    let x3 = slope.square() - x1 - x2;
    let y3 = slope * (x1 - x3) - y1;
    CurvePoint::from_affine_unchecked(p.curve(), x3, y3)
}

/// Inverse of an element the caller has already checked to be non-zero.
fn invert_nonzero(fe: &FieldElement) -> FieldElement {
    debug_assert!(!fe.is_zero(), "slope denominator is zero");
    fe.pow(fe.prime() - 2)
}

#[cfg(test)]
mod tests {
    use crate::Curve;

    #[test]
    fn doubling_formula() {
        // s = 3·5² / (2·8) = 75 / 16 ≡ 7 · 16 = 112 ≡ 10 (mod 17)
        // x = 100 - 10 = 90 ≡ 5, y = 10·(5 - 5) - 8 ≡ 9
        let curve = Curve::new(17, 0, 7).unwrap();
        let p = curve.point(5, 8).unwrap();
        assert_eq!(p.double(), curve.point(5, 9).unwrap());
        assert_eq!(p + p, p.double());
    }

    #[test]
    fn chord() {
        let curve = Curve::new(17, 2, 2).unwrap();
        let g = curve.point(5, 1).unwrap();
        let g2 = curve.point(6, 3).unwrap();
        assert_eq!(g + g2, curve.point(10, 6).unwrap());
    }

    #[test]
    fn vertical_chord_gives_identity() {
        let curve = Curve::new(17, 0, 7).unwrap();
        let p = curve.point(5, 8).unwrap();
        let q = curve.point(5, 9).unwrap();
        assert!((p + q).is_identity());
    }

    #[test]
    fn vertical_tangent_gives_identity() {
        let curve = Curve::new(17, 0, 7).unwrap();
        let p = curve.point(3, 0).unwrap();
        assert!(p.double().is_identity());
        assert!((p + p).is_identity());
    }

    #[test]
    fn identity_law() {
        let curve = Curve::new(17, 2, 2).unwrap();
        let g = curve.point(5, 1).unwrap();
        let o = curve.identity();
        assert_eq!(g + o, g);
        assert_eq!(o + g, g);
        assert_eq!(o + o, o);
        assert_eq!(o.double(), o);
    }
}
