//! Group law properties on a few curves small enough to enumerate.

toycurve::test_group_laws!(f17_textbook, 17, 2, 2);
toycurve::test_group_laws!(f17_secp_shape, 17, 0, 7);
toycurve::test_group_laws!(f97, 97, 2, 3);
toycurve::test_group_laws!(f11, 11, 1, 1);

use toycurve::{Curve, Error};

#[test]
fn points_of_different_curves_do_not_combine() {
    let p = Curve::new(17, 0, 7).unwrap().point(5, 8).unwrap();
    let q = Curve::new(19, 0, 7).unwrap().identity();
    assert!(matches!(
        p.checked_add(&q),
        Err(Error::CurveMismatch { .. })
    ));
}

#[test]
fn identities_of_different_curves_differ() {
    let o1 = Curve::new(17, 0, 7).unwrap().identity();
    let o2 = Curve::new(17, 2, 2).unwrap().identity();
    assert_eq!(o1, o1);
    assert_ne!(o1, o2);
}

#[test]
fn point_validates_iff_on_the_curve() {
    let (p, a, b) = (97u64, 2u64, 3u64);
    let curve = Curve::new(97, 2, 3).unwrap();
    let mut count = 1;

    for x in 0..p {
        for y in 0..p {
            let on_curve = (y * y) % p == (x * x % p * x + a * x + b) % p;
            match curve.point(x, y) {
                Ok(point) => {
                    assert!(on_curve, "({x},{y}) accepted");
                    let coords = point.coordinates().map(|(x, y)| (x.value(), y.value()));
                    assert_eq!(coords, Some((x, y)));
                    count += 1;
                }
                Err(err) => {
                    assert!(!on_curve, "({x},{y}) rejected");
                    assert!(matches!(err, Error::InvalidPoint { .. }));
                }
            }
        }
    }

    assert_eq!(count, 100);
    assert_eq!(curve.points().count(), 99);
}
