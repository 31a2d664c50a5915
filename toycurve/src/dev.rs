//! Development-related functionality.

/// Write a series of `criterion`-based benchmarks for one curve and one of
/// its points.
#[macro_export]
macro_rules! bench_curve {
    { $name:ident, $desc:expr, $curve:expr, $point:expr } => {
        fn bench_point_add<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let p = core::hint::black_box($point);
            let q = core::hint::black_box($point.double());
            group.bench_function("point add", |b| b.iter(|| p + q));
        }

        fn bench_point_double<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let p = core::hint::black_box($point);
            group.bench_function("point double", |b| b.iter(|| p.double()));
        }

        fn bench_point_mul<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let p = core::hint::black_box($point);
            let n = core::hint::black_box(1_000_003i64);
            group.bench_function("point mul", |b| b.iter(|| p * n));
        }

        fn bench_group_order<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let curve = core::hint::black_box($curve);
            group.bench_function("group order (uncached)", |b| {
                b.iter(|| $crate::OrderCache::new().group_order(&curve))
            });
        }

        fn bench_subgroup_order<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let cache = $crate::OrderCache::new();
            let p = core::hint::black_box($point);
            cache.group_order(&p.curve());
            group.bench_function("subgroup order (cached N)", |b| {
                b.iter(|| cache.subgroup_order(&p))
            });
        }

        fn $name(c: &mut ::criterion::Criterion) {
            let mut group = c.benchmark_group($desc);
            bench_point_add(&mut group);
            bench_point_double(&mut group);
            bench_point_mul(&mut group);
            bench_group_order(&mut group);
            bench_subgroup_order(&mut group);
            group.finish();
        }
    };
}

/// Implement property tests of the group law on one non-singular curve.
///
/// Points are drawn from the curve's full point list, the point at infinity
/// included. The calling crate needs `proptest` among its dev-dependencies.
#[macro_export]
macro_rules! test_group_laws {
    ($modname:ident, $p:expr, $a:expr, $b:expr) => {
        mod $modname {
            use ::proptest::prelude::*;
            use $crate::{Curve, CurvePoint, OrderCache};

            fn curve() -> Curve {
                Curve::new($p, $a, $b).unwrap()
            }

            fn points() -> Vec<CurvePoint> {
                let curve = curve();
                core::iter::once(curve.identity())
                    .chain(curve.points())
                    .collect()
            }

            fn point() -> impl Strategy<Value = CurvePoint> {
                prop::sample::select(points())
            }

            #[test]
            fn curve_is_non_singular() {
                assert!(!curve().is_singular());
            }

            #[test]
            fn point_count_matches_group_order() {
                let n = OrderCache::new().group_order(&curve());
                assert_eq!(points().len() as u64, n);
            }

            proptest! {
                #[test]
                fn identity(p in point()) {
                    let o = curve().identity();
                    prop_assert_eq!(p + o, p);
                    prop_assert_eq!(o + p, p);
                }

                #[test]
                fn inverse(p in point()) {
                    prop_assert!((p + (-p)).is_identity());
                    prop_assert!((p - p).is_identity());
                }

                #[test]
                fn commutativity(p in point(), q in point()) {
                    prop_assert_eq!(p + q, q + p);
                }

                #[test]
                fn associativity(p in point(), q in point(), r in point()) {
                    prop_assert_eq!((p + q) + r, p + (q + r));
                }

                #[test]
                fn closure(p in point(), q in point()) {
                    let sum = p + q;
                    match sum.coordinates() {
                        None => {}
                        Some((x, y)) => prop_assert!(curve().contains(x.value(), y.value())),
                    }
                }

                #[test]
                fn multiplication_is_repeated_addition(p in point(), n in 0i64..=10) {
                    let expected = (0..n).fold(curve().identity(), |acc, _| acc + p);
                    prop_assert_eq!(p * n, expected);
                }

                #[test]
                fn multiplication_distributes(p in point(), m in -500i64..500, n in -500i64..500) {
                    prop_assert_eq!(p * (m + n), p * m + p * n);
                }

                #[test]
                fn subgroup_order_divides_group_order(p in point()) {
                    let cache = OrderCache::new();
                    let n = cache.group_order(&curve());
                    let d = cache.subgroup_order(&p);
                    prop_assert_eq!(n % d, 0);
                    prop_assert!((p * d as i64).is_identity());
                    for k in 1..d {
                        prop_assert!(!(p * k as i64).is_identity());
                    }
                }
            }
        }
    };
}
