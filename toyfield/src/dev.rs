//! Development-related functionality.

/// Write a series of `criterion`-based benchmarks for one prime field.
#[macro_export]
macro_rules! bench_field {
    { $name:ident, $desc:expr, $fe_a:expr, $fe_b:expr } => {
        fn bench_add<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let x = core::hint::black_box($fe_a);
            let y = core::hint::black_box($fe_b);
            group.bench_function("add", |b| b.iter(|| x + y));
        }

        fn bench_mul<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let x = core::hint::black_box($fe_a);
            let y = core::hint::black_box($fe_b);
            group.bench_function("mul", |b| b.iter(|| x * y));
        }

        fn bench_invert<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let x = core::hint::black_box($fe_a);
            group.bench_function("invert", |b| b.iter(|| x.invert()));
        }

        fn $name(c: &mut ::criterion::Criterion) {
            let mut group = c.benchmark_group($desc);
            bench_add(&mut group);
            bench_mul(&mut group);
            bench_invert(&mut group);
            group.finish();
        }
    };
}

/// Implement property tests of the field axioms for one modulus.
///
/// The calling crate needs `proptest` among its dev-dependencies.
#[macro_export]
macro_rules! test_field_laws {
    ($modname:ident, $prime:expr) => {
        mod $modname {
            use ::proptest::prelude::*;
            use $crate::FieldElement;

            fn fe(value: i64) -> FieldElement {
                FieldElement::new(value, $prime).unwrap()
            }

            proptest! {
                #[test]
                fn values_are_canonical(a in any::<i64>()) {
                    prop_assert!(fe(a).value() < $prime);
                }

                #[test]
                fn addition_commutes(a in any::<i64>(), b in any::<i64>()) {
                    prop_assert_eq!(fe(a) + fe(b), fe(b) + fe(a));
                }

                #[test]
                fn multiplication_associates(
                    a in any::<i64>(),
                    b in any::<i64>(),
                    c in any::<i64>(),
                ) {
                    prop_assert_eq!((fe(a) * fe(b)) * fe(c), fe(a) * (fe(b) * fe(c)));
                }

                #[test]
                fn distributes(a in any::<i64>(), b in any::<i64>(), c in any::<i64>()) {
                    prop_assert_eq!(fe(a) * (fe(b) + fe(c)), fe(a) * fe(b) + fe(a) * fe(c));
                }

                #[test]
                fn subtraction_undoes_addition(a in any::<i64>(), b in any::<i64>()) {
                    prop_assert_eq!(fe(a) + fe(b) - fe(b), fe(a));
                }

                #[test]
                fn inverse(a in 1..$prime as i64) {
                    prop_assert_eq!(fe(a) * fe(a).invert().unwrap(), fe(1));
                }

                #[test]
                fn fermat(a in 1..$prime as i64) {
                    prop_assert_eq!(fe(a).pow($prime - 1), fe(1));
                }

                #[test]
                fn pow_is_repeated_multiplication(a in any::<i64>(), e in 0u64..40) {
                    let expected = (0..e).fold(fe(1), |acc, _| acc * fe(a));
                    prop_assert_eq!(fe(a).pow(e), expected);
                }
            }
        }
    };
}
