//! Small prime field benchmarks

use criterion::{criterion_group, criterion_main};
use toyfield::{FieldElement, bench_field};

bench_field!(
    bench_field_element,
    "F_541 field element operations",
    FieldElement::new(123, 541).unwrap(),
    FieldElement::new(-77, 541).unwrap()
);

criterion_group!(benches, bench_field_element);
criterion_main!(benches);
