//! Key derivation and Fernet benchmarks

use criterion::{Criterion, criterion_group, criterion_main};
use rand_chacha::ChaCha20Rng;
use rand_core::SeedableRng;
use std::hint::black_box;
use toysecret::{KeySchedule, derive_key_with, fernet};

fn bench_derive(c: &mut Criterion) {
    let mut group = c.benchmark_group("key derivation");
    group.bench_function("padded", |b| {
        b.iter(|| derive_key_with(black_box("(6,3)"), KeySchedule::Padded))
    });
    group.bench_function("hkdf-sha256", |b| {
        b.iter(|| derive_key_with(black_box("(6,3)"), KeySchedule::HkdfSha256))
    });
    group.finish();
}

fn bench_fernet(c: &mut Criterion) {
    let key = derive_key_with("(6,3)", KeySchedule::Padded).unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(0);
    let token = fernet::encrypt_with(&key, "meet at noon", 1_700_000_000, &mut rng).unwrap();

    let mut group = c.benchmark_group("fernet");
    group.bench_function("encrypt", |b| {
        b.iter(|| fernet::encrypt_with(&key, black_box("meet at noon"), 1_700_000_000, &mut rng))
    });
    group.bench_function("decrypt", |b| {
        b.iter(|| fernet::decrypt_at(&key, black_box(&token), 1_700_000_000, None))
    });
    group.finish();
}

criterion_group!(benches, bench_derive, bench_fernet);
criterion_main!(benches);
