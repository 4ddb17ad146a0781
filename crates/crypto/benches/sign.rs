//! Benchmarks for canonicalization and signing.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use paysig_crypto::{canonicalize, FieldSet, Signer};

const KEY: &str = "44782DEF547AAA06C910C43932B1EB0C71FC68D9D0C057550C48EC2ACF6BA056";

fn generate_fields(count: usize) -> FieldSet {
    (0..count)
        .map(|i| (format!("additionalData.field{i}"), format!("value:{i}\\x")))
        .collect()
}

fn bench_signing(c: &mut Criterion) {
    let signer = Signer::new(KEY).expect("valid key");
    let mut group = c.benchmark_group("signing");

    for count in [6, 32, 256].iter() {
        let fields = generate_fields(*count);

        group.bench_with_input(BenchmarkId::new("canonicalize", count), &fields, |b, fields| {
            b.iter(|| canonicalize(black_box(fields)))
        });

        group.bench_with_input(BenchmarkId::new("sign_fields", count), &fields, |b, fields| {
            b.iter(|| signer.sign_fields(black_box(fields)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_signing);
criterion_main!(benches);
