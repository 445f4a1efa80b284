//! ISBN validation benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use impress_isbn::validate;

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");

    let inputs = [
        ("isbn10", "0-306-40615-2"),
        ("isbn10_x", "0-8044-2957-X"),
        ("isbn13", "978-3-16-148410-0"),
        ("bad_checksum", "0306406153"),
        ("bad_length", "ISBN: 12345"),
    ];

    for (name, input) in inputs {
        group.bench_with_input(BenchmarkId::from_parameter(name), input, |b, input| {
            b.iter(|| validate(black_box(input)))
        });
    }

    group.finish();
}

fn bench_scanned_batch(c: &mut Criterion) {
    let batch: Vec<String> = (0..1000)
        .map(|i| format!("978-0-{:05}-{:03}-0", i * 7, i % 1000))
        .collect();

    c.bench_function("validate_batch_1000", |b| {
        b.iter(|| {
            batch
                .iter()
                .filter(|raw| validate(black_box(raw)).is_valid())
                .count()
        })
    });
}

criterion_group!(benches, bench_validate, bench_scanned_batch);
criterion_main!(benches);
