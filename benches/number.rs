//! Criterion benchmarks for standalone number reading/writing.
//!
//! Run with:
//!   cargo bench --bench number

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

fn sample_numbers() -> Vec<(&'static str, &'static str)> {
    vec![
        ("small_int", "42"),
        ("big_int", "123456789012345678"),
        ("simple_real", "3.14159"),
        ("exponent", "6.022140857e23"),
        ("near_overflow", "1.7976931348623157e308"),
    ]
}

fn bench_read_number(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_number");
    for (name, text) in sample_numbers() {
        group.bench_with_input(BenchmarkId::new("read_number", name), text, |b, text| {
            b.iter(|| json::read_number(text.as_bytes(), 0).unwrap())
        });
    }
    group.finish();
}

fn bench_write_f64(c: &mut Criterion) {
    let mut group = c.benchmark_group("write_f64");
    #[allow(clippy::approx_constant)]
    let values = [0.1f64, 3.14159, 6.02214085774e23, 1.7976931348623157e308];
    for value in values {
        group.bench_with_input(BenchmarkId::new("format_f64", value.to_string()), &value, |b, &value| {
            b.iter(|| json::number::format_f64(value, 0).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_read_number, bench_write_f64);
criterion_main!(benches);
