//! Criterion benchmarks for the JSON reader.
//!
//! Run with:
//!   cargo bench --bench parse

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// A handful of representative documents, biased toward the value kinds
/// the reader spends the most time on (deep arrays, wide objects, long
/// number runs).
fn sample_documents() -> Vec<(&'static str, String)> {
    let mut numbers = String::from("[");
    for i in 0..10_000 {
        if i > 0 {
            numbers.push(',');
        }
        numbers.push_str(&(i as f64 * 1.0001).to_string());
    }
    numbers.push(']');

    let mut wide_object = String::from("{");
    for i in 0..2_000 {
        if i > 0 {
            wide_object.push(',');
        }
        wide_object.push_str(&format!("\"key_{i}\":{i}"));
    }
    wide_object.push('}');

    let mut nested = String::new();
    for _ in 0..500 {
        nested.push('[');
    }
    nested.push_str("\"leaf\"");
    for _ in 0..500 {
        nested.push(']');
    }

    vec![("numbers", numbers), ("wide_object", wide_object), ("deep_array", nested)]
}

fn bench_read(c: &mut Criterion) {
    let mut group = c.benchmark_group("read");

    for (name, doc) in sample_documents() {
        group.throughput(Throughput::Bytes(doc.len() as u64));
        group.bench_with_input(BenchmarkId::new("read", name), &doc, |b, doc| {
            b.iter(|| json::read(doc.as_bytes(), 0).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_read);
criterion_main!(benches);
