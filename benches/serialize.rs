//! Criterion benchmarks for the JSON writer.
//!
//! Run with:
//!   cargo bench --bench serialize

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use json::config::write_flag;

fn sample_docs() -> Vec<(&'static str, json::Doc)> {
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

    vec![
        ("numbers", json::read(numbers.as_bytes(), 0).unwrap()),
        ("wide_object", json::read(wide_object.as_bytes(), 0).unwrap()),
    ]
}

fn bench_write(c: &mut Criterion) {
    let mut group = c.benchmark_group("write");

    for (name, doc) in sample_docs() {
        let minified_len = json::write(&doc, 0).unwrap().len() as u64;

        group.throughput(Throughput::Bytes(minified_len));
        group.bench_with_input(BenchmarkId::new("minified", name), &doc, |b, doc| {
            b.iter(|| json::write(doc, 0).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("pretty", name), &doc, |b, doc| {
            b.iter(|| json::write(doc, write_flag::PRETTY).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_write);
criterion_main!(benches);
