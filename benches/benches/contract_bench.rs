//! # Contract Benchmarks
//!
//! Measures JSON validation and rendering overhead around the engine.
//!
//! Run: `cargo bench --bench contract_bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::json;

/// Benchmark the compute contract
fn bench_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute");

    let body = json!({
        "gate": "H",
        "state": { "alpha": { "real": 1.0, "imag": 0.0 }, "beta": { "real": 0.0, "imag": 0.0 } }
    });
    let text = body.to_string();
    let invalid = json!({ "gate": "CNOT", "state": body["state"] }).to_string();

    group.bench_function("handler_value", |b| {
        b.iter(|| black_box(qubit_api::compute_handler(black_box(&body))))
    });

    group.bench_function("json_text", |b| {
        b.iter(|| black_box(qubit_api::compute_json(black_box(&text))))
    });

    group.bench_function("json_text_invalid_gate", |b| {
        b.iter(|| black_box(qubit_api::compute_json(black_box(&invalid))))
    });

    group.finish();
}

/// Benchmark the describe contract
fn bench_describe(c: &mut Criterion) {
    c.bench_function("describe_json", |b| b.iter(|| black_box(qubit_api::describe_json())));
}

criterion_group!(benches, bench_compute, bench_describe);
criterion_main!(benches);
