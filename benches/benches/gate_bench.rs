//! # Gate Benchmarks
//!
//! Measures normalization, gate application in both conventions and session replay.
//! Every operation is O(1).
//!
//! Run: `cargo bench --bench gate_bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use qubit_core::*;

/// Benchmark normalization
fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    let drifted = QubitState::new(Complex::new(0.6000001, 0.0), Complex::new(0.0, 0.7999998));
    let zero = QubitState::new(Complex::ZERO, Complex::ZERO);

    group.bench_function("drifted", |b| b.iter(|| black_box(normalize(black_box(drifted)))));

    group.bench_function("zero_vector", |b| b.iter(|| black_box(normalize(black_box(zero)))));

    group.finish();
}

/// Benchmark single gate application per gate and convention
fn bench_apply_gate(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_gate");

    let state = QubitState::from_parts(0.6, 0.1, -0.3, 0.7);

    for convention in [GateConvention::Reference, GateConvention::Standard] {
        for gate in Gate::ALL {
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", convention), gate.symbol()),
                &gate,
                |b, &gate| b.iter(|| black_box(apply_gate_with(black_box(state), gate, convention))),
            );
        }
    }

    group.bench_function("apply_named_unknown", |b| {
        b.iter(|| black_box(apply_named(black_box(state), "CNOT")))
    });

    group.finish();
}

/// Benchmark session replay with history bookkeeping
fn bench_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("session");

    for steps in [10usize, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("replay", steps), &steps, |b, &steps| {
            b.iter(|| {
                let mut session = Session::default();
                for i in 0..steps {
                    session.apply(Gate::ALL[i % Gate::ALL.len()]);
                }
                black_box(session.current())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_normalize, bench_apply_gate, bench_session);
criterion_main!(benches);
