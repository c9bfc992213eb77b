//! Benchmarks for the cipher engine.
//!
//! Measures engine construction, single keystroke cost, and `process`
//! throughput across message lengths.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use enigma_core::settings::defaults::default_settings;
use enigma_core::CipherEngine;

/// Message lengths (letters) for the scaling group.
const MESSAGE_LENGTHS: &[usize] = &[64, 1024, 16 * 1024];

/// Benchmarks `CipherEngine::new()`: validation plus bank and board build.
fn bench_engine_new(c: &mut Criterion) {
    let key = default_settings();
    c.bench_function("engine_new", |b| {
        b.iter(|| CipherEngine::new(black_box(&key)).unwrap());
    });
}

/// Benchmarks one `press()`: step plus the full signal path.
///
/// The engine is built once and keeps stepping between iterations.
fn bench_press(c: &mut Criterion) {
    let mut engine = CipherEngine::new(&default_settings()).unwrap();

    let mut group = c.benchmark_group("press_single_letter");
    group.throughput(Throughput::Elements(1));
    group.bench_function("default_key", |b| {
        b.iter(|| engine.press(black_box(4)).unwrap());
    });
    group.finish();
}

/// Benchmarks `process()` on a fresh engine across message lengths.
fn bench_process_scaling(c: &mut Criterion) {
    let key = default_settings();

    let mut group = c.benchmark_group("process_scaling");
    for &len in MESSAGE_LENGTHS {
        let text: String = "WETTERVORHERSAGEBISKAYA".chars().cycle().take(len).collect();
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &text, |b, text| {
            b.iter(|| {
                let mut engine = CipherEngine::new(&key).unwrap();
                engine.process(black_box(text))
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_engine_new, bench_press, bench_process_scaling);
criterion_main!(benches);
