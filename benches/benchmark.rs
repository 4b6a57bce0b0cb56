//! Benchmarks for enigma96 machine operations.
//!
//! Measures seed keying cost, text transform throughput, and transform
//! throughput scaling across rotor counts.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use enigma96::EnigmaMachine;

/// Seed used consistently across all benchmarks.
const BENCH_SEED: &str = "BenchmarkSeedWithPlentyOfVariety2024!";

/// Builds a 1 KiB plaintext with line breaks and punctuation.
fn sample_text() -> String {
    let paragraph = "The 96-symbol alphabet covers space through tilde, \
                     plus a line break: 0123456789 ~!@#$%^&*()_+\r\n";
    let mut text = String::new();
    while text.len() < 1024 {
        text.push_str(paragraph);
    }
    text.truncate(1024);
    text
}

/// Benchmarks `EnigmaMachine::initialize()` keying time.
///
/// Measures the full keying path: reflector involution generation, per-rotor
/// seed derivation, and rotor permutation generation, for 3 rotors.
fn bench_initialize(c: &mut Criterion) {
    c.bench_function("initialize_3_rotors", |b| {
        let mut machine = EnigmaMachine::new(3).unwrap();
        b.iter(|| {
            machine.initialize(black_box(BENCH_SEED)).unwrap();
        });
    });
}

/// Benchmarks `transform()` throughput with 3 rotors on 1 KiB of text.
///
/// The machine is keyed once and wheel positions advance naturally between
/// iterations, reflecting streaming use.
fn bench_transform(c: &mut Criterion) {
    let mut machine = EnigmaMachine::new(3).unwrap();
    machine.initialize(BENCH_SEED).unwrap();
    let text = sample_text();

    let mut group = c.benchmark_group("transform_1kib");
    group.throughput(Throughput::Bytes(text.len() as u64));

    group.bench_function("3_rotors", |b| {
        b.iter(|| {
            machine.transform(black_box(&text)).unwrap();
        });
    });

    group.finish();
}

/// Benchmarks `transform()` throughput across rotor counts.
///
/// Compares 1, 3, and 8 rotors to show how chain length affects per-symbol
/// cost.
fn bench_transform_rotor_scaling(c: &mut Criterion) {
    let rotor_counts: &[usize] = &[1, 3, 8];
    let text = sample_text();

    let mut group = c.benchmark_group("transform_rotor_scaling");
    group.throughput(Throughput::Bytes(text.len() as u64));

    for &rotor_count in rotor_counts {
        let mut machine = EnigmaMachine::new(rotor_count).unwrap();
        machine.initialize(BENCH_SEED).unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(rotor_count),
            &rotor_count,
            |b, _| {
                b.iter(|| {
                    machine.transform(black_box(&text)).unwrap();
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_initialize,
    bench_transform,
    bench_transform_rotor_scaling,
);
criterion_main!(benches);
