//! Benchmarks for machine and search operations.
//!
//! Measures machine setup, per-keystroke throughput, menu construction,
//! and per-loop plugboard derivation — the inner loops of the brute-force
//! scans.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use enigmacrypt::analysis::{Bombe, TrialSetup};
use enigmacrypt::{Enigma, EnigmaConfig, Plugboard, ReflectorId, RotorId};

/// Daily key used consistently across all benchmarks.
fn bench_config() -> EnigmaConfig {
    EnigmaConfig::from_letters(
        &[RotorId::I, RotorId::II, RotorId::III],
        "AAA",
        "ZZZ",
        ReflectorId::UkwB,
        Plugboard::new(&[('D', 'W'), ('A', 'O'), ('Q', 'T')]).unwrap(),
    )
    .unwrap()
}

/// Benchmarks machine construction from a validated configuration.
fn bench_machine_setup(c: &mut Criterion) {
    let config = bench_config();
    c.bench_function("machine_setup", |b| {
        b.iter(|| Enigma::new(black_box(&config)));
    });
}

/// Benchmarks keystroke throughput with state advancing naturally between
/// iterations, reflecting real message traffic.
fn bench_encode(c: &mut Criterion) {
    let config = bench_config();
    let mut machine = Enigma::new(&config);

    let mut group = c.benchmark_group("encode");
    group.throughput(Throughput::Elements(1));
    group.bench_function("single_keystroke", |b| {
        b.iter(|| machine.encode(black_box(0)));
    });
    group.finish();
}

/// Benchmarks whole-message encoding at several message lengths.
fn bench_encode_text(c: &mut Criterion) {
    let config = bench_config();

    let mut group = c.benchmark_group("encode_text");
    for len in [32usize, 256, 2048] {
        let message = "WETTERBERICHT".chars().cycle().take(len).collect::<String>();
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &message, |b, message| {
            let mut machine = Enigma::new(&config);
            b.iter(|| machine.encode_text(black_box(message)).unwrap());
        });
    }
    group.finish();
}

/// Benchmarks menu construction over a crib taken from real traffic.
fn bench_menu_build(c: &mut Criterion) {
    let config = bench_config();
    let word = "A".repeat(26);
    let fragment = Enigma::new(&config).encode_text(&word).unwrap();

    c.bench_function("menu_build", |b| {
        b.iter(|| Bombe::new(black_box(&word), black_box(&fragment)).unwrap());
    });
}

/// Benchmarks one plugboard derivation — the unit of work every scan stage
/// repeats per candidate configuration.
fn bench_derive_plugboard(c: &mut Criterion) {
    let config = bench_config();
    let word = "A".repeat(26);
    let fragment = Enigma::new(&config).encode_text(&word).unwrap();
    let bombe = Bombe::new(&word, &fragment).unwrap();
    let setup = TrialSetup::baseline([RotorId::I, RotorId::II, RotorId::III], ReflectorId::UkwB);
    let shortest = bombe.menu().shortest().unwrap().clone();

    c.bench_function("derive_plugboard", |b| {
        b.iter(|| bombe.derive_plugboard(black_box(&shortest), black_box(&setup)));
    });
}

criterion_group!(
    benches,
    bench_machine_setup,
    bench_encode,
    bench_encode_text,
    bench_menu_build,
    bench_derive_plugboard
);
criterion_main!(benches);
