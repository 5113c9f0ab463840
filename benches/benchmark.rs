//! Benchmarks for Enigma machine operations.
//!
//! Measures machine assembly, single-keypress cost and text throughput
//! with and without a full plugboard.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use enigma::{EnigmaMachine, MachineConfig, RotorSpec};

/// Ten plug pairs, as issued on historical key sheets.
const TEN_PAIRS: [(char, char); 10] = [
    ('A', 'Z'),
    ('B', 'X'),
    ('C', 'W'),
    ('D', 'V'),
    ('E', 'U'),
    ('F', 'T'),
    ('G', 'S'),
    ('H', 'R'),
    ('I', 'Q'),
    ('J', 'P'),
];

fn bench_config() -> MachineConfig {
    MachineConfig::with_rotors(vec![
        RotorSpec::new("III", 'G', 'C'),
        RotorSpec::new("IV", 'T', 'H'),
        RotorSpec::new("II", 'N', 'F'),
    ])
    .with_plugboard(&TEN_PAIRS)
}

/// Benchmarks `EnigmaMachine::new()`: catalog lookup, inverse wiring
/// precomputation and plugboard validation.
fn bench_assembly(c: &mut Criterion) {
    let config = bench_config();
    c.bench_function("machine_assembly", |b| {
        b.iter(|| EnigmaMachine::new(black_box(&config)).unwrap());
    });
}

/// Benchmarks a single `press_key()`. Rotor state advances between
/// iterations, so the double-step path is hit periodically.
fn bench_keypress(c: &mut Criterion) {
    let mut machine = EnigmaMachine::new(&bench_config()).unwrap();
    c.bench_function("press_key", |b| {
        b.iter(|| machine.press_key(black_box('E')).unwrap());
    });
}

/// Benchmarks `encrypt()` throughput across message lengths.
fn bench_encrypt_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("encrypt");

    for &len in &[16usize, 256, 4096] {
        let text: String = "THEQUICKBROWNFOXJUMPSOVERTHELAZYDOG"
            .chars()
            .cycle()
            .take(len)
            .collect();
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &text, |b, text| {
            let mut machine = EnigmaMachine::new(&bench_config()).unwrap();
            b.iter(|| machine.encrypt(black_box(text)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_assembly,
    bench_keypress,
    bench_encrypt_throughput,
);
criterion_main!(benches);
