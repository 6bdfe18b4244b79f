//! Benchmarks for Enigma machine operations.
//!
//! Measures machine construction, single-keystroke throughput and message
//! throughput across plugboard loads.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use enigma::Enigma;

/// Rotor order used consistently across all benchmarks.
const BENCH_ORDER: [&str; 3] = ["II", "V", "I"];

/// Six cables, the board's full load.
const BENCH_PLUGS: [&str; 6] = ["QW", "ER", "TZ", "UI", "OP", "AS"];

/// Benchmarks `Enigma::with_config()` including plugboard parsing.
fn bench_construct(c: &mut Criterion) {
    c.bench_function("construct", |b| {
        b.iter(|| Enigma::with_config(black_box("MCK"), &BENCH_PLUGS, &BENCH_ORDER).unwrap());
    });
}

/// Benchmarks one `encode_decode_letter()` keystroke.
///
/// The machine is built once and its rotors keep advancing between
/// iterations, as on a real keyboard.
fn bench_keystroke(c: &mut Criterion) {
    let mut machine = Enigma::with_config("MCK", &BENCH_PLUGS, &BENCH_ORDER).unwrap();

    let mut group = c.benchmark_group("keystroke");
    group.throughput(Throughput::Elements(1));
    group.bench_function("fully_plugged", |b| {
        b.iter(|| machine.encode_decode_letter(black_box('E')).unwrap());
    });
    group.finish();
}

/// Benchmarks `encipher()` on a 1 KiB message with 0, 3 and 6 cables.
fn bench_encipher_plug_load(c: &mut Criterion) {
    let message = "THEQUICKBROWNFOXJUMPSOVERTHELAZYDOG".repeat(30);
    let message = &message[..1024];

    let mut group = c.benchmark_group("encipher_1k");
    group.throughput(Throughput::Bytes(message.len() as u64));

    for plugs in [0usize, 3, 6] {
        group.bench_with_input(BenchmarkId::from_parameter(plugs), &plugs, |b, &plugs| {
            let mut machine =
                Enigma::with_config("MCK", &BENCH_PLUGS[..plugs], &BENCH_ORDER).unwrap();
            b.iter(|| {
                machine.reset();
                machine.encipher(black_box(message)).unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_construct,
    bench_keystroke,
    bench_encipher_plug_load,
);
criterion_main!(benches);
