//! # KC-03 Tick Counter Benchmarks
//!
//! Every read formats the readout afresh, so the cost of a read is the cost
//! of formatting plus one copy.

use criterion::{black_box, BenchmarkId, Criterion};
use kc_03_tick_counter::{ManualTickSource, TickConfig, TickCounter, MAX_READOUT_LEN};

/// Readout at increasing digit counts.
pub fn brutal_readout(c: &mut Criterion) {
    let mut group = c.benchmark_group("kc-03-readout");

    for ticks in [0u64, 4_294_967_296, u64::MAX] {
        let counter = TickCounter::new(ManualTickSource::new(ticks));
        group.bench_with_input(BenchmarkId::from_parameter(ticks), &counter, |b, counter| {
            let mut dst = [0u8; MAX_READOUT_LEN];
            b.iter(|| {
                let mut pos = 0;
                black_box(counter.read_into(&mut pos, &mut dst))
            })
        });
    }

    group.finish();
}

/// Readout over the monotonic clock.
pub fn brutal_monotonic_readout(c: &mut Criterion) {
    let counter = TickCounter::monotonic(&TickConfig::default()).expect("default config is valid");

    c.bench_function("kc-03-monotonic-readout", |b| {
        b.iter(|| black_box(counter.readout()))
    });
}

pub fn register_benchmarks(c: &mut Criterion) {
    brutal_readout(c);
    brutal_monotonic_readout(c);
}
