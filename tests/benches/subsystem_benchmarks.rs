//! # Kernel-Care Subsystem Benchmarks
//!
//! | Subsystem | Operation | Shape |
//! |-----------|-----------|-------|
//! | kc-01 Identity Registry | find / create / destroy_all | linear scan, head insert |
//! | kc-02 Shared Buffer | read / write | one copy under the lock |
//! | kc-03 Tick Counter | readout | format plus one copy |

use criterion::{criterion_group, criterion_main, Criterion};
use kc_tests::benchmarks::{kc_01_identity_registry, kc_02_shared_buffer, kc_03_tick_counter};

fn bench_identity_registry(c: &mut Criterion) {
    kc_01_identity_registry::register_benchmarks(c);
}

fn bench_shared_buffer(c: &mut Criterion) {
    kc_02_shared_buffer::register_benchmarks(c);
}

fn bench_tick_counter(c: &mut Criterion) {
    kc_03_tick_counter::register_benchmarks(c);
}

criterion_group!(
    benches,
    bench_identity_registry,
    bench_shared_buffer,
    bench_tick_counter
);
criterion_main!(benches);
