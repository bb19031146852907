//! # KC-01 Identity Registry Benchmarks
//!
//! Lookups are linear in the number of records and insertion is at the
//! head. Measured across registry sizes to keep both visible.

use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use kc_01_identity_registry::{IdentityRegistry, IdentityRegistryApi, RegistryConfig};

fn filled(size: usize) -> IdentityRegistry {
    let mut registry =
        IdentityRegistry::with_config(RegistryConfig::with_max_identities(size + 1));
    for id in 0..size as i32 {
        registry
            .create("bench", id)
            .expect("budget covers every record");
    }
    registry
}

/// `find` on the oldest record, the worst case for a head-first scan.
pub fn brutal_find_oldest(c: &mut Criterion) {
    let mut group = c.benchmark_group("kc-01-find-oldest");

    for size in [16usize, 256, 4096] {
        let registry = filled(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(registry.find(0)))
        });
    }

    group.finish();
}

/// Create then destroy every record.
pub fn brutal_create_destroy(c: &mut Criterion) {
    let mut group = c.benchmark_group("kc-01-create-destroy");

    for size in [16usize, 256, 1024] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let mut registry = filled(size);
                black_box(registry.destroy_all())
            })
        });
    }

    group.finish();
}

pub fn register_benchmarks(c: &mut Criterion) {
    brutal_find_oldest(c);
    brutal_create_destroy(c);
}
