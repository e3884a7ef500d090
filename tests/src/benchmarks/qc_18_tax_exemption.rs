//! # QC-18 Tax Exemption Benchmarks
//!
//! Performance Claims to Validate:
//! - Decision cost independent of registry size (two point lookups)
//! - Batch decisions amortize zone loads through the shared cache
//! - Key-continuation paging cost independent of position
//! - Genesis export linear in state size

use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use rand::Rng;
use std::time::Duration;

use qc_18_tax_exemption::{PageRequest, TransferParty};

use crate::fixtures::{indexed_addr, populated_service};

const MEMBERS_PER_ZONE: u32 = 100;

/// Single decisions against registries of growing size.
pub fn bench_decisions(c: &mut Criterion) {
    let mut group = c.benchmark_group("qc-18-decisions");
    group.measurement_time(Duration::from_secs(5));

    for zones in [10u32, 100, 1_000] {
        let service = populated_service(zones, MEMBERS_PER_ZONE);
        let population = zones * MEMBERS_PER_ZONE;

        group.bench_with_input(BenchmarkId::new("evaluate", zones), &zones, |b, _| {
            let mut rng = rand::thread_rng();
            b.iter(|| {
                // Half the parties fall outside every zone
                let from = indexed_addr(rng.gen_range(0..population * 2));
                let to = indexed_addr(rng.gen_range(0..population * 2));
                black_box(service.evaluate(
                    TransferParty::Address(&from),
                    TransferParty::Address(&to),
                ))
            })
        });
    }

    group.finish();
}

/// Batch decisions sharing one zone cache.
pub fn bench_batch_decisions(c: &mut Criterion) {
    let mut group = c.benchmark_group("qc-18-batch-decisions");
    let service = populated_service(50, MEMBERS_PER_ZONE);
    let population = 50 * MEMBERS_PER_ZONE;

    for size in [10usize, 100, 1_000] {
        let mut rng = rand::thread_rng();
        let addresses: Vec<(String, String)> = (0..size)
            .map(|_| {
                (
                    indexed_addr(rng.gen_range(0..population)),
                    indexed_addr(rng.gen_range(0..population)),
                )
            })
            .collect();
        let transfers: Vec<_> = addresses
            .iter()
            .map(|(from, to)| (TransferParty::Address(from), TransferParty::Address(to)))
            .collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("evaluate_batch", size), &size, |b, _| {
            b.iter(|| black_box(service.evaluate_batch(&transfers)))
        });
    }

    group.finish();
}

/// Paging near the start versus near the end of the membership index.
pub fn bench_listing(c: &mut Criterion) {
    let mut group = c.benchmark_group("qc-18-listing");
    let service = populated_service(100, MEMBERS_PER_ZONE);
    let population = 100 * MEMBERS_PER_ZONE;

    for position in [0u32, population / 2, population - 100] {
        let key = hex::decode(&indexed_addr(position)[2..]).unwrap_or_default();
        let request = PageRequest::after(key, 100);
        group.bench_with_input(
            BenchmarkId::new("addresses_after_key", position),
            &request,
            |b, request| b.iter(|| black_box(service.list_addresses("", request).unwrap())),
        );
    }

    group.bench_function("addresses_offset_tail", |b| {
        let request = PageRequest::with_offset(u64::from(population - 100), 100);
        b.iter(|| black_box(service.list_addresses("", &request).unwrap()))
    });

    group.bench_function("zone_filtered_count_total", |b| {
        let request = PageRequest::with_offset(0, 10).counting_total();
        b.iter(|| black_box(service.list_addresses("zone-0050", &request).unwrap()))
    });

    group.finish();
}

/// Full-state export.
pub fn bench_genesis_export(c: &mut Criterion) {
    let mut group = c.benchmark_group("qc-18-genesis");
    group.sample_size(20);

    for zones in [10u32, 100] {
        let service = populated_service(zones, MEMBERS_PER_ZONE);
        group.throughput(Throughput::Elements(u64::from(zones * MEMBERS_PER_ZONE)));
        group.bench_with_input(BenchmarkId::new("export", zones), &zones, |b, _| {
            b.iter(|| black_box(service.export_genesis().unwrap()))
        });
    }

    group.finish();
}

/// Register all QC-18 benchmarks
pub fn register_benchmarks(c: &mut Criterion) {
    bench_decisions(c);
    bench_batch_decisions(c);
    bench_listing(c);
    bench_genesis_export(c);
}
