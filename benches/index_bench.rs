//! Benchmarks for the zipserve dataset loader and city index
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use zipserve::dataset::{Zip, ZipLoader};
use zipserve::index::CityIndex;

fn create_test_zips(count: usize) -> Vec<Zip> {
    (0..count)
        .map(|i| {
            Zip::new(
                format!("{:05}", i),
                format!("City {}", i % 500),
                "WA",
            )
        })
        .collect()
}

fn create_test_csv(count: usize) -> String {
    let mut csv = String::from("zip,type,decommissioned,primary_city,a,b,state\n");
    for i in 0..count {
        csv.push_str(&format!("{:05},STANDARD,0,City {},,,WA\n", i, i % 500));
    }
    csv
}

fn bench_loader(c: &mut Criterion) {
    let mut group = c.benchmark_group("loader");

    for size in [1_000, 10_000, 43_000] {
        let csv = create_test_csv(size);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(format!("load_{}", size), |b| {
            let loader = ZipLoader::new().with_expected_records(size);
            b.iter(|| loader.load_from_reader(black_box(csv.as_bytes())).unwrap())
        });
    }

    group.finish();
}

fn bench_index_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_build");

    for size in [1_000, 10_000, 43_000] {
        let zips = create_test_zips(size);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(format!("build_{}", size), |b| {
            b.iter_batched(
                || zips.clone(),
                |zips| CityIndex::build(black_box(zips)),
                criterion::BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");

    let index = CityIndex::build(create_test_zips(43_000));

    group.bench_function("hit", |b| {
        b.iter(|| index.get(black_box("city 42")))
    });

    group.bench_function("miss", |b| {
        b.iter(|| index.get(black_box("atlantis")))
    });

    group.finish();
}

criterion_group!(benches, bench_loader, bench_index_build, bench_lookup);
criterion_main!(benches);
