//! Benchmarks for the chart computations
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use launch_dash::charts::*;
use launch_dash::dataset::{Dataset, LaunchRecord, LaunchSite, Outcome};

const CATEGORIES: [&str; 5] = ["v1.0", "v1.1", "FT", "B4", "B5"];

fn create_test_dataset(count: usize) -> Dataset {
    let records = (0..count)
        .map(|i| {
            let site = LaunchSite::ALL[i % LaunchSite::ALL.len()];
            let outcome = if i % 3 == 0 {
                Outcome::Failure
            } else {
                Outcome::Success
            };
            let payload = (i * 137 % 10_000) as f64;
            LaunchRecord::new(site, payload, outcome, CATEGORIES[i % CATEGORIES.len()])
                .flight_number(i as u32 + 1)
        })
        .collect();
    Dataset::from_records(records).unwrap()
}

fn bench_pie(c: &mut Criterion) {
    let mut group = c.benchmark_group("pie");

    for size in [100, 1000, 10000] {
        let dataset = create_test_dataset(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("all_sites_{}", size), |b| {
            b.iter(|| pie_chart(black_box(&dataset), black_box(&SiteSelection::All)))
        });

        let ksc = SiteSelection::Site(LaunchSite::KscLc39a);
        group.bench_function(format!("single_site_{}", size), |b| {
            b.iter(|| pie_chart(black_box(&dataset), black_box(&ksc)))
        });
    }

    group.finish();
}

fn bench_scatter(c: &mut Criterion) {
    let mut group = c.benchmark_group("scatter");
    let range = PayloadRange::new(2_000.0, 8_000.0).unwrap();

    for size in [100, 1000, 10000] {
        let dataset = create_test_dataset(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("filter_{}", size), |b| {
            b.iter(|| filter_scatter(black_box(&dataset), &SiteSelection::All, range).len())
        });

        group.bench_function(format!("chart_{}", size), |b| {
            b.iter(|| scatter_chart(black_box(&dataset), &SiteSelection::All, range))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pie, bench_scatter);
criterion_main!(benches);
