// benches/search.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use absence_search::config::options::SearchOptions;
use absence_search::dataset::{Dataset, DistrictRecord};
use absence_search::search;
use absence_search::series::ChartSeries;
use absence_search::years;

// Roughly the size of a statewide district list, times ten.
fn synthetic(n: usize) -> Dataset {
    const WORDS: [&str; 8] = ["Lincoln", "Union", "Valley", "Unified", "County", "Elementary", "High", "Springs"];
    let records = (0..n)
        .map(|i| {
            let name = format!("{} {} {}", WORDS[i % 8], WORDS[(i / 8) % 8], i);
            let values = years::keys().map(|k| (k, format!("{}.{}", i % 40, i % 10)));
            DistrictRecord::with_values(name, values)
        })
        .collect();
    Dataset::from_records(records)
}

fn bench_search(c: &mut Criterion) {
    let ds = synthetic(10_000);
    let opts = SearchOptions::default();

    c.bench_function("suggest_common", |b| {
        b.iter(|| search::suggest(black_box(&ds), black_box("lin"), &opts).len())
    });

    c.bench_function("suggest_miss", |b| {
        b.iter(|| search::suggest(black_box(&ds), black_box("zzz-nonexistent"), &opts).len())
    });

    let rec = &ds.records()[1234];
    c.bench_function("series_for_record", |b| {
        b.iter(|| ChartSeries::for_record(black_box(rec)).present())
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
