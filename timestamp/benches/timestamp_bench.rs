//! Benchmarks for timestamp encodings.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use giztoy_timestamp::Timestamp;

fn bench_json(c: &mut Criterion) {
    let mut group = c.benchmark_group("timestamp_json");
    let ts = Timestamp::from_unix(1_705_315_800, 123_000_000);

    group.bench_function("serialize", |b| {
        b.iter(|| serde_json::to_string(black_box(&ts)).unwrap())
    });

    for token in ["1705315800", "1705315800123"] {
        group.bench_with_input(BenchmarkId::new("deserialize", token), token, |b, token| {
            b.iter(|| serde_json::from_str::<Timestamp>(black_box(token)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("from_json", token), token, |b, token| {
            b.iter(|| Timestamp::from_json(black_box(token.as_bytes())).unwrap())
        });
    }

    group.finish();
}

fn bench_binary(c: &mut Criterion) {
    let mut group = c.benchmark_group("timestamp_binary");
    let ts = Timestamp::now();
    let payload = ts.to_blob().unwrap();
    let value = ts.to_bson();

    group.bench_function("to_blob", |b| b.iter(|| black_box(&ts).to_blob().unwrap()));
    group.bench_function("from_blob", |b| {
        b.iter(|| Timestamp::from_blob(black_box(&payload)).unwrap())
    });
    group.bench_function("to_bson", |b| b.iter(|| black_box(&ts).to_bson()));
    group.bench_function("from_bson", |b| {
        b.iter(|| Timestamp::from_bson(black_box(value.clone())).unwrap())
    });

    group.finish();
}

fn bench_xml(c: &mut Criterion) {
    let mut group = c.benchmark_group("timestamp_xml");
    let ts = Timestamp::from_unix(1_705_315_800, 0);
    let doc = "<event><name>boot</name><at>1705315800</at></event>";

    group.bench_function("to_xml", |b| b.iter(|| black_box(&ts).to_xml("at").unwrap()));
    group.bench_function("from_xml", |b| {
        b.iter(|| Timestamp::from_xml(black_box(doc), "at").unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_json, bench_binary, bench_xml);
criterion_main!(benches);
