//! Benchmarks for edit distance and search

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use termsim_core::{levenshtein, search};

fn bench_levenshtein(c: &mut Criterion) {
    let mut group = c.benchmark_group("levenshtein");

    group.bench_function("short", |b| {
        b.iter(|| levenshtein(black_box("kitten"), black_box("knitting")))
    });

    let long_a = "the quick brown fox jumps over the lazy dog ".repeat(8);
    let long_b = "the quack brown fix jumped over a lazy dog ".repeat(8);
    group.throughput(Throughput::Bytes((long_a.len() + long_b.len()) as u64));
    group.bench_function("long", |b| {
        b.iter(|| levenshtein(black_box(&long_a), black_box(&long_b)))
    });

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let candidates: Vec<String> = (0..1000)
        .map(|i| format!("candidate_{}_{}", i, i % 7))
        .collect();

    let mut group = c.benchmark_group("search");
    group.throughput(Throughput::Elements(candidates.len() as u64));

    group.bench_function("1000_candidates", |b| {
        b.iter(|| search(black_box("candidate_42_0"), black_box(&candidates), 0.5))
    });

    group.finish();
}

criterion_group!(benches, bench_levenshtein, bench_search);
criterion_main!(benches);
