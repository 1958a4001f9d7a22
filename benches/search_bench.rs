//! Performance benchmarks: bounded matcher vs naive accumulation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use intstrings::{BoundedMatcher, NaiveMatcher, Pattern};

/// Shallow match (position 223): both matchers are cheap here, the point is
/// the relative overhead of compaction vs accumulation.
fn bench_shallow_match(c: &mut Criterion) {
    let mut group = c.benchmark_group("shallow_11111");

    group.bench_function("bounded", |b| {
        b.iter(|| {
            let pattern = Pattern::new("11111").unwrap();
            BoundedMatcher::new(black_box(1), pattern)
                .unwrap()
                .search()
                .unwrap()
        });
    });

    group.bench_function("naive", |b| {
        b.iter(|| {
            let pattern = Pattern::new("11111").unwrap();
            NaiveMatcher::new(black_box(1), pattern)
                .unwrap()
                .search()
                .unwrap()
        });
    });

    group.finish();
}

/// Deeper match (tens of thousands of digits in): the naive matcher's
/// rescans make it quadratic at this depth, so only the bounded matcher is
/// measured.
fn bench_deeper_match(c: &mut Criterion) {
    c.bench_function("bounded_78787", |b| {
        b.iter(|| {
            let pattern = Pattern::new("78787").unwrap();
            BoundedMatcher::new(black_box(1), pattern)
                .unwrap()
                .search()
                .unwrap()
        });
    });
}

criterion_group!(benches, bench_shallow_match, bench_deeper_match);
criterion_main!(benches);
