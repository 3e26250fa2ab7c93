//! Benchmarks for shephard reflection group operations.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use shephard::{ColoredPermutations, Group, ReflectionGroup, WordType};

fn bench_group_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("Colored Permutation Operations");

    let w = ColoredPermutations::new(3, 8);
    let a = w.from_word(&[1, 2, 3, 4, 5, 6, 7, 8], WordType::Simple).unwrap();
    let b = w.from_word(&[8, 7, 6, 5, 4, 3, 2, 1], WordType::Simple).unwrap();

    group.bench_function("mul", |bencher| {
        bencher.iter(|| w.mul(black_box(&a), black_box(&b)))
    });

    group.bench_function("inverse", |bencher| bencher.iter(|| black_box(&a).inverse()));

    group.finish();
}

fn bench_word_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("Word Evaluation");

    let w = ColoredPermutations::new(3, 8);
    let word_16: Vec<usize> = (0..16).map(|i| i % 8 + 1).collect();
    let word_256: Vec<usize> = (0..256).map(|i| i % 8 + 1).collect();

    group.bench_function("from_word_16", |bencher| {
        bencher.iter(|| w.from_word(black_box(&word_16), WordType::Simple))
    });

    group.bench_function("from_word_256", |bencher| {
        bencher.iter(|| w.from_word(black_box(&word_256), WordType::Simple))
    });

    group.finish();
}

fn bench_family_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("Family Construction");

    // Fresh group per iteration so the memoized family is rebuilt.
    group.bench_function("reflections_g316", |bencher| {
        bencher.iter(|| ColoredPermutations::new(3, 6).reflections())
    });

    group.bench_function("simple_reflections_g316", |bencher| {
        bencher.iter(|| ColoredPermutations::new(3, 6).simple_reflections())
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_group_operations,
    bench_word_evaluation,
    bench_family_construction
);
criterion_main!(benches);
