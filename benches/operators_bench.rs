//! Criterion benchmarks for the genetic operators.
//!
//! Measures pure operator overhead on synthetic chromosomes, independent of
//! any fitness evaluation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use passevolve::chromosome::Chromosome;
use passevolve::ops::{
    gene_addition, gene_deletion, gene_randomisation, random_point_crossover, OperatorConfig,
};
use passevolve::random::create_rng;

fn bench_mutations(c: &mut Criterion) {
    let mut group = c.benchmark_group("mutation");

    for &len in &[10usize, 100, 1000] {
        let input = Chromosome::sample(&mut create_rng(0), len);

        let randomisation = gene_randomisation(0.1).unwrap();
        group.bench_with_input(BenchmarkId::new("randomisation", len), &input, |b, input| {
            let mut rng = create_rng(42);
            b.iter(|| black_box(randomisation.apply(black_box(input), &mut rng)))
        });

        let deletion = gene_deletion(0.1).unwrap();
        group.bench_with_input(BenchmarkId::new("deletion", len), &input, |b, input| {
            let mut rng = create_rng(42);
            b.iter(|| black_box(deletion.apply(black_box(input), &mut rng)))
        });

        let addition = gene_addition(0.1).unwrap();
        group.bench_with_input(BenchmarkId::new("addition", len), &input, |b, input| {
            let mut rng = create_rng(42);
            b.iter(|| black_box(addition.apply(black_box(input), &mut rng)))
        });
    }
    group.finish();
}

fn bench_composed_mutation(c: &mut Criterion) {
    let mut group = c.benchmark_group("composed_mutation");
    let mutation = OperatorConfig::default().build_mutation().unwrap();

    for &len in &[10usize, 100, 1000] {
        let input = Chromosome::sample(&mut create_rng(0), len);
        group.bench_with_input(BenchmarkId::from_parameter(len), &input, |b, input| {
            let mut rng = create_rng(42);
            b.iter(|| black_box(mutation.apply(black_box(input), &mut rng)))
        });
    }
    group.finish();
}

fn bench_crossover(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_point_crossover");
    let crossover = random_point_crossover();

    for &len in &[10usize, 100, 1000] {
        let a = Chromosome::sample(&mut create_rng(0), len);
        let b_parent = Chromosome::sample(&mut create_rng(1), len);
        group.bench_with_input(BenchmarkId::from_parameter(len), &(a, b_parent), |b, (x, y)| {
            let mut rng = create_rng(42);
            b.iter(|| black_box(crossover.apply(black_box(x), black_box(y), &mut rng)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_mutations, bench_composed_mutation, bench_crossover);
criterion_main!(benches);
