// ABOUTME: Criterion benchmarks for workout sequence generation and simulation
// ABOUTME: Measures perturbation, dataset sampling, model fitting and week simulation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! Criterion benchmarks for the sequence engine.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fitplan::intelligence::{
    seeded_rng, ProfileRanges, SequenceGenerator, SequenceSample, TransitionModel,
};
use fitplan::models::{FitnessLevel, Goal, UserFeatures, WorkoutCatalog};

const PROBABILITY: f64 = 0.1;

fn dataset(count: usize) -> Vec<SequenceSample> {
    let generator = SequenceGenerator::standard(WorkoutCatalog::Base);
    let mut rng = seeded_rng(42);
    generator
        .sample_uniform_dataset(&mut rng, count, &ProfileRanges::default(), PROBABILITY)
        .and_then(Iterator::collect)
        .unwrap_or_default()
}

fn bench_perturb(c: &mut Criterion) {
    let mut group = c.benchmark_group("perturb");

    for catalog in [WorkoutCatalog::Base, WorkoutCatalog::Extended] {
        let generator = SequenceGenerator::standard(catalog);
        let week = generator.base_sequence(FitnessLevel::Intermediate, Goal::WeightLoss);
        group.bench_function(BenchmarkId::new("week", catalog), |b| {
            let mut rng = seeded_rng(7);
            b.iter(|| generator.perturb(black_box(&week), black_box(PROBABILITY), &mut rng));
        });
    }

    group.finish();
}

#[allow(clippy::cast_possible_truncation)]
fn bench_sample_dataset(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_dataset");
    let generator = SequenceGenerator::standard(WorkoutCatalog::Base);
    let ranges = ProfileRanges::default();

    for count in [100_usize, 1_000, 10_000] {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("uniform", count), &count, |b, &count| {
            b.iter(|| {
                let mut rng = seeded_rng(42);
                generator
                    .sample_uniform_dataset(&mut rng, count, &ranges, PROBABILITY)
                    .map(Iterator::count)
            });
        });
    }

    group.finish();
}

#[allow(clippy::cast_possible_truncation)]
fn bench_transition_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("transition_model");

    for count in [1_000_usize, 10_000] {
        let samples = dataset(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("fit", count), &samples, |b, samples| {
            b.iter(|| TransitionModel::fit(black_box(samples), WorkoutCatalog::Base, 1.0));
        });
    }

    group.finish();
}

fn bench_simulate_week(c: &mut Criterion) {
    let generator = SequenceGenerator::standard(WorkoutCatalog::Base);
    let Ok(model) = TransitionModel::fit(&dataset(5_000), WorkoutCatalog::Base, 1.0) else {
        return;
    };
    let features = UserFeatures::new(35, FitnessLevel::Advanced, Goal::GeneralFitness);

    c.bench_function("simulate_week", |b| {
        b.iter(|| {
            generator.simulate_week(
                black_box(FitnessLevel::Advanced),
                black_box(Goal::GeneralFitness),
                &features,
                &model,
            )
        });
    });
}

criterion_group!(
    benches,
    bench_perturb,
    bench_sample_dataset,
    bench_transition_fit,
    bench_simulate_week,
);
criterion_main!(benches);
