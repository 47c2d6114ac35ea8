// ABOUTME: Subcommand implementations for fitplan-cli
// ABOUTME: Shared helpers for JSON output and fitting the transition model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

pub mod base;
pub mod dataset;
pub mod plan;
pub mod simulate;

use std::io::{self, Write};

use anyhow::Result;
use fitplan::errors::AppResult;
use fitplan::intelligence::{
    evaluate, train_test_split, EvaluationReport, GeneratorConfig, SequenceGenerator,
    TransitionModel,
};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::info;

/// Pretty-print `value` as JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

/// A fitted predictor and its held-out evaluation
pub struct TrainedModel {
    pub generator: SequenceGenerator,
    pub model: TransitionModel,
    pub report: EvaluationReport,
}

/// Generate a dataset, split it, fit the transition model on the training
/// part and evaluate it on the rest. All draws come from `rng` in that order.
pub fn train_transition_model(
    config: &GeneratorConfig,
    rng: &mut ChaCha8Rng,
) -> Result<TrainedModel> {
    let generator = SequenceGenerator::standard(config.catalog);
    let samples = generator
        .sample_uniform_dataset(
            rng,
            config.sample_count,
            &config.ranges,
            config.perturbation_probability,
        )?
        .collect::<AppResult<Vec<_>>>()?;

    let split = train_test_split(samples, config.test_fraction, rng)?;
    let model = TransitionModel::fit(&split.train, config.catalog, config.smoothing)?;
    let report = evaluate(&model, &split.test, config.catalog)?;
    info!(
        train = split.train.len(),
        test = split.test.len(),
        accuracy = report.accuracy,
        "transition model trained"
    );

    Ok(TrainedModel {
        generator,
        model,
        report,
    })
}
