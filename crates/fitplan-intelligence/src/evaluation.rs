// ABOUTME: Held-out evaluation of next-day predictors with measured accuracy and recall
// ABOUTME: Seeded shuffle-and-split plus per-class support statistics over sequence samples
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use std::collections::BTreeMap;

use fitplan_core::errors::{AppError, AppResult};
use fitplan_core::models::WorkoutCatalog;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use tracing::info;

use crate::dataset::SequenceSample;
use crate::predictor::{argmax, Predictor};

/// Training and held-out partitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetSplit<S> {
    /// Samples to fit on
    pub train: Vec<S>,
    /// Samples to evaluate on
    pub test: Vec<S>,
}

/// Shuffle `samples` with `rng` and move the last `test_fraction` share into
/// the test partition.
///
/// # Errors
///
/// Returns `InvalidArgument` if `test_fraction` is outside `[0, 1]`
pub fn train_test_split<S, R: Rng + ?Sized>(
    mut samples: Vec<S>,
    test_fraction: f64,
    rng: &mut R,
) -> AppResult<DatasetSplit<S>> {
    if !test_fraction.is_finite() || !(0.0..=1.0).contains(&test_fraction) {
        return Err(AppError::invalid_argument(format!(
            "test fraction must be within [0, 1], got {test_fraction}"
        )));
    }
    samples.shuffle(rng);

    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    let test_len = ((samples.len() as f64) * test_fraction).round() as usize;
    let test = samples.split_off(samples.len() - test_len.min(samples.len()));
    Ok(DatasetSplit {
        train: samples,
        test,
    })
}

/// Support and recall for one workout label
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClassMetrics {
    /// Held-out samples carrying this label
    pub support: usize,
    /// Of those, how many were predicted correctly
    pub correct: usize,
    /// `correct / support`
    pub recall: f64,
}

/// Measured predictor quality on held-out samples
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationReport {
    /// Samples evaluated
    pub samples: usize,
    /// Correct arg-max predictions
    pub correct: usize,
    /// `correct / samples`
    pub accuracy: f64,
    /// Mean probability assigned to the chosen code
    pub mean_confidence: f64,
    /// Metrics keyed by workout name, for labels present in the data
    pub per_class: BTreeMap<String, ClassMetrics>,
}

/// Run `predictor` over every sample and compare its arg-max with the label
///
/// # Errors
///
/// - `InvalidArgument` if `samples` is empty
/// - Any error from the predictor or from distribution validation
#[allow(clippy::cast_precision_loss)]
pub fn evaluate<P: Predictor + ?Sized>(
    predictor: &P,
    samples: &[SequenceSample],
    catalog: WorkoutCatalog,
) -> AppResult<EvaluationReport> {
    if samples.is_empty() {
        return Err(AppError::invalid_argument(
            "cannot evaluate a predictor on zero samples",
        ));
    }

    let mut correct = 0_usize;
    let mut confidence_sum = 0.0;
    let mut per_label: BTreeMap<String, (usize, usize)> = BTreeMap::new();

    for sample in samples {
        let distribution = predictor.predict(&sample.history(), &sample.features)?;
        let prediction = argmax(&distribution, catalog)?;
        let hit = prediction.code == sample.label();
        confidence_sum += prediction.confidence;

        let entry = per_label.entry(sample.label().to_string()).or_default();
        entry.0 += 1;
        if hit {
            entry.1 += 1;
            correct += 1;
        }
    }

    let total = samples.len() as f64;
    let per_class = per_label
        .into_iter()
        .map(|(name, (support, hits))| {
            let metrics = ClassMetrics {
                support,
                correct: hits,
                recall: hits as f64 / support as f64,
            };
            (name, metrics)
        })
        .collect();

    let report = EvaluationReport {
        samples: samples.len(),
        correct,
        accuracy: correct as f64 / total,
        mean_confidence: confidence_sum / total,
        per_class,
    };
    info!(
        samples = report.samples,
        accuracy = report.accuracy,
        "predictor evaluated"
    );
    Ok(report)
}
