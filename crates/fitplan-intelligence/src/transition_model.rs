// ABOUTME: Frequency-based next-day predictor fitted from synthetic sequence samples
// ABOUTME: Laplace-smoothed counts keyed by level, goal and previous day with marginal fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! # Transition Model
//!
//! A deterministic [`Predictor`] that counts how often each label follows a
//! given last history day for every (level, goal) pair. Keys never seen in
//! training fall back to the (level, goal) label counts, then to the global
//! label counts. All distributions are Laplace smoothed with `alpha`.

use std::collections::HashMap;

use fitplan_core::constants::week::HISTORY_DAYS;
use fitplan_core::errors::{AppError, AppResult};
use fitplan_core::models::{FitnessLevel, Goal, UserFeatures, WorkoutCatalog, WorkoutCode};
use tracing::info;

use crate::dataset::SequenceSample;
use crate::predictor::Predictor;

type TransitionKey = (FitnessLevel, Goal, WorkoutCode);

/// Smoothed label counts conditioned on profile and previous day
#[derive(Debug, Clone)]
pub struct TransitionModel {
    catalog: WorkoutCatalog,
    alpha: f64,
    transitions: HashMap<TransitionKey, Vec<u64>>,
    profile_marginals: HashMap<(FitnessLevel, Goal), Vec<u64>>,
    global: Vec<u64>,
    trained_on: usize,
}

impl TransitionModel {
    /// Count label occurrences over `samples`
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `alpha` is negative or not finite, or if a
    /// sample holds codes outside `catalog`
    pub fn fit<'a, I>(samples: I, catalog: WorkoutCatalog, alpha: f64) -> AppResult<Self>
    where
        I: IntoIterator<Item = &'a SequenceSample>,
    {
        if !alpha.is_finite() || alpha < 0.0 {
            return Err(AppError::invalid_argument(format!(
                "smoothing alpha must be finite and non-negative, got {alpha}"
            )));
        }

        let size = usize::from(catalog.size());
        let mut model = Self {
            catalog,
            alpha,
            transitions: HashMap::new(),
            profile_marginals: HashMap::new(),
            global: vec![0; size],
            trained_on: 0,
        };

        for sample in samples {
            if !sample.week.fits(catalog) {
                return Err(AppError::invalid_argument(format!(
                    "sample week [{}] does not fit the {catalog} catalog",
                    sample.week
                )));
            }
            let level = sample.features.level;
            let goal = sample.features.goal;
            let last = sample.history()[HISTORY_DAYS - 1];
            let label = sample.label().index();

            model
                .transitions
                .entry((level, goal, last))
                .or_insert_with(|| vec![0; size])[label] += 1;
            model
                .profile_marginals
                .entry((level, goal))
                .or_insert_with(|| vec![0; size])[label] += 1;
            model.global[label] += 1;
            model.trained_on += 1;
        }

        info!(
            samples = model.trained_on,
            transition_keys = model.transitions.len(),
            alpha,
            "transition model fitted"
        );
        Ok(model)
    }

    /// Number of samples the model was fitted on
    #[must_use]
    pub const fn trained_on(&self) -> usize {
        self.trained_on
    }

    /// Catalog the model predicts over
    #[must_use]
    pub const fn catalog(&self) -> WorkoutCatalog {
        self.catalog
    }

    fn counts_for(&self, key: TransitionKey) -> &[u64] {
        let (level, goal, _) = key;
        self.transitions
            .get(&key)
            .or_else(|| self.profile_marginals.get(&(level, goal)))
            .map_or(self.global.as_slice(), Vec::as_slice)
    }

    #[allow(clippy::cast_precision_loss)]
    fn smoothed(&self, counts: &[u64]) -> Vec<f64> {
        let total = counts.iter().sum::<u64>() as f64;
        let denominator = self.alpha.mul_add(counts.len() as f64, total);
        if denominator <= 0.0 {
            let uniform = 1.0 / counts.len() as f64;
            return vec![uniform; counts.len()];
        }
        counts
            .iter()
            .map(|count| (*count as f64 + self.alpha) / denominator)
            .collect()
    }
}

impl Predictor for TransitionModel {
    fn predict(
        &self,
        history: &[WorkoutCode; HISTORY_DAYS],
        features: &UserFeatures,
    ) -> AppResult<Vec<f64>> {
        let last = history[HISTORY_DAYS - 1];
        if !self.catalog.contains(last) {
            return Err(AppError::invalid_argument(format!(
                "history day {} is outside the {} catalog",
                last.value(),
                self.catalog
            )));
        }
        let counts = self.counts_for((features.level, features.goal, last));
        Ok(self.smoothed(counts))
    }
}
