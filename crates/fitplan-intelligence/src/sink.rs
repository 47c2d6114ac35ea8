// ABOUTME: Visitor-style sinks that consume generated samples one at a time
// ABOUTME: Collects into memory or folds summaries without materializing the full dataset
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! # Dataset Sinks
//!
//! Dataset iterators are lazy; a [`DatasetSink`] decides what happens to each
//! sample. `Vec<S>` collects, the summary sinks fold statistics in a single
//! pass, and a tuple of sinks fans every sample out to both.
//!
//! ```rust
//! use fitplan_intelligence::dataset::{uniform_age, uniform_goal, uniform_level};
//! use fitplan_intelligence::random::seeded_rng;
//! use fitplan_intelligence::sink::{drain_into, SequenceDatasetSummary};
//! use fitplan_intelligence::SequenceGenerator;
//! use fitplan_core::models::WorkoutCatalog;
//!
//! let generator = SequenceGenerator::standard(WorkoutCatalog::Base);
//! let mut rng = seeded_rng(42);
//! let samples = generator
//!     .sample_dataset(&mut rng, 100, uniform_level, uniform_goal, uniform_age(18, 65), 0.1)
//!     .unwrap();
//! let mut summary = SequenceDatasetSummary::default();
//! drain_into(samples, &mut summary).unwrap();
//! assert_eq!(summary.total, 100);
//! ```

use std::collections::BTreeMap;

use fitplan_core::errors::AppResult;
use serde::Serialize;
use tracing::{debug, info};

use crate::dataset::{ProfileSample, SequenceSample};
use crate::generator::SequenceGenerator;

/// Receives samples in generation order.
///
/// `start` and `finish` bracket a run; default implementations are no-ops.
pub trait DatasetSink<S> {
    /// Called before the first sample with the most samples the run can produce
    fn start(&mut self, expected: Option<usize>) {
        let _ = expected;
    }

    /// Consume one sample
    ///
    /// # Errors
    ///
    /// Implementations return `DatasetSinkFailed` when the sample cannot be stored
    fn accept(&mut self, sample: S) -> AppResult<()>;

    /// Called after the last sample
    ///
    /// # Errors
    ///
    /// Implementations return `DatasetSinkFailed` when flushing fails
    fn finish(&mut self) -> AppResult<()> {
        Ok(())
    }
}

impl<S> DatasetSink<S> for Vec<S> {
    fn start(&mut self, expected: Option<usize>) {
        if let Some(expected) = expected {
            self.reserve(expected);
        }
    }

    fn accept(&mut self, sample: S) -> AppResult<()> {
        self.push(sample);
        Ok(())
    }
}

impl<S, T: DatasetSink<S> + ?Sized> DatasetSink<S> for &mut T {
    fn start(&mut self, expected: Option<usize>) {
        (**self).start(expected);
    }

    fn accept(&mut self, sample: S) -> AppResult<()> {
        (**self).accept(sample)
    }

    fn finish(&mut self) -> AppResult<()> {
        (**self).finish()
    }
}

impl<S: Clone, A: DatasetSink<S>, B: DatasetSink<S>> DatasetSink<S> for (A, B) {
    fn start(&mut self, expected: Option<usize>) {
        self.0.start(expected);
        self.1.start(expected);
    }

    fn accept(&mut self, sample: S) -> AppResult<()> {
        self.0.accept(sample.clone())?;
        self.1.accept(sample)
    }

    fn finish(&mut self) -> AppResult<()> {
        self.0.finish()?;
        self.1.finish()
    }
}

/// Push every sample from `samples` into `sink`, returning how many were consumed.
///
/// Generation is fallible, so items are `AppResult`s; the first error from
/// either side aborts the run before `finish` is called.
///
/// # Errors
///
/// Propagates the first generation error or sink error
pub fn drain_into<S, I, K>(samples: I, mut sink: K) -> AppResult<usize>
where
    I: IntoIterator<Item = AppResult<S>>,
    K: DatasetSink<S>,
{
    let samples = samples.into_iter();
    sink.start(samples.size_hint().1);

    let mut consumed = 0_usize;
    for sample in samples {
        sink.accept(sample?)?;
        consumed += 1;
    }
    sink.finish()?;

    info!(samples = consumed, "dataset drained into sink");
    Ok(consumed)
}

/// Single-pass statistics over sequence samples
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SequenceDatasetSummary {
    /// Samples seen
    pub total: usize,
    /// Label counts keyed by workout name
    pub label_distribution: BTreeMap<String, usize>,
    /// Sample counts keyed by fitness level
    pub level_counts: BTreeMap<String, usize>,
    /// Sample counts keyed by goal
    pub goal_counts: BTreeMap<String, usize>,
    /// Samples whose week differs from the unperturbed base week
    pub perturbed: usize,
    #[serde(skip)]
    base_lookup: Option<SequenceGenerator>,
}

impl SequenceDatasetSummary {
    /// Summary that also counts samples differing from their base week
    #[must_use]
    pub fn with_generator(generator: SequenceGenerator) -> Self {
        Self {
            base_lookup: Some(generator),
            ..Self::default()
        }
    }
}

impl DatasetSink<SequenceSample> for SequenceDatasetSummary {
    fn accept(&mut self, sample: SequenceSample) -> AppResult<()> {
        self.total += 1;
        *self
            .label_distribution
            .entry(sample.label().to_string())
            .or_default() += 1;
        *self
            .level_counts
            .entry(sample.features.level.display_name().to_owned())
            .or_default() += 1;
        *self
            .goal_counts
            .entry(sample.features.goal.display_name().to_owned())
            .or_default() += 1;
        if let Some(generator) = &self.base_lookup {
            if generator.base_sequence(sample.features.level, sample.features.goal) != sample.week {
                self.perturbed += 1;
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> AppResult<()> {
        debug!(
            total = self.total,
            labels = self.label_distribution.len(),
            "sequence summary complete"
        );
        Ok(())
    }
}

/// Single-pass statistics over profile samples
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProfileDatasetSummary {
    /// Samples seen
    pub total: usize,
    /// Sample counts keyed by plan category label
    pub category_distribution: BTreeMap<String, usize>,
    /// Mean body mass index, `None` before any sample
    pub mean_bmi: Option<f64>,
    #[serde(skip)]
    bmi_sum: f64,
}

impl DatasetSink<ProfileSample> for ProfileDatasetSummary {
    fn accept(&mut self, sample: ProfileSample) -> AppResult<()> {
        self.total += 1;
        *self
            .category_distribution
            .entry(sample.category.label())
            .or_default() += 1;
        self.bmi_sum += sample.bmi;
        Ok(())
    }

    fn finish(&mut self) -> AppResult<()> {
        if self.total > 0 {
            #[allow(clippy::cast_precision_loss)]
            let total = self.total as f64;
            self.mean_bmi = Some(self.bmi_sum / total);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitplan_core::errors::{AppError, ErrorCode};

    struct FailAfter(usize);

    impl DatasetSink<u32> for FailAfter {
        fn accept(&mut self, _sample: u32) -> AppResult<()> {
            if self.0 == 0 {
                return Err(AppError::sink_failed("sink is full"));
            }
            self.0 -= 1;
            Ok(())
        }
    }

    #[test]
    fn test_vec_sink_collects_in_order() {
        let mut collected: Vec<u32> = Vec::new();
        let consumed = drain_into((0..5_u32).map(Ok), &mut collected).unwrap();
        assert_eq!(consumed, 5);
        assert_eq!(collected, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_tuple_sink_fans_out() {
        let mut pair: (Vec<u32>, Vec<u32>) = (Vec::new(), Vec::new());
        drain_into([Ok(7_u32), Ok(8)], &mut pair).unwrap();
        assert_eq!(pair.0, pair.1);
    }

    #[test]
    fn test_sink_failure_stops_draining() {
        let err = drain_into((0..10_u32).map(Ok), FailAfter(3)).err();
        assert_eq!(err.map(|e| e.code), Some(ErrorCode::DatasetSinkFailed));
    }

    #[test]
    fn test_generation_error_skips_finish() {
        let mut collected: Vec<u32> = Vec::new();
        let samples = vec![Ok(1), Err(AppError::internal("random source failed")), Ok(3)];

        let err = drain_into(samples, &mut collected).unwrap_err();
        assert_eq!(err.code, ErrorCode::InternalError);
        assert_eq!(collected, vec![1]);
    }
}
