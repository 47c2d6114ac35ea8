// ABOUTME: Iterative week simulation driven by an injected next-day predictor
// ABOUTME: Seeds two base days, then fills the week from a left-padded six-day window
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! # Week Simulation
//!
//! A week is built day by day: the first [`SEED_DAYS`] come from the base
//! sequence and each later day is the arg-max of the predictor's output for
//! the six most recent days. Windows shorter than six days are left-padded
//! with rest. Each day depends on all earlier ones, so the loop is strictly
//! sequential; the first failing prediction aborts the whole week.

use fitplan_core::constants::week::{DAYS_PER_WEEK, HISTORY_DAYS, SEED_DAYS};
use fitplan_core::errors::{AppError, AppResult, ErrorCode};
use fitplan_core::models::{FitnessLevel, Goal, UserFeatures, WeekSequence, WorkoutCode};
use serde::Serialize;
use tracing::debug;

use crate::generator::SequenceGenerator;
use crate::predictor::{argmax, DayPrediction, Predictor};

/// A simulated week with the prediction behind each generated day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulatedWeek {
    /// Seven days, Monday first
    pub week: WeekSequence,
    /// Predictions for days 3-7, in order
    pub predictions: Vec<DayPrediction>,
}

impl SimulatedWeek {
    /// Mean confidence over the predicted days
    #[must_use]
    pub fn mean_confidence(&self) -> f64 {
        if self.predictions.is_empty() {
            return 0.0;
        }
        let total: f64 = self.predictions.iter().map(|p| p.confidence).sum();
        #[allow(clippy::cast_precision_loss)]
        let count = self.predictions.len() as f64;
        total / count
    }
}

/// Most recent `HISTORY_DAYS` entries of `days`, left-padded with rest
#[must_use]
pub fn recent_window(days: &[WorkoutCode]) -> [WorkoutCode; HISTORY_DAYS] {
    let mut window = [WorkoutCode::REST; HISTORY_DAYS];
    let take = days.len().min(HISTORY_DAYS);
    window[HISTORY_DAYS - take..].copy_from_slice(&days[days.len() - take..]);
    window
}

impl SequenceGenerator {
    /// Predict one day from six prior days
    ///
    /// # Errors
    ///
    /// - `PredictorFailed` if the predictor itself errors
    /// - `InvalidModelOutput` if its distribution is malformed
    pub fn simulate_next_day<P: Predictor + ?Sized>(
        &self,
        past_six_days: &[WorkoutCode; HISTORY_DAYS],
        features: &UserFeatures,
        predictor: &P,
    ) -> AppResult<DayPrediction> {
        let distribution = predictor
            .predict(past_six_days, features)
            .map_err(wrap_predictor_error)?;
        argmax(&distribution, self.catalog())
    }

    /// Build a full week from the base sequence's first two days
    ///
    /// # Errors
    ///
    /// Propagates the first prediction failure; no partial week is returned
    pub fn simulate_week<P: Predictor + ?Sized>(
        &self,
        level: FitnessLevel,
        goal: Goal,
        features: &UserFeatures,
        predictor: &P,
    ) -> AppResult<WeekSequence> {
        Ok(self.simulate_week_detailed(level, goal, features, predictor)?.week)
    }

    /// Like [`Self::simulate_week`], also returning each day's prediction
    ///
    /// # Errors
    ///
    /// Propagates the first prediction failure; no partial week is returned
    pub fn simulate_week_detailed<P: Predictor + ?Sized>(
        &self,
        level: FitnessLevel,
        goal: Goal,
        features: &UserFeatures,
        predictor: &P,
    ) -> AppResult<SimulatedWeek> {
        let base = self.base_sequence(level, goal);
        let mut days: Vec<WorkoutCode> = Vec::with_capacity(DAYS_PER_WEEK);
        days.extend_from_slice(&base.days()[..SEED_DAYS]);

        let mut predictions = Vec::with_capacity(DAYS_PER_WEEK - SEED_DAYS);
        while days.len() < DAYS_PER_WEEK {
            let window = recent_window(&days);
            let prediction = self.simulate_next_day(&window, features, predictor)?;
            debug!(
                day = days.len() + 1,
                workout = %prediction.code,
                confidence = prediction.confidence,
                "simulated day"
            );
            days.push(prediction.code);
            predictions.push(prediction);
        }

        Ok(SimulatedWeek {
            week: WeekSequence::try_from(days)?,
            predictions,
        })
    }
}

fn wrap_predictor_error(error: AppError) -> AppError {
    if error.code == ErrorCode::PredictorFailed {
        return error;
    }
    let message = format!("predictor failed: {}", error.message);
    AppError::predictor_failed(message).with_source(error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitplan_core::models::WorkoutCatalog;

    #[test]
    fn test_window_is_left_padded_with_rest() {
        let days = [WorkoutCode::from_workout(fitplan_core::models::WorkoutType::Cardio); 2];
        let window = recent_window(&days);
        assert_eq!(window.map(WorkoutCode::value), [0, 0, 0, 0, 1, 1]);
    }

    #[test]
    fn test_window_keeps_most_recent_days() {
        let days = WeekSequence::from_raw([1, 2, 3, 4, 5, 6, 0], WorkoutCatalog::Base).unwrap();
        let window = recent_window(days.days());
        assert_eq!(window.map(WorkoutCode::value), [2, 3, 4, 5, 6, 0]);
    }

    #[test]
    fn test_predictor_errors_become_predictor_failed() {
        struct Broken;
        impl Predictor for Broken {
            fn predict(
                &self,
                _history: &[WorkoutCode; HISTORY_DAYS],
                _features: &UserFeatures,
            ) -> AppResult<Vec<f64>> {
                Err(AppError::internal("model not loaded"))
            }
        }

        let generator = SequenceGenerator::standard(WorkoutCatalog::Base);
        let features = UserFeatures::new(30, FitnessLevel::Beginner, Goal::WeightLoss);
        let err = generator
            .simulate_week(FitnessLevel::Beginner, Goal::WeightLoss, &features, &Broken)
            .err();
        assert_eq!(err.map(|e| e.code), Some(ErrorCode::PredictorFailed));
    }
}
