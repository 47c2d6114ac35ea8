// ABOUTME: Next-day predictor contract and validation of its probability output
// ABOUTME: Any model mapping six days of history plus user features to N probabilities plugs in here
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use fitplan_core::constants::model::DISTRIBUTION_SUM_TOLERANCE;
use fitplan_core::constants::week::HISTORY_DAYS;
use fitplan_core::errors::{AppError, AppResult};
use fitplan_core::models::{UserFeatures, WorkoutCatalog, WorkoutCode};
use serde::Serialize;

/// Maps a six-day history window and user features to a probability
/// distribution over the catalog's workout codes.
///
/// Implementations must be read-only with respect to their inputs; the
/// simulator validates every returned distribution before using it.
pub trait Predictor {
    /// Probability for each code `0..N`
    ///
    /// # Errors
    ///
    /// Implementations return an error when inference fails
    fn predict(
        &self,
        history: &[WorkoutCode; HISTORY_DAYS],
        features: &UserFeatures,
    ) -> AppResult<Vec<f64>>;
}

impl<P: Predictor + ?Sized> Predictor for &P {
    fn predict(
        &self,
        history: &[WorkoutCode; HISTORY_DAYS],
        features: &UserFeatures,
    ) -> AppResult<Vec<f64>> {
        (**self).predict(history, features)
    }
}

impl<P: Predictor + ?Sized> Predictor for Box<P> {
    fn predict(
        &self,
        history: &[WorkoutCode; HISTORY_DAYS],
        features: &UserFeatures,
    ) -> AppResult<Vec<f64>> {
        (**self).predict(history, features)
    }
}

/// A predicted day together with the probability the model assigned to it
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DayPrediction {
    /// Chosen workout code
    pub code: WorkoutCode,
    /// Probability of `code`
    pub confidence: f64,
}

/// Check that `distribution` has one finite, non-negative entry per catalog
/// code and sums to 1 within tolerance.
///
/// # Errors
///
/// Returns `InvalidModelOutput` describing the first violation found
pub fn validate_distribution(distribution: &[f64], catalog: WorkoutCatalog) -> AppResult<()> {
    let expected = usize::from(catalog.size());
    if distribution.len() != expected {
        return Err(AppError::invalid_model_output(format!(
            "expected {expected} probabilities, got {}",
            distribution.len()
        )));
    }
    if let Some((index, value)) = distribution
        .iter()
        .enumerate()
        .find(|(_, value)| !value.is_finite() || **value < 0.0)
    {
        return Err(AppError::invalid_model_output(format!(
            "probability {index} is {value}"
        )));
    }
    let sum: f64 = distribution.iter().sum();
    if (sum - 1.0).abs() > DISTRIBUTION_SUM_TOLERANCE {
        return Err(AppError::invalid_model_output(format!(
            "probabilities sum to {sum}"
        )));
    }
    Ok(())
}

/// Most likely code; the lowest index wins ties
///
/// # Errors
///
/// Returns `InvalidModelOutput` if the distribution is invalid for `catalog`
pub fn argmax(distribution: &[f64], catalog: WorkoutCatalog) -> AppResult<DayPrediction> {
    validate_distribution(distribution, catalog)?;
    let mut best = 0_usize;
    for (index, value) in distribution.iter().enumerate().skip(1) {
        if *value > distribution[best] {
            best = index;
        }
    }
    let raw = u8::try_from(best)
        .map_err(|_| AppError::invalid_model_output(format!("index {best} exceeds any catalog")))?;
    Ok(DayPrediction {
        code: catalog.code(raw)?,
        confidence: distribution[best],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitplan_core::errors::ErrorCode;

    #[test]
    fn test_ties_resolve_to_lowest_code() {
        let distribution = [0.1, 0.3, 0.3, 0.1, 0.1, 0.05, 0.05];
        let prediction = argmax(&distribution, WorkoutCatalog::Base).unwrap();
        assert_eq!(prediction.code.value(), 1);
        assert!((prediction.confidence - 0.3).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rejects_malformed_distributions() {
        let cases: [&[f64]; 4] = [
            &[0.5, 0.5],
            &[0.2, 0.2, 0.2, 0.2, 0.2, 0.2, 0.2],
            &[1.1, -0.1, 0.0, 0.0, 0.0, 0.0, 0.0],
            &[f64::NAN, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0],
        ];
        for case in cases {
            let err = validate_distribution(case, WorkoutCatalog::Base).err();
            assert_eq!(err.map(|e| e.code), Some(ErrorCode::InvalidModelOutput));
        }
    }

    #[test]
    fn test_accepts_small_rounding_error() {
        let distribution = [0.1427, 0.1428, 0.1429, 0.1429, 0.1429, 0.1429, 0.1428];
        assert!(validate_distribution(&distribution, WorkoutCatalog::Base).is_ok());
    }
}
