// ABOUTME: Environment-configurable parameters for dataset generation and model evaluation
// ABOUTME: Replaces magic numbers with validated defaults overridable through FITPLAN_* variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use std::env;
use std::str::FromStr;

use fitplan_core::constants::dataset::{
    DEFAULT_PERTURBATION_PROBABILITY, DEFAULT_PROFILE_SAMPLES, DEFAULT_SEED,
    DEFAULT_SEQUENCE_SAMPLES,
};
use fitplan_core::errors::AppError;
use fitplan_core::models::WorkoutCatalog;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dataset::ProfileRanges;

/// Default held-out share for evaluation
pub const DEFAULT_TEST_FRACTION: f64 = 0.2;

/// Default Laplace smoothing for the transition model
pub const DEFAULT_SMOOTHING: f64 = 1.0;

/// Generator configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Environment variable present but unparsable
    #[error("Parse error for {variable}: {value}")]
    Parse {
        /// Variable name
        variable: &'static str,
        /// Raw value
        value: String,
    },

    /// Value outside acceptable range
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config_invalid(error.to_string()).with_source(error)
    }
}

/// Parameters shared by every generation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Seed for the sequential random stream
    pub seed: u64,
    /// Sequence samples per run
    pub sample_count: usize,
    /// Profile samples per run
    pub profile_count: usize,
    /// Per-day substitution probability
    pub perturbation_probability: f64,
    /// Workout catalog codes are drawn from
    pub catalog: WorkoutCatalog,
    /// Held-out share for evaluation
    pub test_fraction: f64,
    /// Laplace alpha for the transition model
    pub smoothing: f64,
    /// Profile sampling ranges
    pub ranges: ProfileRanges,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            sample_count: DEFAULT_SEQUENCE_SAMPLES,
            profile_count: DEFAULT_PROFILE_SAMPLES,
            perturbation_probability: DEFAULT_PERTURBATION_PROBABILITY,
            catalog: WorkoutCatalog::Base,
            test_fraction: DEFAULT_TEST_FRACTION,
            smoothing: DEFAULT_SMOOTHING,
            ranges: ProfileRanges::default(),
        }
    }
}

impl GeneratorConfig {
    /// Defaults overridden by `FITPLAN_*` environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable cannot be parsed or the result fails validation
    pub fn from_environment() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        override_from_env(&mut config.seed, "FITPLAN_SEED")?;
        override_from_env(&mut config.sample_count, "FITPLAN_SAMPLE_COUNT")?;
        override_from_env(&mut config.profile_count, "FITPLAN_PROFILE_COUNT")?;
        override_from_env(
            &mut config.perturbation_probability,
            "FITPLAN_PERTURBATION_PROBABILITY",
        )?;
        override_from_env(&mut config.catalog, "FITPLAN_CATALOG")?;
        override_from_env(&mut config.test_fraction, "FITPLAN_TEST_FRACTION")?;
        override_from_env(&mut config.smoothing, "FITPLAN_SMOOTHING")?;
        override_from_env(&mut config.ranges.min_age, "FITPLAN_MIN_AGE")?;
        override_from_env(&mut config.ranges.max_age, "FITPLAN_MAX_AGE")?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` naming the first invalid field
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !unit_interval(self.perturbation_probability) {
            return Err(ConfigError::ValueOutOfRange(
                "perturbation_probability must be within [0, 1]",
            ));
        }
        if !unit_interval(self.test_fraction) {
            return Err(ConfigError::ValueOutOfRange(
                "test_fraction must be within [0, 1]",
            ));
        }
        if !self.smoothing.is_finite() || self.smoothing < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "smoothing must be finite and non-negative",
            ));
        }
        if self.ranges.validate().is_err() {
            return Err(ConfigError::ValueOutOfRange(
                "profile ranges must be non-empty with min below max",
            ));
        }
        Ok(())
    }
}

fn unit_interval(value: f64) -> bool {
    value.is_finite() && (0.0..=1.0).contains(&value)
}

fn override_from_env<T: FromStr>(slot: &mut T, variable: &'static str) -> Result<(), ConfigError> {
    if let Ok(value) = env::var(variable) {
        *slot = value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Parse { variable, value })?;
    }
    Ok(())
}
