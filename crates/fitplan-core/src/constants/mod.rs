// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Week shape, catalog sizes, sampling ranges, and model-output tolerances
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Shape of a training week
pub mod week {
    /// Days in a week sequence, Monday first
    pub const DAYS_PER_WEEK: usize = 7;
    /// Days of history fed to a predictor
    pub const HISTORY_DAYS: usize = 6;
    /// Days copied from the base sequence before simulation starts
    pub const SEED_DAYS: usize = 2;
    /// Display names, Monday first
    pub const DAY_NAMES: [&str; DAYS_PER_WEEK] = [
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
        "Sunday",
    ];
}

/// Workout catalog sizes
pub mod catalog {
    /// Workout types in the base model (Rest..Cycling)
    pub const BASE_SIZE: u8 = 7;
    /// Workout types in the extended exercise database (Rest..Sports)
    pub const EXTENDED_SIZE: u8 = 12;
    /// Code reserved for rest days in every catalog
    pub const REST_CODE: u8 = 0;
}

/// Synthetic dataset defaults
pub mod dataset {
    /// Default per-day substitution probability for dataset generation
    pub const DEFAULT_PERTURBATION_PROBABILITY: f64 = 0.10;
    /// Substitution probability used for the noisier evaluation datasets
    pub const ALTERNATE_PERTURBATION_PROBABILITY: f64 = 0.15;
    /// Default seed for reproducible runs
    pub const DEFAULT_SEED: u64 = 42;
    /// Default number of sequence samples per run
    pub const DEFAULT_SEQUENCE_SAMPLES: usize = 10_000;
    /// Default number of profile samples per run
    pub const DEFAULT_PROFILE_SAMPLES: usize = 5_000;
    /// Youngest sampled age (inclusive)
    pub const MIN_AGE: u32 = 18;
    /// Oldest sampled age (exclusive)
    pub const MAX_AGE: u32 = 65;
    /// Lightest sampled weight in kg (inclusive)
    pub const MIN_WEIGHT_KG: f64 = 45.0;
    /// Heaviest sampled weight in kg (exclusive)
    pub const MAX_WEIGHT_KG: f64 = 120.0;
    /// Shortest sampled height in cm (inclusive)
    pub const MIN_HEIGHT_CM: f64 = 150.0;
    /// Tallest sampled height in cm (exclusive)
    pub const MAX_HEIGHT_CM: f64 = 200.0;
}

/// Predictor contract
pub mod model {
    /// Allowed deviation of a distribution's sum from 1.0
    pub const DISTRIBUTION_SUM_TOLERANCE: f64 = 1e-3;
    /// Divisor used to normalise age before it reaches a predictor
    pub const AGE_NORMALIZATION: f64 = 100.0;
    /// Divisor used to normalise level and goal codes
    pub const CODE_NORMALIZATION: f64 = 2.0;
}
