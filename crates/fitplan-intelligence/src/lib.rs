// ABOUTME: Workout sequence engine: lookup table, perturbation, datasets, and week simulation
// ABOUTME: Pure synchronous logic with explicitly injected randomness and predictors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

#![deny(unsafe_code)]

//! # Fitplan Intelligence
//!
//! Generates base training weeks from a (fitness level, goal) lookup table,
//! perturbs them into synthetic datasets and simulates weeks day by day with
//! any [`Predictor`].
//!
//! ## Modules
//!
//! - **`sequence_table`**: immutable (level, goal) to base-week mapping
//! - **generator**: base lookup and per-day perturbation
//! - **dataset**: lazy sequence and profile samplers
//! - **sink**: visitor-style consumers of generated samples
//! - **predictor**: predictor trait and distribution validation
//! - **simulation**: iterative week simulation
//! - **`transition_model`**: frequency predictor fitted from samples
//! - **evaluation**: held-out accuracy measurement
//! - **config**: environment-driven generation parameters

/// Environment-configurable generation parameters
pub mod config;

/// Lazy synthetic dataset samplers
pub mod dataset;

/// Held-out predictor evaluation
pub mod evaluation;

/// Base-week lookup and perturbation
pub mod generator;

/// Next-day predictor contract
pub mod predictor;

/// Injectable random source
pub mod random;

/// Immutable (level, goal) lookup table
pub mod sequence_table;

/// Week simulation against a predictor
pub mod simulation;

/// Dataset sinks
pub mod sink;

/// Frequency-based predictor
pub mod transition_model;

pub use config::{ConfigError, GeneratorConfig};
pub use dataset::{ProfileRanges, ProfileSample, SequenceSample};
pub use evaluation::{evaluate, train_test_split, EvaluationReport};
pub use generator::SequenceGenerator;
pub use predictor::{DayPrediction, Predictor};
pub use random::{seeded_rng, RandomSource};
pub use sequence_table::SequenceTable;
pub use simulation::SimulatedWeek;
pub use sink::{drain_into, DatasetSink, ProfileDatasetSummary, SequenceDatasetSummary};
pub use transition_model::TransitionModel;
