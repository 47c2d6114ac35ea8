// ABOUTME: Main library entry point for the fitplan weekly workout planner
// ABOUTME: Re-exports the sequence engine and adds logging and full plan assembly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

#![deny(unsafe_code)]

//! # Fitplan
//!
//! Rule-based weekly workout sequences, synthetic training data and
//! predictor-driven week simulation.
//!
//! ## Architecture
//!
//! - **`fitplan_core`**: errors, constants, workout and profile models
//! - **`fitplan_intelligence`**: lookup table, perturbation, datasets,
//!   predictors and week simulation
//! - **plans**: exercise routines, diet planning and full weekly plans
//! - **logging**: `tracing` subscriber setup for the binaries
//!
//! ## Example Usage
//!
//! ```rust
//! use fitplan::models::{FitnessLevel, Goal, WorkoutCatalog};
//! use fitplan::intelligence::SequenceGenerator;
//!
//! let generator = SequenceGenerator::standard(WorkoutCatalog::Base);
//! let week = generator.base_sequence(FitnessLevel::Beginner, Goal::WeightLoss);
//! assert_eq!(week.to_raw(), [1, 0, 2, 0, 1, 0, 4]);
//! ```

/// Structured logging configuration
pub mod logging;

/// Weekly plan assembly: exercises, diet and simulated workouts
pub mod plans;

pub use fitplan_core::{constants, errors, models};
pub use fitplan_intelligence as intelligence;
