// ABOUTME: Core data models for workout sequencing
// ABOUTME: Re-exports user profile and workout catalog types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

/// Fitness level, goal, user features and plan category
pub mod profile;
/// Workout types, catalogs, codes and week sequences
pub mod workout;

pub use profile::{FitnessLevel, Goal, PlanCategory, UserFeatures};
pub use workout::{WeekSequence, WorkoutCatalog, WorkoutCode, WorkoutType};
