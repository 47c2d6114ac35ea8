// ABOUTME: Weekly plan assembly combining simulated workouts, exercise routines and diet
// ABOUTME: Exposes the request/response types and the planners behind the plan command
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

/// Calorie targets and meal templates
pub mod diet;

/// Exercise routines per workout type and level
pub mod exercise_library;

/// Request parsing and full plan assembly
pub mod weekly_plan;

pub use diet::{BodyMetrics, DietPlan, DietPlanner, Macronutrients, Meal};
pub use exercise_library::{DayRoutine, ExerciseLibrary, ExerciseRoutine};
pub use weekly_plan::{DayPlan, ModelInfo, PlanRequest, WeeklyPlan, WeeklyPlanner, WorkoutPlan};
