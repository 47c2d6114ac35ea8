// ABOUTME: Assembles a full weekly plan from a user request, a predictor, exercises and diet
// ABOUTME: Parses request text, simulates the week, and attaches measured model accuracy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use chrono::{DateTime, Utc};
use fitplan_core::constants::week::DAY_NAMES;
use fitplan_core::errors::AppResult;
use fitplan_core::models::{FitnessLevel, Goal, UserFeatures, WorkoutType};
use fitplan_intelligence::random::RandomSource;
use fitplan_intelligence::{EvaluationReport, Predictor, SequenceGenerator};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::diet::{parse_allergies, BodyMetrics, DietPlan, DietPlanner};
use super::exercise_library::{ExerciseLibrary, ExerciseRoutine};

fn default_age() -> u32 {
    25
}

fn default_weight() -> f64 {
    70.0
}

fn default_height() -> f64 {
    170.0
}

fn default_level() -> String {
    "beginner".into()
}

fn default_goals() -> String {
    "improve fitness".into()
}

/// Plan request as submitted by a client form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    /// Age in years
    #[serde(default = "default_age")]
    pub age: u32,
    /// Weight in kg
    #[serde(default = "default_weight")]
    pub weight: f64,
    /// Height in cm
    #[serde(default = "default_height")]
    pub height: f64,
    /// "beginner", "intermediate" or "advanced"
    #[serde(default = "default_level")]
    pub fitness_level: String,
    /// Free-text goal description
    #[serde(default = "default_goals")]
    pub fitness_goals: String,
    /// Comma-separated allergies
    #[serde(default)]
    pub allergies: String,
}

impl Default for PlanRequest {
    fn default() -> Self {
        Self {
            age: default_age(),
            weight: default_weight(),
            height: default_height(),
            fitness_level: default_level(),
            fitness_goals: default_goals(),
            allergies: String::new(),
        }
    }
}

impl PlanRequest {
    /// Parsed fitness level
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for unrecognised level text
    pub fn level(&self) -> AppResult<FitnessLevel> {
        self.fitness_level.parse()
    }

    /// Goal classified from the free-text description
    #[must_use]
    pub fn goal(&self) -> Goal {
        Goal::from_free_text(&self.fitness_goals)
    }

    /// Body measurements for diet planning
    #[must_use]
    pub const fn body(&self) -> BodyMetrics {
        BodyMetrics {
            age: self.age,
            weight_kg: self.weight,
            height_cm: self.height,
        }
    }
}

/// Predictor identity reported alongside a plan
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelInfo {
    /// Model name
    pub name: String,
    /// Model version
    pub version: String,
    /// Held-out accuracy in `[0, 1]`, `None` when never evaluated
    pub accuracy: Option<f64>,
    /// Held-out samples behind `accuracy`
    pub evaluated_on: Option<usize>,
}

impl ModelInfo {
    /// Model that has not been evaluated
    #[must_use]
    pub fn unevaluated(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            accuracy: None,
            evaluated_on: None,
        }
    }

    /// Attach a measured evaluation
    #[must_use]
    pub fn with_evaluation(mut self, report: &EvaluationReport) -> Self {
        self.accuracy = Some(report.accuracy);
        self.evaluated_on = Some(report.samples);
        self
    }
}

/// One day of a weekly plan
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    /// Weekday name
    pub day: &'static str,
    /// Workout type for the day
    pub workout: WorkoutType,
    /// Heading for the day
    pub title: &'static str,
    /// Exercises to perform
    pub routines: &'static [ExerciseRoutine],
    /// Target session length, `None` on rest days
    pub duration_minutes: Option<u16>,
    /// Predictor confidence; `None` for the two seeded days
    pub confidence: Option<f64>,
}

/// Workout half of a weekly plan
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlan {
    /// Weekday names, Monday first
    pub schedule: Vec<&'static str>,
    /// Exercises per day
    pub days: Vec<DayPlan>,
    /// Which model produced the sequence
    pub generated_by: String,
}

/// Complete response for a plan request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyPlan {
    /// Parsed fitness level
    pub level: FitnessLevel,
    /// Classified goal
    pub goal: Goal,
    /// Seven days of workouts
    pub workout_plan: WorkoutPlan,
    /// Daily eating guidance
    pub diet_plan: DietPlan,
    /// Creation time
    pub generated_at: DateTime<Utc>,
    /// Predictor identity and measured accuracy
    pub model_info: ModelInfo,
}

/// Turns plan requests into weekly plans with a fixed predictor
pub struct WeeklyPlanner<P> {
    generator: SequenceGenerator,
    predictor: P,
    library: ExerciseLibrary,
    diet: DietPlanner,
    model_info: ModelInfo,
}

impl<P: Predictor> WeeklyPlanner<P> {
    /// Planner over `generator`'s catalog
    #[must_use]
    pub fn new(generator: SequenceGenerator, predictor: P, model_info: ModelInfo) -> Self {
        let library = ExerciseLibrary::new(generator.catalog());
        Self {
            generator,
            predictor,
            library,
            diet: DietPlanner,
            model_info,
        }
    }

    /// Reported model identity
    #[must_use]
    pub const fn model_info(&self) -> &ModelInfo {
        &self.model_info
    }

    /// Build a plan; meal choices draw from `rng`
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` for unknown level text, out-of-range body metrics or
    ///   allergies excluding every meal option
    /// - Any simulation error, which aborts the whole plan
    pub fn plan<R: RandomSource + ?Sized>(
        &self,
        request: &PlanRequest,
        rng: &mut R,
    ) -> AppResult<WeeklyPlan> {
        let level = request.level()?;
        let goal = request.goal();
        let body = request.body();
        body.validate()?;

        let features = UserFeatures::new(request.age, level, goal);
        let simulated =
            self.generator
                .simulate_week_detailed(level, goal, &features, &self.predictor)?;

        let seeded_days = simulated.week.days().len() - simulated.predictions.len();
        let mut days = Vec::with_capacity(DAY_NAMES.len());
        for (index, (day, code)) in DAY_NAMES.into_iter().zip(simulated.week.iter()).enumerate() {
            let routine = self.library.day_routine(code, level)?;
            let confidence = index
                .checked_sub(seeded_days)
                .and_then(|predicted| simulated.predictions.get(predicted))
                .map(|prediction| prediction.confidence);
            days.push(DayPlan {
                day,
                workout: routine.workout,
                title: routine.title,
                routines: routine.routines,
                duration_minutes: routine.duration_minutes,
                confidence,
            });
        }

        let allergies = parse_allergies(&request.allergies);
        let diet_plan = self.diet.plan(&body, level, goal, &allergies, rng)?;

        info!(
            level = %level,
            goal = %goal,
            week = %simulated.week,
            "weekly plan generated"
        );

        Ok(WeeklyPlan {
            level,
            goal,
            workout_plan: WorkoutPlan {
                schedule: DAY_NAMES.to_vec(),
                days,
                generated_by: self.model_info.name.clone(),
            },
            diet_plan,
            generated_at: Utc::now(),
            model_info: self.model_info.clone(),
        })
    }
}
