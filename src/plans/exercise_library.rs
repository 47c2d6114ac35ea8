// ABOUTME: Static exercise routines per workout type and fitness level
// ABOUTME: Turns a predicted workout code into a concrete day of exercises and a target duration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use fitplan_core::errors::{AppError, AppResult};
use fitplan_core::models::{FitnessLevel, WorkoutCatalog, WorkoutCode, WorkoutType};
use serde::Serialize;

/// One exercise with its prescribed volume.
///
/// `reps` is a repetition count for strength work and minutes or seconds for
/// timed work, as in the source routines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExerciseRoutine {
    /// Exercise name
    pub name: &'static str,
    /// Number of sets
    pub sets: u16,
    /// Repetitions or time per set
    pub reps: u16,
}

const fn routine(name: &'static str, sets: u16, reps: u16) -> ExerciseRoutine {
    ExerciseRoutine { name, sets, reps }
}

/// Routines for one workout type, indexed by fitness level code
type LevelRoutines = [&'static [ExerciseRoutine]; 3];

const REST_ROUTINES: &[ExerciseRoutine] = &[
    routine("Light Stretching", 1, 15),
    routine("Walking", 1, 20),
];

const CARDIO: LevelRoutines = [
    &[
        routine("Brisk Walking", 1, 30),
        routine("Jumping Jacks", 3, 20),
        routine("High Knees", 3, 30),
        routine("Cycling", 1, 20),
    ],
    &[
        routine("Running", 1, 30),
        routine("Jump Rope", 5, 60),
        routine("Mountain Climbers", 4, 30),
        routine("Burpees", 4, 15),
    ],
    &[
        routine("Sprint Intervals", 8, 30),
        routine("Box Jumps", 5, 20),
        routine("Battle Ropes", 6, 45),
        routine("Rowing Machine", 5, 10),
    ],
];

const STRENGTH: LevelRoutines = [
    &[
        routine("Bodyweight Squats", 3, 15),
        routine("Push-ups", 3, 10),
        routine("Dumbbell Rows", 3, 12),
        routine("Plank", 3, 30),
    ],
    &[
        routine("Barbell Squats", 4, 10),
        routine("Bench Press", 4, 10),
        routine("Deadlifts", 3, 8),
        routine("Pull-ups", 3, 12),
    ],
    &[
        routine("Heavy Squats", 5, 5),
        routine("Weighted Bench Press", 5, 6),
        routine("Deadlifts (heavy)", 5, 5),
        routine("Weighted Pull-ups", 4, 8),
    ],
];

const HIIT: LevelRoutines = [
    &[
        routine("Burpees", 3, 8),
        routine("Jump Squats", 3, 12),
        routine("High Knees", 3, 30),
        routine("Plank Jacks", 3, 15),
    ],
    &[
        routine("Burpee Box Jumps", 4, 12),
        routine("Kettlebell Swings", 4, 20),
        routine("Thrusters", 4, 15),
        routine("Battle Ropes", 4, 45),
    ],
    &[
        routine("Clean and Jerk", 5, 8),
        routine("Prowler Push", 6, 30),
        routine("Box Jump Overs", 5, 15),
        routine("Assault Bike Sprints", 8, 30),
    ],
];

const YOGA: LevelRoutines = [
    &[
        routine("Sun Salutations", 3, 5),
        routine("Downward Dog", 3, 30),
        routine("Warrior Pose", 3, 30),
        routine("Child's Pose", 3, 60),
    ],
    &[
        routine("Vinyasa Flow", 1, 45),
        routine("Tree Pose", 3, 60),
        routine("Crow Pose", 3, 30),
        routine("Headstand", 3, 30),
    ],
    &[
        routine("Ashtanga Yoga", 1, 60),
        routine("Handstand", 3, 60),
        routine("Scorpion Pose", 3, 30),
        routine("Advanced Flow", 1, 45),
    ],
];

const SWIMMING: LevelRoutines = [
    &[
        routine("Freestyle (easy)", 4, 10),
        routine("Backstroke", 3, 5),
        routine("Water Jogging", 1, 15),
    ],
    &[
        routine("Freestyle Laps", 6, 10),
        routine("Butterfly", 4, 5),
        routine("Interval Training", 8, 2),
    ],
    &[
        routine("Sprint Laps", 10, 5),
        routine("Butterfly (fast)", 6, 5),
        routine("Underwater Training", 5, 3),
    ],
];

const CYCLING: LevelRoutines = [
    &[
        routine("Flat Road Cycling", 1, 30),
        routine("Easy Hills", 3, 10),
        routine("Stationary Bike", 1, 25),
        routine("Leisure Ride", 1, 40),
    ],
    &[
        routine("Hill Intervals", 6, 5),
        routine("Tempo Ride", 1, 45),
        routine("Spin Class", 1, 50),
        routine("Road Cycling", 1, 60),
    ],
    &[
        routine("Sprint Intervals", 10, 3),
        routine("Mountain Climbing", 1, 60),
        routine("Criterium Training", 8, 5),
        routine("Time Trial", 1, 90),
    ],
];

const PILATES: LevelRoutines = [
    &[
        routine("The Hundred", 3, 10),
        routine("Rolling Like a Ball", 3, 12),
        routine("Single Leg Circles", 3, 10),
        routine("Spine Stretch", 3, 8),
        routine("Pelvic Curl", 3, 15),
    ],
    &[
        routine("Criss-Cross", 4, 20),
        routine("Swan Dive", 4, 12),
        routine("Teaser", 3, 10),
        routine("Side Kick Series", 4, 15),
        routine("Shoulder Bridge", 3, 12),
    ],
    &[
        routine("Advanced Teaser", 5, 8),
        routine("Control Balance", 4, 10),
        routine("Jackknife", 4, 12),
        routine("Boomerang", 3, 8),
        routine("Reformer Series", 1, 45),
    ],
];

const CROSSFIT: LevelRoutines = [
    &[
        routine("Air Squats", 4, 15),
        routine("Push-ups", 4, 10),
        routine("Sit-ups", 4, 20),
        routine("Lunges", 3, 12),
        routine("Ring Rows", 3, 10),
    ],
    &[
        routine("Wall Balls", 5, 20),
        routine("Box Jumps", 4, 15),
        routine("Kettlebell Swings", 5, 25),
        routine("Pull-ups", 4, 12),
        routine("Double Unders", 5, 50),
    ],
    &[
        routine("Muscle-ups", 5, 8),
        routine("Snatch", 5, 5),
        routine("Clean and Jerk", 5, 5),
        routine("Handstand Push-ups", 4, 10),
        routine("WOD Fran", 1, 1),
    ],
];

const BOXING: LevelRoutines = [
    &[
        routine("Jab-Cross Combo", 5, 20),
        routine("Shadow Boxing", 3, 3),
        routine("Heavy Bag Work", 4, 2),
        routine("Jump Rope", 3, 3),
        routine("Footwork Drills", 4, 5),
    ],
    &[
        routine("Combination Punches", 6, 3),
        routine("Speed Bag", 5, 3),
        routine("Mitt Work", 5, 3),
        routine("Sparring", 4, 3),
        routine("Core Conditioning", 4, 20),
    ],
    &[
        routine("Advanced Combos", 8, 3),
        routine("Power Bag Work", 6, 3),
        routine("Competitive Sparring", 6, 3),
        routine("Plyometric Drills", 5, 15),
        routine("High-Intensity Rounds", 10, 3),
    ],
];

const DANCING: LevelRoutines = [
    &[
        routine("Basic Zumba", 1, 30),
        routine("Hip Hop Basics", 3, 10),
        routine("Salsa Steps", 4, 15),
        routine("Stretching Routine", 2, 10),
    ],
    &[
        routine("Cardio Dance", 1, 45),
        routine("Ballet Barre", 4, 20),
        routine("Jazz Dance", 3, 15),
        routine("Contemporary Flow", 1, 30),
    ],
    &[
        routine("Advanced Choreography", 1, 60),
        routine("Power Dance", 5, 10),
        routine("Dance HIIT Fusion", 6, 5),
        routine("Performance Training", 1, 90),
    ],
];

const SPORTS: LevelRoutines = [
    &[
        routine("Basketball Shooting", 5, 10),
        routine("Soccer Dribbling", 4, 15),
        routine("Tennis Rally", 3, 20),
        routine("Volleyball Practice", 4, 15),
    ],
    &[
        routine("Basketball Scrimmage", 4, 10),
        routine("Soccer Match Play", 2, 30),
        routine("Tennis Match", 3, 15),
        routine("Badminton Games", 5, 10),
    ],
    &[
        routine("Competitive Basketball", 1, 60),
        routine("Soccer Tournament", 1, 90),
        routine("Tennis Competition", 5, 12),
        routine("Multi-Sport Training", 1, 120),
    ],
];

/// Target session length in minutes, indexed by workout code minus one
/// (rest has no target), then by level code
const DURATIONS_MINUTES: [[u16; 3]; 11] = [
    [30, 45, 60],
    [40, 60, 90],
    [20, 30, 45],
    [45, 60, 75],
    [30, 45, 60],
    [35, 50, 75],
    [40, 50, 60],
    [30, 45, 60],
    [30, 45, 60],
    [35, 50, 60],
    [45, 60, 90],
];

/// A workout code resolved into exercises for one day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayRoutine {
    /// Workout type behind the day
    pub workout: WorkoutType,
    /// Heading shown for the day
    pub title: &'static str,
    /// Exercises to perform
    pub routines: &'static [ExerciseRoutine],
    /// Target session length, `None` on rest days
    pub duration_minutes: Option<u16>,
}

/// Exercise lookup restricted to one workout catalog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExerciseLibrary {
    catalog: WorkoutCatalog,
}

impl ExerciseLibrary {
    /// Library serving codes from `catalog`
    #[must_use]
    pub const fn new(catalog: WorkoutCatalog) -> Self {
        Self { catalog }
    }

    /// Catalog this library serves
    #[must_use]
    pub const fn catalog(&self) -> WorkoutCatalog {
        self.catalog
    }

    /// Exercises for a workout type at a fitness level; rest ignores the level
    #[must_use]
    pub const fn routines(workout: WorkoutType, level: FitnessLevel) -> &'static [ExerciseRoutine] {
        let by_level = match workout {
            WorkoutType::Rest => return REST_ROUTINES,
            WorkoutType::Cardio => &CARDIO,
            WorkoutType::Strength => &STRENGTH,
            WorkoutType::Hiit => &HIIT,
            WorkoutType::Yoga => &YOGA,
            WorkoutType::Swimming => &SWIMMING,
            WorkoutType::Cycling => &CYCLING,
            WorkoutType::Pilates => &PILATES,
            WorkoutType::CrossFit => &CROSSFIT,
            WorkoutType::Boxing => &BOXING,
            WorkoutType::Dancing => &DANCING,
            WorkoutType::Sports => &SPORTS,
        };
        by_level[level.code() as usize]
    }

    /// Target minutes for a session, `None` for rest
    #[must_use]
    pub const fn duration_minutes(workout: WorkoutType, level: FitnessLevel) -> Option<u16> {
        match workout {
            WorkoutType::Rest => None,
            other => Some(DURATIONS_MINUTES[other.code() as usize - 1][level.code() as usize]),
        }
    }

    /// Resolve a predicted code into a full day
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `code` is outside this library's catalog
    pub fn day_routine(&self, code: WorkoutCode, level: FitnessLevel) -> AppResult<DayRoutine> {
        if !self.catalog.contains(code) {
            return Err(AppError::invalid_argument(format!(
                "workout code {} is outside the {} catalog",
                code.value(),
                self.catalog
            )));
        }
        let workout = code.workout_type();
        let title = if code.is_rest() {
            "Rest Day"
        } else {
            workout.display_name()
        };
        Ok(DayRoutine {
            workout,
            title,
            routines: Self::routines(workout, level),
            duration_minutes: Self::duration_minutes(workout, level),
        })
    }
}
