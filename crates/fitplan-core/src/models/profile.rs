// ABOUTME: User profile enumerations for workout sequencing (fitness level, goal)
// ABOUTME: Integer code conversions, parsing, free-text goal classification, plan categories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::model::{AGE_NORMALIZATION, CODE_NORMALIZATION};
use crate::errors::AppError;

/// Self-reported training experience, encoded 0-2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitnessLevel {
    /// New to structured training
    Beginner,
    /// Trains regularly
    Intermediate,
    /// High training volume and experience
    Advanced,
}

impl FitnessLevel {
    /// All levels in code order
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    /// Integer encoding used by datasets and predictors
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Beginner => 0,
            Self::Intermediate => 1,
            Self::Advanced => 2,
        }
    }

    /// Human-readable name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

impl TryFrom<u8> for FitnessLevel {
    type Error = AppError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(code))
            .copied()
            .ok_or_else(|| AppError::invalid_argument(format!("fitness level {code} is not in 0-2")))
    }
}

impl FromStr for FitnessLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            other => Err(AppError::invalid_argument(format!(
                "unknown fitness level '{other}'"
            ))),
        }
    }
}

impl fmt::Display for FitnessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Training goal, encoded 0-2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Caloric deficit, cardio-leaning weeks
    WeightLoss,
    /// Caloric surplus, strength-leaning weeks
    MuscleGain,
    /// Balanced weeks
    GeneralFitness,
}

impl Goal {
    /// All goals in code order
    pub const ALL: [Self; 3] = [Self::WeightLoss, Self::MuscleGain, Self::GeneralFitness];

    /// Integer encoding used by datasets and predictors
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::WeightLoss => 0,
            Self::MuscleGain => 1,
            Self::GeneralFitness => 2,
        }
    }

    /// Human-readable name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::WeightLoss => "Weight Loss",
            Self::MuscleGain => "Muscle Gain",
            Self::GeneralFitness => "General Fitness",
        }
    }

    /// Classify a free-form goal description.
    ///
    /// Weight-loss keywords win over muscle-gain keywords; text matching
    /// neither is treated as general fitness.
    #[must_use]
    pub fn from_free_text(text: &str) -> Self {
        let text = text.to_lowercase();
        if ["weight", "loss", "lose"].iter().any(|k| text.contains(k)) {
            Self::WeightLoss
        } else if ["muscle", "gain", "build"].iter().any(|k| text.contains(k)) {
            Self::MuscleGain
        } else {
            Self::GeneralFitness
        }
    }
}

impl TryFrom<u8> for Goal {
    type Error = AppError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(code))
            .copied()
            .ok_or_else(|| AppError::invalid_argument(format!("goal {code} is not in 0-2")))
    }
}

impl FromStr for Goal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "weight_loss" => Ok(Self::WeightLoss),
            "muscle_gain" => Ok(Self::MuscleGain),
            "general_fitness" => Ok(Self::GeneralFitness),
            other => Err(AppError::invalid_argument(format!("unknown goal '{other}'"))),
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// User attributes that accompany a workout history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserFeatures {
    /// Age in years
    pub age: u32,
    /// Fitness level
    pub level: FitnessLevel,
    /// Training goal
    pub goal: Goal,
}

impl UserFeatures {
    /// Create a feature record
    #[must_use]
    pub const fn new(age: u32, level: FitnessLevel, goal: Goal) -> Self {
        Self { age, level, goal }
    }

    /// Scaled features `[age / 100, level / 2, goal / 2]` as consumed by predictors
    #[must_use]
    pub fn normalized(&self) -> [f64; 3] {
        [
            f64::from(self.age) / AGE_NORMALIZATION,
            f64::from(self.level.code()) / CODE_NORMALIZATION,
            f64::from(self.goal.code()) / CODE_NORMALIZATION,
        ]
    }
}

/// Classification target combining level and goal (`level * 3 + goal`, 0-8)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlanCategory(u8);

impl PlanCategory {
    /// Number of categories
    pub const COUNT: usize = 9;

    /// Category for a level/goal pair
    #[must_use]
    pub const fn from_profile(level: FitnessLevel, goal: Goal) -> Self {
        Self(level.code() * 3 + goal.code())
    }

    /// Integer class index
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Level component of the category
    #[must_use]
    pub const fn level(self) -> FitnessLevel {
        FitnessLevel::ALL[(self.0 / 3) as usize]
    }

    /// Goal component of the category
    #[must_use]
    pub const fn goal(self) -> Goal {
        Goal::ALL[(self.0 % 3) as usize]
    }

    /// Label such as `Beginner - Weight Loss`
    #[must_use]
    pub fn label(self) -> String {
        format!("{} - {}", self.level(), self.goal())
    }
}

impl TryFrom<u8> for PlanCategory {
    type Error = AppError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        if usize::from(index) < Self::COUNT {
            Ok(Self(index))
        } else {
            Err(AppError::invalid_argument(format!(
                "plan category {index} is not in 0-8"
            )))
        }
    }
}

impl fmt::Display for PlanCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_codes_round_trip_through_try_from() {
        for level in FitnessLevel::ALL {
            assert_eq!(FitnessLevel::try_from(level.code()).ok(), Some(level));
        }
        for goal in Goal::ALL {
            assert_eq!(Goal::try_from(goal.code()).ok(), Some(goal));
        }
    }

    #[test]
    fn test_out_of_range_codes_are_invalid_arguments() {
        let level_err = FitnessLevel::try_from(3).err().map(|e| e.code);
        let goal_err = Goal::try_from(200).err().map(|e| e.code);
        assert_eq!(level_err, Some(ErrorCode::InvalidArgument));
        assert_eq!(goal_err, Some(ErrorCode::InvalidArgument));
    }

    #[test]
    fn test_free_text_goal_classification() {
        assert_eq!(Goal::from_free_text("Lose 5kg"), Goal::WeightLoss);
        assert_eq!(Goal::from_free_text("build muscle"), Goal::MuscleGain);
        assert_eq!(Goal::from_free_text("improve fitness"), Goal::GeneralFitness);
        // weight keywords take precedence
        assert_eq!(Goal::from_free_text("gain muscle, lose weight"), Goal::WeightLoss);
    }

    #[test]
    fn test_plan_category_layout() {
        let category = PlanCategory::from_profile(FitnessLevel::Advanced, Goal::MuscleGain);
        assert_eq!(category.index(), 7);
        assert_eq!(category.label(), "Advanced - Muscle Gain");
        assert!(PlanCategory::try_from(9).is_err());
    }

    #[test]
    fn test_normalized_features() {
        let features = UserFeatures::new(30, FitnessLevel::Intermediate, Goal::GeneralFitness);
        let [age, level, goal] = features.normalized();
        assert!((age - 0.3).abs() < f64::EPSILON);
        assert!((level - 0.5).abs() < f64::EPSILON);
        assert!((goal - 1.0).abs() < f64::EPSILON);
    }
}
