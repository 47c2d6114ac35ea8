// ABOUTME: Workout catalog models: named workout types, catalog sizes, codes, and week sequences
// ABOUTME: Codes are validated against a catalog so every WeekSequence holds in-range values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::catalog::{BASE_SIZE, EXTENDED_SIZE, REST_CODE};
use crate::constants::week::{DAYS_PER_WEEK, HISTORY_DAYS};
use crate::errors::{AppError, AppResult};

/// Named workout types, in code order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutType {
    /// Rest or active recovery (always code 0)
    Rest,
    /// Steady-state cardio
    Cardio,
    /// Resistance training
    Strength,
    /// High-intensity interval training
    Hiit,
    /// Yoga
    Yoga,
    /// Swimming
    Swimming,
    /// Cycling
    Cycling,
    /// Pilates
    Pilates,
    /// `CrossFit`
    CrossFit,
    /// Boxing
    Boxing,
    /// Dancing
    Dancing,
    /// Team and racquet sports
    Sports,
}

impl WorkoutType {
    /// Every workout type in code order
    pub const ALL: [Self; EXTENDED_SIZE as usize] = [
        Self::Rest,
        Self::Cardio,
        Self::Strength,
        Self::Hiit,
        Self::Yoga,
        Self::Swimming,
        Self::Cycling,
        Self::Pilates,
        Self::CrossFit,
        Self::Boxing,
        Self::Dancing,
        Self::Sports,
    ];

    /// Human-readable name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Rest => "Rest",
            Self::Cardio => "Cardio",
            Self::Strength => "Strength",
            Self::Hiit => "HIIT",
            Self::Yoga => "Yoga",
            Self::Swimming => "Swimming",
            Self::Cycling => "Cycling",
            Self::Pilates => "Pilates",
            Self::CrossFit => "CrossFit",
            Self::Boxing => "Boxing",
            Self::Dancing => "Dancing",
            Self::Sports => "Sports",
        }
    }

    /// Integer code of this workout type
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Which set of workout types codes are drawn from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutCatalog {
    /// Rest through Cycling (N = 7)
    #[default]
    Base,
    /// Rest through Sports (N = 12)
    Extended,
}

impl WorkoutCatalog {
    /// Number of workout codes, N
    #[must_use]
    pub const fn size(self) -> u8 {
        match self {
            Self::Base => BASE_SIZE,
            Self::Extended => EXTENDED_SIZE,
        }
    }

    /// Whether `code` is valid in this catalog
    #[must_use]
    pub const fn contains(self, code: WorkoutCode) -> bool {
        code.0 < self.size()
    }

    /// Validate a raw code against this catalog
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when `raw >= N`
    pub fn code(self, raw: u8) -> AppResult<WorkoutCode> {
        if raw < self.size() {
            Ok(WorkoutCode(raw))
        } else {
            Err(AppError::invalid_argument(format!(
                "workout code {raw} is outside the {self} catalog (0..{})",
                self.size()
            )))
        }
    }

    /// Workout types available in this catalog
    #[must_use]
    pub fn workout_types(self) -> &'static [WorkoutType] {
        &WorkoutType::ALL[..usize::from(self.size())]
    }
}

impl FromStr for WorkoutCatalog {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "base" => Ok(Self::Base),
            "extended" => Ok(Self::Extended),
            other => Err(AppError::invalid_format(format!(
                "unknown workout catalog '{other}' (expected 'base' or 'extended')"
            ))),
        }
    }
}

impl fmt::Display for WorkoutCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base => f.write_str("base"),
            Self::Extended => f.write_str("extended"),
        }
    }
}

/// Integer identifier of a workout type; 0 is always rest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct WorkoutCode(u8);

impl WorkoutCode {
    /// Rest day
    pub const REST: Self = Self(REST_CODE);

    /// Code for a named workout type
    #[must_use]
    pub const fn from_workout(workout: WorkoutType) -> Self {
        Self(workout.code())
    }

    /// Raw integer value
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Position of this code in a probability vector
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Named workout type behind this code
    #[must_use]
    pub const fn workout_type(self) -> WorkoutType {
        WorkoutType::ALL[self.0 as usize]
    }

    /// Whether this is a rest day
    #[must_use]
    pub const fn is_rest(self) -> bool {
        self.0 == REST_CODE
    }
}

impl From<WorkoutType> for WorkoutCode {
    fn from(workout: WorkoutType) -> Self {
        Self::from_workout(workout)
    }
}

impl fmt::Display for WorkoutCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.workout_type().display_name())
    }
}

/// Seven workout codes, Monday first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct WeekSequence([WorkoutCode; DAYS_PER_WEEK]);

impl WeekSequence {
    /// Wrap seven already-validated codes
    #[must_use]
    pub const fn new(days: [WorkoutCode; DAYS_PER_WEEK]) -> Self {
        Self(days)
    }

    /// Build a week from raw codes, validating each against `catalog`
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if any code is outside the catalog
    pub fn from_raw(raw: [u8; DAYS_PER_WEEK], catalog: WorkoutCatalog) -> AppResult<Self> {
        let mut days = [WorkoutCode::REST; DAYS_PER_WEEK];
        for (slot, value) in days.iter_mut().zip(raw) {
            *slot = catalog.code(value)?;
        }
        Ok(Self(days))
    }

    /// All seven days
    #[must_use]
    pub const fn days(&self) -> &[WorkoutCode; DAYS_PER_WEEK] {
        &self.0
    }

    /// Days 1-6, the predictor input
    #[must_use]
    pub fn history(&self) -> [WorkoutCode; HISTORY_DAYS] {
        let mut history = [WorkoutCode::REST; HISTORY_DAYS];
        history.copy_from_slice(&self.0[..HISTORY_DAYS]);
        history
    }

    /// Day 7, the prediction target
    #[must_use]
    pub const fn label(&self) -> WorkoutCode {
        self.0[DAYS_PER_WEEK - 1]
    }

    /// Raw integer codes
    #[must_use]
    pub fn to_raw(&self) -> [u8; DAYS_PER_WEEK] {
        self.0.map(WorkoutCode::value)
    }

    /// Whether every day is valid in `catalog`
    #[must_use]
    pub fn fits(&self, catalog: WorkoutCatalog) -> bool {
        self.0.iter().all(|code| catalog.contains(*code))
    }

    /// Iterate the days in order
    pub fn iter(&self) -> impl Iterator<Item = WorkoutCode> + '_ {
        self.0.iter().copied()
    }
}

impl TryFrom<Vec<WorkoutCode>> for WeekSequence {
    type Error = AppError;

    fn try_from(days: Vec<WorkoutCode>) -> Result<Self, Self::Error> {
        let len = days.len();
        <[WorkoutCode; DAYS_PER_WEEK]>::try_from(days).map(Self).map_err(|_| {
            AppError::invalid_argument(format!(
                "a week needs exactly {DAYS_PER_WEEK} days, got {len}"
            ))
        })
    }
}

impl fmt::Display for WeekSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, code) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{code}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_catalog_bounds() {
        assert!(WorkoutCatalog::Base.code(6).is_ok());
        assert_eq!(
            WorkoutCatalog::Base.code(7).err().map(|e| e.code),
            Some(ErrorCode::InvalidArgument)
        );
        assert!(WorkoutCatalog::Extended.code(11).is_ok());
        assert!(WorkoutCatalog::Extended.code(12).is_err());
        assert_eq!(WorkoutCatalog::Base.workout_types().len(), 7);
    }

    #[test]
    fn test_history_and_label_split() {
        let week = WeekSequence::from_raw([1, 0, 2, 0, 1, 0, 4], WorkoutCatalog::Base).unwrap();
        assert_eq!(week.history().map(WorkoutCode::value), [1, 0, 2, 0, 1, 0]);
        assert_eq!(week.label().workout_type(), WorkoutType::Yoga);
        assert_eq!(
            week.to_string(),
            "Cardio, Rest, Strength, Rest, Cardio, Rest, Yoga"
        );
    }

    #[test]
    fn test_week_from_vec_requires_seven_days() {
        let short = vec![WorkoutCode::REST; 6];
        assert!(WeekSequence::try_from(short).is_err());
        let full = vec![WorkoutCode::REST; 7];
        assert!(WeekSequence::try_from(full).is_ok());
    }

    #[test]
    fn test_extended_codes_do_not_fit_base_catalog() {
        let week =
            WeekSequence::from_raw([11, 0, 0, 0, 0, 0, 0], WorkoutCatalog::Extended).unwrap();
        assert!(week.fits(WorkoutCatalog::Extended));
        assert!(!week.fits(WorkoutCatalog::Base));
    }
}
