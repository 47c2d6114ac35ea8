// ABOUTME: Immutable lookup table mapping (fitness level, goal) to a base training week
// ABOUTME: Validated against a workout catalog once and shared read-only via Arc
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use fitplan_core::constants::week::DAYS_PER_WEEK;
use fitplan_core::errors::{AppError, AppResult};
use fitplan_core::models::{FitnessLevel, Goal, WeekSequence, WorkoutCatalog, WorkoutCode, WorkoutType};

use WorkoutType::{Cardio, Cycling, Hiit, Rest, Strength, Swimming, Yoga};

/// Reference weeks, rows by level (Beginner..Advanced), columns by goal
/// (`WeightLoss`, `MuscleGain`, `GeneralFitness`).
const STANDARD_WEEKS: [[[WorkoutType; DAYS_PER_WEEK]; 3]; 3] = [
    [
        [Cardio, Rest, Strength, Rest, Cardio, Rest, Yoga],
        [Strength, Rest, Strength, Rest, Strength, Strength, Rest],
        [Cardio, Strength, Rest, Hiit, Rest, Cardio, Yoga],
    ],
    [
        [Hiit, Cardio, Strength, Cardio, Hiit, Cycling, Rest],
        [Strength, Strength, Rest, Strength, Strength, Strength, Rest],
        [Strength, Hiit, Cardio, Strength, Hiit, Swimming, Yoga],
    ],
    [
        [Hiit, Hiit, Strength, Hiit, Hiit, Cycling, Cardio],
        [Strength, Strength, Strength, Strength, Strength, Strength, Rest],
        [Hiit, Strength, Hiit, Strength, Hiit, Swimming, Strength],
    ],
];

/// Fixed mapping from (level, goal) to a 7-day base sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceTable {
    weeks: [[WeekSequence; 3]; 3],
}

impl SequenceTable {
    /// The hand-authored reference table; every code is valid in the base catalog
    #[must_use]
    pub fn standard() -> Self {
        let weeks = STANDARD_WEEKS
            .map(|row| row.map(|week| WeekSequence::new(week.map(WorkoutCode::from_workout))));
        Self { weeks }
    }

    /// Build a custom table from raw codes
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if any entry holds a code outside `catalog`
    pub fn from_raw(
        raw: [[[u8; DAYS_PER_WEEK]; 3]; 3],
        catalog: WorkoutCatalog,
    ) -> AppResult<Self> {
        let mut weeks = Self::standard().weeks;
        for (level_index, row) in raw.into_iter().enumerate() {
            for (goal_index, week) in row.into_iter().enumerate() {
                weeks[level_index][goal_index] = WeekSequence::from_raw(week, catalog)?;
            }
        }
        Ok(Self { weeks })
    }

    /// Base week for a level/goal pair
    #[must_use]
    pub const fn get(&self, level: FitnessLevel, goal: Goal) -> WeekSequence {
        self.weeks[level.code() as usize][goal.code() as usize]
    }

    /// Every entry with its key, level-major
    pub fn entries(&self) -> impl Iterator<Item = (FitnessLevel, Goal, WeekSequence)> + '_ {
        FitnessLevel::ALL.into_iter().flat_map(move |level| {
            Goal::ALL
                .into_iter()
                .map(move |goal| (level, goal, self.get(level, goal)))
        })
    }

    /// Check that every entry is usable with `catalog`
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` naming the first entry that does not fit
    pub fn validate_for(&self, catalog: WorkoutCatalog) -> AppResult<()> {
        match self.entries().find(|(_, _, week)| !week.fits(catalog)) {
            Some((level, goal, week)) => Err(AppError::invalid_argument(format!(
                "table entry ({level}, {goal}) = [{week}] does not fit the {catalog} catalog"
            ))),
            None => Ok(()),
        }
    }
}

impl Default for SequenceTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_fits_both_catalogs() {
        let table = SequenceTable::standard();
        assert!(table.validate_for(WorkoutCatalog::Base).is_ok());
        assert!(table.validate_for(WorkoutCatalog::Extended).is_ok());
        assert_eq!(table.entries().count(), 9);
    }

    #[test]
    fn test_custom_table_rejects_out_of_catalog_codes() {
        let mut raw = [[[0_u8; DAYS_PER_WEEK]; 3]; 3];
        raw[1][2][3] = 9;
        assert!(SequenceTable::from_raw(raw, WorkoutCatalog::Base).is_err());
        let table = SequenceTable::from_raw(raw, WorkoutCatalog::Extended).unwrap_or_default();
        assert_eq!(
            table.get(FitnessLevel::Intermediate, Goal::GeneralFitness).to_raw(),
            [0, 0, 0, 9, 0, 0, 0]
        );
    }
}
