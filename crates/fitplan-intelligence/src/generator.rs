// ABOUTME: Sequence generator: base week lookup and per-day random perturbation
// ABOUTME: Shares an immutable SequenceTable and draws codes from a fixed workout catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! # Sequence Generator
//!
//! Produces the deterministic base week for a (level, goal) pair and noisy
//! variants of it for dataset construction. Week simulation against a
//! predictor lives in [`crate::simulation`], dataset sampling in
//! [`crate::dataset`]; both extend this type.

use std::sync::Arc;

use fitplan_core::errors::{AppError, AppResult};
use fitplan_core::models::{FitnessLevel, Goal, WeekSequence, WorkoutCatalog, WorkoutCode};

use crate::random::{draw_below, draw_unit, RandomSource};
use crate::sequence_table::SequenceTable;

/// Base-week lookup and perturbation over one workout catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceGenerator {
    table: Arc<SequenceTable>,
    catalog: WorkoutCatalog,
}

impl SequenceGenerator {
    /// Create a generator over a shared table
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the table holds codes outside `catalog`
    pub fn new(table: Arc<SequenceTable>, catalog: WorkoutCatalog) -> AppResult<Self> {
        table.validate_for(catalog)?;
        Ok(Self { table, catalog })
    }

    /// Generator over the reference table
    #[must_use]
    pub fn standard(catalog: WorkoutCatalog) -> Self {
        Self {
            table: Arc::new(SequenceTable::standard()),
            catalog,
        }
    }

    /// Catalog codes are drawn from
    #[must_use]
    pub const fn catalog(&self) -> WorkoutCatalog {
        self.catalog
    }

    /// Shared lookup table
    #[must_use]
    pub fn table(&self) -> &Arc<SequenceTable> {
        &self.table
    }

    /// Deterministic base week for a level/goal pair
    #[must_use]
    pub fn base_sequence(&self, level: FitnessLevel, goal: Goal) -> WeekSequence {
        self.table.get(level, goal)
    }

    /// Base week keyed by raw integer codes
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `level` or `goal` is outside 0-2
    pub fn base_sequence_for_codes(&self, level: u8, goal: u8) -> AppResult<WeekSequence> {
        Ok(self.base_sequence(FitnessLevel::try_from(level)?, Goal::try_from(goal)?))
    }

    /// Independently replace each day with probability `probability` by a
    /// uniformly drawn code from the catalog.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `probability` is not a finite value in `[0, 1]`,
    /// and `InternalError` if `rng` draws outside the bound it was given
    pub fn perturb<R: RandomSource + ?Sized>(
        &self,
        sequence: &WeekSequence,
        probability: f64,
        rng: &mut R,
    ) -> AppResult<WeekSequence> {
        validate_probability(probability)?;
        self.perturb_unchecked(sequence, probability, rng)
    }

    /// Perturbation for callers that already validated `probability`
    pub(crate) fn perturb_unchecked<R: RandomSource + ?Sized>(
        &self,
        sequence: &WeekSequence,
        probability: f64,
        rng: &mut R,
    ) -> AppResult<WeekSequence> {
        let mut days = *sequence.days();
        for day in &mut days {
            // One float per day, then a code draw only when it substitutes
            if draw_unit(rng)? < probability {
                let raw = draw_below(rng, u32::from(self.catalog.size()))?;
                *day = self.draw_code(raw)?;
            }
        }
        Ok(WeekSequence::new(days))
    }

    fn draw_code(&self, raw: u32) -> AppResult<WorkoutCode> {
        let raw = u8::try_from(raw).map_err(|_| {
            AppError::internal(format!("random source returned {raw}, beyond any catalog"))
        })?;
        self.catalog.code(raw)
    }
}

/// Check a substitution probability
///
/// # Errors
///
/// Returns `InvalidArgument` if `probability` is not a finite value in `[0, 1]`
pub fn validate_probability(probability: f64) -> AppResult<()> {
    if probability.is_finite() && (0.0..=1.0).contains(&probability) {
        Ok(())
    } else {
        Err(AppError::invalid_argument(format!(
            "perturbation probability must be within [0, 1], got {probability}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::seeded_rng;
    use fitplan_core::errors::ErrorCode;

    /// Counts draws and always substitutes with the same code
    struct CountingSource {
        unit: f64,
        code: u32,
        unit_draws: usize,
        code_draws: usize,
    }

    impl CountingSource {
        const fn new(unit: f64, code: u32) -> Self {
            Self {
                unit,
                code,
                unit_draws: 0,
                code_draws: 0,
            }
        }
    }

    impl RandomSource for CountingSource {
        fn next_unit(&mut self) -> f64 {
            self.unit_draws += 1;
            self.unit
        }

        fn next_below(&mut self, upper: u32) -> u32 {
            self.code_draws += 1;
            self.code.min(upper.saturating_sub(1))
        }
    }

    #[test]
    fn test_probability_one_draws_every_day() {
        let generator = SequenceGenerator::standard(WorkoutCatalog::Base);
        let base = generator.base_sequence(FitnessLevel::Beginner, Goal::WeightLoss);
        let mut source = CountingSource::new(0.999, 5);

        let perturbed = generator.perturb(&base, 1.0, &mut source).unwrap();

        assert_eq!(source.unit_draws, 7);
        assert_eq!(source.code_draws, 7);
        assert_eq!(perturbed.to_raw(), [5; 7]);
    }

    #[test]
    fn test_probability_zero_never_draws_codes() {
        let generator = SequenceGenerator::standard(WorkoutCatalog::Base);
        let base = generator.base_sequence(FitnessLevel::Advanced, Goal::GeneralFitness);
        let mut source = CountingSource::new(0.0, 3);

        let perturbed = generator.perturb(&base, 0.0, &mut source).unwrap();

        assert_eq!(perturbed, base);
        assert_eq!(source.code_draws, 0);
    }

    #[test]
    fn test_invalid_probabilities_rejected() {
        let generator = SequenceGenerator::standard(WorkoutCatalog::Base);
        let base = generator.base_sequence(FitnessLevel::Beginner, Goal::MuscleGain);
        let mut rng = seeded_rng(3);
        for probability in [-0.1, 1.5, f64::NAN, f64::INFINITY] {
            let err = generator.perturb(&base, probability, &mut rng).err();
            assert_eq!(err.map(|e| e.code), Some(ErrorCode::InvalidArgument));
        }
    }

    #[test]
    fn test_extended_catalog_draws_stay_in_range() {
        let generator = SequenceGenerator::standard(WorkoutCatalog::Extended);
        let base = generator.base_sequence(FitnessLevel::Intermediate, Goal::WeightLoss);
        let mut rng = seeded_rng(11);
        for _ in 0..200 {
            let week = generator.perturb(&base, 1.0, &mut rng).unwrap();
            assert!(week.fits(WorkoutCatalog::Extended));
        }
    }

    /// Returns the exclusive bound itself
    struct Overshoot;

    impl RandomSource for Overshoot {
        fn next_unit(&mut self) -> f64 {
            0.0
        }

        fn next_below(&mut self, upper: u32) -> u32 {
            upper
        }
    }

    #[test]
    fn test_out_of_range_draws_are_reported() {
        let generator = SequenceGenerator::standard(WorkoutCatalog::Base);
        let base = generator.base_sequence(FitnessLevel::Beginner, Goal::WeightLoss);

        let err = generator.perturb(&base, 1.0, &mut Overshoot).unwrap_err();
        assert_eq!(err.code, ErrorCode::InternalError);
    }
}
