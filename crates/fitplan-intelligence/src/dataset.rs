// ABOUTME: Lazy synthetic dataset samplers for sequence prediction and profile classification
// ABOUTME: One sequential random stream per run keeps datasets bit-reproducible for a seed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! # Synthetic Datasets
//!
//! Two sample kinds are produced:
//!
//! - [`SequenceSample`]: user features plus the first six days of a perturbed
//!   base week as input, the seventh day as label.
//! - [`ProfileSample`]: a random body profile labelled with its
//!   [`PlanCategory`].
//!
//! Both are yielded one at a time by iterators that own a mutable borrow of
//! the random source, so draws happen in a fixed order:
//! level, goal, age, then the seven perturbation decisions.
//!
//! Items are `AppResult`s. A random source that breaks its contract yields
//! one error and ends the stream; no sample is ever patched with a default.

use std::iter::FusedIterator;

use fitplan_core::constants::dataset::{
    MAX_AGE, MAX_HEIGHT_CM, MAX_WEIGHT_KG, MIN_AGE, MIN_HEIGHT_CM, MIN_WEIGHT_KG,
};
use fitplan_core::constants::week::HISTORY_DAYS;
use fitplan_core::errors::{AppError, AppResult};
use fitplan_core::models::{
    FitnessLevel, Goal, PlanCategory, UserFeatures, WeekSequence, WorkoutCode,
};
use serde::{Deserialize, Serialize};

use crate::generator::{validate_probability, SequenceGenerator};
use crate::random::{draw_below, uniform_between, RandomSource};

/// One training example for next-day prediction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SequenceSample {
    /// User attributes
    pub features: UserFeatures,
    /// The perturbed week; days 1-6 are input, day 7 is the label
    pub week: WeekSequence,
}

impl SequenceSample {
    /// Days 1-6
    #[must_use]
    pub fn history(&self) -> [WorkoutCode; HISTORY_DAYS] {
        self.week.history()
    }

    /// Day 7
    #[must_use]
    pub const fn label(&self) -> WorkoutCode {
        self.week.label()
    }
}

/// One training example for plan-category classification
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProfileSample {
    /// Age in years
    pub age: u32,
    /// Body weight in kg
    pub weight_kg: f64,
    /// Height in cm
    pub height_cm: f64,
    /// Body mass index derived from weight and height
    pub bmi: f64,
    /// Fitness level
    pub level: FitnessLevel,
    /// Training goal
    pub goal: Goal,
    /// Target class, `level * 3 + goal`
    pub category: PlanCategory,
}

/// Sampling ranges for synthetic user profiles, each `[min, max)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileRanges {
    /// Youngest age
    pub min_age: u32,
    /// Age upper bound (exclusive)
    pub max_age: u32,
    /// Lightest weight in kg
    pub min_weight_kg: f64,
    /// Weight upper bound in kg
    pub max_weight_kg: f64,
    /// Shortest height in cm
    pub min_height_cm: f64,
    /// Height upper bound in cm
    pub max_height_cm: f64,
}

impl Default for ProfileRanges {
    fn default() -> Self {
        Self {
            min_age: MIN_AGE,
            max_age: MAX_AGE,
            min_weight_kg: MIN_WEIGHT_KG,
            max_weight_kg: MAX_WEIGHT_KG,
            min_height_cm: MIN_HEIGHT_CM,
            max_height_cm: MAX_HEIGHT_CM,
        }
    }
}

impl ProfileRanges {
    /// Validate that every range is non-empty and physically meaningful
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` describing the first bad range
    pub fn validate(&self) -> AppResult<()> {
        if self.min_age >= self.max_age {
            return Err(AppError::invalid_argument(format!(
                "age range [{}, {}) is empty",
                self.min_age, self.max_age
            )));
        }
        let positive_range =
            |low: f64, high: f64| low.is_finite() && high.is_finite() && 0.0 < low && low < high;
        if !positive_range(self.min_weight_kg, self.max_weight_kg) {
            return Err(AppError::invalid_argument(format!(
                "weight range [{}, {}) is invalid",
                self.min_weight_kg, self.max_weight_kg
            )));
        }
        if !positive_range(self.min_height_cm, self.max_height_cm) {
            return Err(AppError::invalid_argument(format!(
                "height range [{}, {}) is invalid",
                self.min_height_cm, self.max_height_cm
            )));
        }
        Ok(())
    }
}

/// Uniform fitness level sampler
///
/// # Errors
///
/// Returns `InternalError` if the source breaks its bound
pub fn uniform_level<R: RandomSource + ?Sized>(rng: &mut R) -> AppResult<FitnessLevel> {
    let code = draw_below(rng, FitnessLevel::ALL.len() as u32)?;
    FitnessLevel::try_from(code as u8)
}

/// Uniform goal sampler
///
/// # Errors
///
/// Returns `InternalError` if the source breaks its bound
pub fn uniform_goal<R: RandomSource + ?Sized>(rng: &mut R) -> AppResult<Goal> {
    let code = draw_below(rng, Goal::ALL.len() as u32)?;
    Goal::try_from(code as u8)
}

/// Uniform age sampler over `[min_age, max_age)`
pub fn uniform_age<R: RandomSource + ?Sized>(
    min_age: u32,
    max_age: u32,
) -> impl FnMut(&mut R) -> AppResult<u32> {
    move |rng: &mut R| Ok(min_age + draw_below(rng, max_age.saturating_sub(min_age))?)
}

/// Lazy iterator over perturbed sequence samples; ends after the first error
pub struct SequenceSamples<'a, R: ?Sized, L, G, A> {
    generator: &'a SequenceGenerator,
    rng: &'a mut R,
    remaining: usize,
    probability: f64,
    level_sampler: L,
    goal_sampler: G,
    age_sampler: A,
}

impl<R, L, G, A> SequenceSamples<'_, R, L, G, A>
where
    R: RandomSource + ?Sized,
    L: FnMut(&mut R) -> AppResult<FitnessLevel>,
    G: FnMut(&mut R) -> AppResult<Goal>,
    A: FnMut(&mut R) -> AppResult<u32>,
{
    fn draw(&mut self) -> AppResult<SequenceSample> {
        let level = (self.level_sampler)(&mut *self.rng)?;
        let goal = (self.goal_sampler)(&mut *self.rng)?;
        let age = (self.age_sampler)(&mut *self.rng)?;

        let base = self.generator.base_sequence(level, goal);
        let week = self
            .generator
            .perturb_unchecked(&base, self.probability, &mut *self.rng)?;

        Ok(SequenceSample {
            features: UserFeatures::new(age, level, goal),
            week,
        })
    }
}

impl<R, L, G, A> Iterator for SequenceSamples<'_, R, L, G, A>
where
    R: RandomSource + ?Sized,
    L: FnMut(&mut R) -> AppResult<FitnessLevel>,
    G: FnMut(&mut R) -> AppResult<Goal>,
    A: FnMut(&mut R) -> AppResult<u32>,
{
    type Item = AppResult<SequenceSample>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let sample = self.draw();
        if sample.is_err() {
            self.remaining = 0;
        }
        Some(sample)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::from(self.remaining > 0), Some(self.remaining))
    }
}

impl<R, L, G, A> FusedIterator for SequenceSamples<'_, R, L, G, A>
where
    R: RandomSource + ?Sized,
    L: FnMut(&mut R) -> AppResult<FitnessLevel>,
    G: FnMut(&mut R) -> AppResult<Goal>,
    A: FnMut(&mut R) -> AppResult<u32>,
{
}

impl SequenceGenerator {
    /// Lazily produce `count` perturbed samples using caller-supplied
    /// attribute samplers.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `probability` is not a finite value in `[0, 1]`
    pub fn sample_dataset<'a, R, L, G, A>(
        &'a self,
        rng: &'a mut R,
        count: usize,
        level_sampler: L,
        goal_sampler: G,
        age_sampler: A,
        probability: f64,
    ) -> AppResult<SequenceSamples<'a, R, L, G, A>>
    where
        R: RandomSource + ?Sized,
        L: FnMut(&mut R) -> AppResult<FitnessLevel>,
        G: FnMut(&mut R) -> AppResult<Goal>,
        A: FnMut(&mut R) -> AppResult<u32>,
    {
        validate_probability(probability)?;
        Ok(SequenceSamples {
            generator: self,
            rng,
            remaining: count,
            probability,
            level_sampler,
            goal_sampler,
            age_sampler,
        })
    }

    /// Sample with uniform level and goal and a uniform age in `ranges`
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for a bad probability or an empty age range
    pub fn sample_uniform_dataset<'a, R: RandomSource + ?Sized>(
        &'a self,
        rng: &'a mut R,
        count: usize,
        ranges: &ProfileRanges,
        probability: f64,
    ) -> AppResult<
        SequenceSamples<
            'a,
            R,
            fn(&mut R) -> AppResult<FitnessLevel>,
            fn(&mut R) -> AppResult<Goal>,
            impl FnMut(&mut R) -> AppResult<u32>,
        >,
    > {
        ranges.validate()?;
        self.sample_dataset(
            rng,
            count,
            uniform_level::<R> as fn(&mut R) -> AppResult<FitnessLevel>,
            uniform_goal::<R> as fn(&mut R) -> AppResult<Goal>,
            uniform_age(ranges.min_age, ranges.max_age),
            probability,
        )
    }
}

/// Lazy iterator over synthetic user profiles; ends after the first error
pub struct ProfileSamples<'a, R: ?Sized> {
    rng: &'a mut R,
    remaining: usize,
    ranges: ProfileRanges,
}

impl<R: RandomSource + ?Sized> ProfileSamples<'_, R> {
    fn draw(&mut self) -> AppResult<ProfileSample> {
        let ranges = self.ranges;
        let age = uniform_age(ranges.min_age, ranges.max_age)(&mut *self.rng)?;
        let weight_kg =
            uniform_between(&mut *self.rng, ranges.min_weight_kg, ranges.max_weight_kg)?;
        let height_cm =
            uniform_between(&mut *self.rng, ranges.min_height_cm, ranges.max_height_cm)?;
        let level = uniform_level(&mut *self.rng)?;
        let goal = uniform_goal(&mut *self.rng)?;

        let height_m = height_cm / 100.0;
        Ok(ProfileSample {
            age,
            weight_kg,
            height_cm,
            bmi: weight_kg / (height_m * height_m),
            level,
            goal,
            category: PlanCategory::from_profile(level, goal),
        })
    }
}

impl<R: RandomSource + ?Sized> Iterator for ProfileSamples<'_, R> {
    type Item = AppResult<ProfileSample>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let sample = self.draw();
        if sample.is_err() {
            self.remaining = 0;
        }
        Some(sample)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::from(self.remaining > 0), Some(self.remaining))
    }
}

impl<R: RandomSource + ?Sized> FusedIterator for ProfileSamples<'_, R> {}

/// Lazily produce `count` classification samples
///
/// # Errors
///
/// Returns `InvalidArgument` if any range is empty or non-physical
pub fn sample_profiles<R: RandomSource + ?Sized>(
    rng: &mut R,
    count: usize,
    ranges: ProfileRanges,
) -> AppResult<ProfileSamples<'_, R>> {
    ranges.validate()?;
    Ok(ProfileSamples {
        rng,
        remaining: count,
        ranges,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::seeded_rng;
    use fitplan_core::errors::ErrorCode;
    use fitplan_core::models::WorkoutCatalog;

    #[test]
    fn test_custom_samplers_are_honoured() {
        let generator = SequenceGenerator::standard(WorkoutCatalog::Base);
        let mut rng = seeded_rng(5);
        let samples: Vec<_> = generator
            .sample_dataset(
                &mut rng,
                25,
                |_| Ok(FitnessLevel::Advanced),
                |_| Ok(Goal::MuscleGain),
                |_| Ok(40),
                0.0,
            )
            .unwrap()
            .collect::<AppResult<_>>()
            .unwrap();

        assert_eq!(samples.len(), 25);
        for sample in samples {
            assert_eq!(sample.features.age, 40);
            assert_eq!(sample.week.to_raw(), [2, 2, 2, 2, 2, 2, 0]);
        }
    }

    #[test]
    fn test_profile_samples_respect_ranges() {
        let mut rng = seeded_rng(9);
        let ranges = ProfileRanges::default();
        for sample in sample_profiles(&mut rng, 500, ranges).unwrap() {
            let sample = sample.unwrap();
            assert!((18..65).contains(&sample.age));
            assert!((45.0..120.0).contains(&sample.weight_kg));
            assert!((150.0..200.0).contains(&sample.height_cm));
            assert_eq!(
                sample.category,
                PlanCategory::from_profile(sample.level, sample.goal)
            );
            let expected_bmi = sample.weight_kg / (sample.height_cm / 100.0).powi(2);
            assert!((sample.bmi - expected_bmi).abs() < 1e-9);
        }
    }

    #[test]
    fn test_empty_age_range_is_rejected() {
        let mut rng = seeded_rng(1);
        let ranges = ProfileRanges {
            min_age: 40,
            max_age: 40,
            ..ProfileRanges::default()
        };
        assert!(sample_profiles(&mut rng, 1, ranges).is_err());
    }

    /// Honours unit draws but overshoots every bounded draw
    struct Overshoot;

    impl RandomSource for Overshoot {
        fn next_unit(&mut self) -> f64 {
            0.0
        }

        fn next_below(&mut self, _upper: u32) -> u32 {
            99
        }
    }

    #[test]
    fn test_broken_source_ends_sequence_stream_with_error() {
        let generator = SequenceGenerator::standard(WorkoutCatalog::Base);
        let mut source = Overshoot;
        let mut samples = generator
            .sample_dataset(
                &mut source,
                3,
                |_| Ok(FitnessLevel::Beginner),
                |_| Ok(Goal::WeightLoss),
                |_| Ok(30),
                1.0,
            )
            .unwrap();

        let err = samples.next().unwrap().unwrap_err();
        assert_eq!(err.code, ErrorCode::InternalError);
        assert!(samples.next().is_none());
    }

    #[test]
    fn test_uniform_samplers_reject_broken_source() {
        assert!(uniform_level(&mut Overshoot).is_err());
        assert!(uniform_goal(&mut Overshoot).is_err());
        assert!(uniform_age(18, 65)(&mut Overshoot).is_err());

        let mut source = Overshoot;
        let mut profiles = sample_profiles(&mut source, 4, ProfileRanges::default()).unwrap();
        assert!(profiles.next().unwrap().is_err());
        assert!(profiles.next().is_none());
    }
}
