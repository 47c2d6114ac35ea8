// ABOUTME: Daily calorie targets and template-based meal selection for weekly plans
// ABOUTME: Mifflin-St Jeor style BMR scaled by training level and adjusted for the goal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! # Diet Planner
//!
//! Calorie target:
//!
//! ```text
//! BMR      = 10 * weight_kg + 6.25 * height_cm - 5 * age + 5
//! calories = floor(BMR * activity multiplier) + goal adjustment
//! ```
//!
//! Activity multipliers are 1.3, 1.55 and 1.725 for beginner, intermediate
//! and advanced. Weight loss subtracts 500 kcal, muscle gain adds 300 kcal.
//! The calorie target is split into macronutrients by goal and five meals
//! are drawn from fixed templates with the caller's random source.

use fitplan_core::errors::{AppError, AppResult};
use fitplan_core::models::{FitnessLevel, Goal};
use fitplan_intelligence::random::{pick, RandomSource};
use serde::Serialize;
use tracing::debug;

/// Kilocalories per gram of protein or carbohydrate
const KCAL_PER_GRAM_PROTEIN_CARB: f64 = 4.0;
/// Kilocalories per gram of fat
const KCAL_PER_GRAM_FAT: f64 = 9.0;

const BREAKFASTS: &[&[&str]] = &[
    &["Oatmeal with berries", "Scrambled eggs", "Whole wheat toast", "Orange juice"],
    &["Greek yogurt with granola", "Banana", "Almonds", "Green tea"],
    &["Protein smoothie", "Whole grain cereal", "Milk", "Apple"],
    &["Egg white omelette", "Avocado toast", "Fresh fruit", "Coffee"],
    &["Quinoa porridge", "Boiled eggs", "Mixed berries", "Herbal tea"],
    &["Protein pancakes", "Turkey bacon", "Strawberries", "Black coffee"],
    &["Overnight oats", "Peanut butter", "Sliced banana", "Almond milk"],
    &["Veggie omelette", "Whole grain bagel", "Grapefruit", "Green smoothie"],
    &["Chia pudding", "Walnuts", "Blueberries", "Coconut water"],
    &["Cottage cheese bowl", "Honey", "Peaches", "Matcha latte"],
];

const LUNCHES: &[&[&str]] = &[
    &["Grilled chicken breast", "Brown rice", "Steamed broccoli", "Olive oil"],
    &["Salmon fillet", "Quinoa", "Mixed vegetables", "Lemon water"],
    &["Turkey wrap", "Sweet potato", "Side salad", "Green tea"],
    &["Lean beef stir-fry", "Brown rice", "Bell peppers", "Ginger tea"],
    &["Tuna salad", "Whole wheat pita", "Cucumber", "Tomato juice"],
    &["Chicken Caesar salad", "Chickpeas", "Cherry tomatoes", "Sparkling water"],
    &["Grilled fish tacos", "Black beans", "Corn salsa", "Lime water"],
    &["Lean pork tenderloin", "Roasted vegetables", "Couscous", "Iced tea"],
    &["Shrimp bowl", "Cauliflower rice", "Edamame", "Miso soup"],
    &["Turkey burger", "Sweet potato fries", "Coleslaw", "Protein shake"],
];

const DINNERS: &[&[&str]] = &[
    &["Baked cod", "Asparagus", "Wild rice", "Sparkling water"],
    &["Grilled chicken", "Roasted vegetables", "Quinoa", "Herbal tea"],
    &["Lean steak", "Green beans", "Mashed sweet potato", "Water"],
    &["Shrimp stir-fry", "Brown rice", "Mixed veggies", "Lemon water"],
    &["Baked salmon", "Brussels sprouts", "Farro", "Cucumber water"],
    &["Chicken breast", "Zucchini noodles", "Marinara sauce", "Green tea"],
    &["Turkey meatballs", "Spaghetti squash", "Side salad", "Herbal infusion"],
    &["Grilled tilapia", "Quinoa salad", "Roasted cauliflower", "Mint tea"],
    &["Beef and broccoli", "Jasmine rice", "Bok choy", "White tea"],
    &["Chicken fajitas", "Bell peppers", "Whole wheat tortilla", "Agua fresca"],
];

const SNACKS: &[&[&str]] = &[
    &["Apple with almond butter", "Protein bar"],
    &["Mixed nuts", "Greek yogurt"],
    &["Cottage cheese", "Berries"],
    &["Protein shake", "Banana"],
    &["Hummus", "Carrot sticks"],
    &["Rice cakes", "Peanut butter"],
    &["Trail mix", "String cheese"],
    &["Hard-boiled eggs", "Cherry tomatoes"],
    &["Edamame", "Seaweed snacks"],
    &["Protein smoothie", "Granola"],
    &["Celery sticks", "Almond butter"],
    &["Turkey roll-ups", "Bell pepper slices"],
];

/// Meal slots in serving order
const MEAL_SLOTS: [(&str, &[&[&str]]); 5] = [
    ("Breakfast", BREAKFASTS),
    ("Lunch", LUNCHES),
    ("Dinner", DINNERS),
    ("Snack 1", SNACKS),
    ("Snack 2", SNACKS),
];

/// Body measurements needed for the calorie target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyMetrics {
    /// Age in years
    pub age: u32,
    /// Weight in kg
    pub weight_kg: f64,
    /// Height in cm
    pub height_cm: f64,
}

impl BodyMetrics {
    /// Validate measurements are within the ranges the BMR formula covers
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` naming the out-of-range measurement
    pub fn validate(&self) -> AppResult<()> {
        if !self.weight_kg.is_finite() || self.weight_kg <= 0.0 || self.weight_kg > 300.0 {
            return Err(AppError::invalid_argument(
                "Weight must be between 0 and 300 kg",
            ));
        }
        if !self.height_cm.is_finite() || self.height_cm <= 0.0 || self.height_cm > 300.0 {
            return Err(AppError::invalid_argument(
                "Height must be between 0 and 300 cm",
            ));
        }
        if !(10..=120).contains(&self.age) {
            return Err(AppError::invalid_argument(
                "Age must be between 10 and 120 years",
            ));
        }
        Ok(())
    }
}

/// Grams of each macronutrient per day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Macronutrients {
    /// Protein grams
    pub protein_g: u32,
    /// Carbohydrate grams
    pub carbs_g: u32,
    /// Fat grams
    pub fat_g: u32,
}

/// A named meal and its foods
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Meal {
    /// Slot name, e.g. "Breakfast"
    pub name: &'static str,
    /// Foods making up the meal
    pub foods: &'static [&'static str],
}

/// One day of eating guidance
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DietPlan {
    /// Target kilocalories per day
    pub daily_calories: i32,
    /// Macronutrient split of `daily_calories`
    pub macros: Macronutrients,
    /// Recommended water intake in litres
    pub hydration_liters: f64,
    /// Breakfast, lunch, dinner and two snacks
    pub meals: Vec<Meal>,
}

/// Calorie and meal planner
#[derive(Debug, Clone, Copy, Default)]
pub struct DietPlanner;

impl DietPlanner {
    /// Basal metabolic rate in kcal/day
    #[must_use]
    pub fn basal_metabolic_rate(body: &BodyMetrics) -> f64 {
        10.0_f64.mul_add(
            body.weight_kg,
            6.25_f64.mul_add(body.height_cm, -5.0 * f64::from(body.age)),
        ) + 5.0
    }

    /// Activity multiplier for a training level
    #[must_use]
    pub const fn activity_multiplier(level: FitnessLevel) -> f64 {
        match level {
            FitnessLevel::Beginner => 1.3,
            FitnessLevel::Intermediate => 1.55,
            FitnessLevel::Advanced => 1.725,
        }
    }

    /// Calorie adjustment applied for a goal
    #[must_use]
    pub const fn goal_adjustment(goal: Goal) -> i32 {
        match goal {
            Goal::WeightLoss => -500,
            Goal::MuscleGain => 300,
            Goal::GeneralFitness => 0,
        }
    }

    /// Daily water target in litres
    #[must_use]
    pub const fn hydration_liters(level: FitnessLevel) -> f64 {
        match level {
            FitnessLevel::Beginner => 2.0,
            FitnessLevel::Intermediate => 2.5,
            FitnessLevel::Advanced => 3.5,
        }
    }

    /// Daily calorie target
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the body metrics are out of range
    pub fn daily_calories(body: &BodyMetrics, level: FitnessLevel, goal: Goal) -> AppResult<i32> {
        body.validate()?;
        let maintenance = (Self::basal_metabolic_rate(body) * Self::activity_multiplier(level)).floor();
        #[allow(clippy::cast_possible_truncation)]
        let maintenance = maintenance as i32;
        Ok(maintenance + Self::goal_adjustment(goal))
    }

    /// Protein, carbohydrate and fat grams for a calorie target
    #[must_use]
    pub fn macronutrients(daily_calories: i32, goal: Goal) -> Macronutrients {
        let (protein, carbs, fat) = match goal {
            Goal::WeightLoss => (0.30, 0.40, 0.30),
            Goal::MuscleGain => (0.35, 0.45, 0.20),
            Goal::GeneralFitness => (0.25, 0.50, 0.25),
        };
        let calories = f64::from(daily_calories.max(0));
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let grams = |share: f64, kcal_per_gram: f64| (calories * share / kcal_per_gram).round() as u32;
        Macronutrients {
            protein_g: grams(protein, KCAL_PER_GRAM_PROTEIN_CARB),
            carbs_g: grams(carbs, KCAL_PER_GRAM_PROTEIN_CARB),
            fat_g: grams(fat, KCAL_PER_GRAM_FAT),
        }
    }

    /// Build a day of eating; meals are drawn in slot order from `rng` and
    /// templates containing any of `allergies` are skipped.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if the body metrics are out of range or every
    ///   template for a slot contains an allergen
    /// - `InternalError` if `rng` breaks its bound
    pub fn plan<R: RandomSource + ?Sized>(
        &self,
        body: &BodyMetrics,
        level: FitnessLevel,
        goal: Goal,
        allergies: &[String],
        rng: &mut R,
    ) -> AppResult<DietPlan> {
        let daily_calories = Self::daily_calories(body, level, goal)?;

        let mut meals = Vec::with_capacity(MEAL_SLOTS.len());
        for (name, templates) in MEAL_SLOTS {
            let safe: Vec<&'static [&'static str]> = templates
                .iter()
                .copied()
                .filter(|foods| !contains_allergen(foods, allergies))
                .collect();
            let foods = pick(rng, &safe)?.ok_or_else(|| {
                AppError::invalid_argument(format!(
                    "no {name} option avoids the listed allergies"
                ))
            })?;
            meals.push(Meal { name, foods });
        }

        debug!(daily_calories, meals = meals.len(), "diet plan assembled");
        Ok(DietPlan {
            daily_calories,
            macros: Self::macronutrients(daily_calories, goal),
            hydration_liters: Self::hydration_liters(level),
            meals,
        })
    }
}

fn contains_allergen(foods: &[&str], allergies: &[String]) -> bool {
    foods.iter().any(|food| {
        let food = food.to_lowercase();
        allergies.iter().any(|allergen| food.contains(allergen.as_str()))
    })
}

/// Split a comma-separated allergy list into lowercase entries
#[must_use]
pub fn parse_allergies(text: &str) -> Vec<String> {
    text.split(',')
        .map(|entry| entry.trim().to_lowercase())
        .filter(|entry| !entry.is_empty() && entry != "none")
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitplan_intelligence::random::seeded_rng;

    const BODY: BodyMetrics = BodyMetrics {
        age: 30,
        weight_kg: 70.0,
        height_cm: 175.0,
    };

    #[test]
    fn test_bmr_formula() {
        // 700 + 1093.75 - 150 + 5
        assert!((DietPlanner::basal_metabolic_rate(&BODY) - 1648.75).abs() < 1e-9);
    }

    #[test]
    fn test_goal_adjusted_calories() {
        let loss = DietPlanner::daily_calories(&BODY, FitnessLevel::Beginner, Goal::WeightLoss).unwrap();
        // floor(1648.75 * 1.3) = 2143
        assert_eq!(loss, 2143 - 500);
        let gain = DietPlanner::daily_calories(&BODY, FitnessLevel::Advanced, Goal::MuscleGain).unwrap();
        // floor(1648.75 * 1.725) = 2844
        assert_eq!(gain, 2844 + 300);
    }

    #[test]
    fn test_allergens_are_avoided() {
        let allergies = parse_allergies("Peanut, eggs , none");
        assert_eq!(allergies, vec!["peanut".to_owned(), "eggs".to_owned()]);
        let mut rng = seeded_rng(3);
        for _ in 0..50 {
            let plan = DietPlanner
                .plan(&BODY, FitnessLevel::Intermediate, Goal::GeneralFitness, &allergies, &mut rng)
                .unwrap();
            assert_eq!(plan.meals.len(), 5);
            for meal in &plan.meals {
                assert!(!contains_allergen(meal.foods, &allergies));
            }
        }
    }

    #[test]
    fn test_out_of_range_body_rejected() {
        let body = BodyMetrics {
            weight_kg: -1.0,
            ..BODY
        };
        assert!(DietPlanner::daily_calories(&body, FitnessLevel::Beginner, Goal::WeightLoss).is_err());
    }
}
