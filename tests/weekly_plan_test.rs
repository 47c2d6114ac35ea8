// ABOUTME: Integration tests for full weekly plans, diet targets and the transition model
// ABOUTME: Exercises request parsing, measured accuracy reporting and allergy handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{FailingPredictor, OneHotPredictor};
use fitplan::errors::{AppResult, ErrorCode};
use fitplan::intelligence::{
    evaluate, seeded_rng, train_test_split, ProfileRanges, SequenceGenerator, TransitionModel,
};
use fitplan::models::{FitnessLevel, Goal, WorkoutCatalog, WorkoutType};
use fitplan::plans::{BodyMetrics, DietPlanner, ModelInfo, PlanRequest, WeeklyPlanner};

fn fitted_model(catalog: WorkoutCatalog) -> (SequenceGenerator, TransitionModel, ModelInfo) {
    let generator = SequenceGenerator::standard(catalog);
    let mut rng = seeded_rng(42);
    let samples: Vec<_> = generator
        .sample_uniform_dataset(&mut rng, 3_000, &ProfileRanges::default(), 0.1)
        .unwrap()
        .collect::<AppResult<_>>()
        .unwrap();
    let split = train_test_split(samples, 0.2, &mut rng).unwrap();
    assert_eq!(split.test.len(), 600);

    let model = TransitionModel::fit(&split.train, catalog, 1.0).unwrap();
    let report = evaluate(&model, &split.test, catalog).unwrap();
    let info = ModelInfo::unevaluated("Transition Model", "test").with_evaluation(&report);
    (generator, model, info)
}

#[test]
fn test_transition_model_beats_chance() {
    common::init_test_logging();
    let (_, _, info) = fitted_model(WorkoutCatalog::Base);

    let accuracy = info.accuracy.unwrap();
    assert!(accuracy > 0.5, "accuracy {accuracy}");
    assert!(accuracy <= 1.0);
    assert_eq!(info.evaluated_on, Some(600));
}

#[test]
fn test_evaluation_needs_samples() {
    let (_, model, _) = fitted_model(WorkoutCatalog::Base);
    let err = evaluate(&model, &[], WorkoutCatalog::Base).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidArgument);
}

#[test]
fn test_default_request_plan() {
    let (generator, model, info) = fitted_model(WorkoutCatalog::Base);
    let planner = WeeklyPlanner::new(generator, model, info.clone());

    let plan = planner
        .plan(&PlanRequest::default(), &mut seeded_rng(1))
        .unwrap();

    assert_eq!(plan.level, FitnessLevel::Beginner);
    assert_eq!(plan.goal, Goal::GeneralFitness);
    assert_eq!(plan.model_info, info);
    assert_eq!(plan.workout_plan.generated_by, "Transition Model");
    assert_eq!(
        plan.workout_plan.schedule,
        ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"]
    );

    let days = &plan.workout_plan.days;
    assert_eq!(days.len(), 7);
    assert!(days[..2].iter().all(|day| day.confidence.is_none()));
    assert!(days[2..].iter().all(|day| day.confidence.is_some()));
    for day in days {
        if day.workout == WorkoutType::Rest {
            assert_eq!(day.duration_minutes, None);
        } else {
            assert!(day.duration_minutes.is_some());
            assert!(!day.routines.is_empty());
        }
    }

    // 10*70 + 6.25*170 - 5*25 + 5 = 1642.5, times 1.3
    assert_eq!(plan.diet_plan.daily_calories, 2135);
    assert_eq!(plan.diet_plan.meals.len(), 5);
    assert!((plan.diet_plan.hydration_liters - 2.0).abs() < f64::EPSILON);
}

#[test]
fn test_plan_follows_the_predictor() {
    let generator = SequenceGenerator::standard(WorkoutCatalog::Base);
    let planner = WeeklyPlanner::new(
        generator,
        OneHotPredictor::new(4, WorkoutCatalog::Base),
        ModelInfo::unevaluated("Yoga Only", "0"),
    );
    let request = PlanRequest {
        fitness_level: "Advanced".into(),
        fitness_goals: "build muscle".into(),
        ..PlanRequest::default()
    };

    let plan = planner.plan(&request, &mut seeded_rng(2)).unwrap();
    let workouts: Vec<WorkoutType> = plan.workout_plan.days.iter().map(|day| day.workout).collect();

    assert_eq!(plan.goal, Goal::MuscleGain);
    assert_eq!(workouts[..2], [WorkoutType::Strength, WorkoutType::Strength]);
    assert!(workouts[2..].iter().all(|workout| *workout == WorkoutType::Yoga));
    assert_eq!(plan.model_info.accuracy, None);
    // floor(1642.5 * 1.725) + 300
    assert_eq!(plan.diet_plan.daily_calories, 3133);
}

#[test]
fn test_request_errors() {
    let planner = WeeklyPlanner::new(
        SequenceGenerator::standard(WorkoutCatalog::Base),
        OneHotPredictor::new(0, WorkoutCatalog::Base),
        ModelInfo::unevaluated("Rest Only", "0"),
    );
    let mut rng = seeded_rng(3);

    let unknown_level = PlanRequest {
        fitness_level: "elite".into(),
        ..PlanRequest::default()
    };
    assert_eq!(
        planner.plan(&unknown_level, &mut rng).unwrap_err().code,
        ErrorCode::InvalidArgument
    );

    let too_heavy = PlanRequest {
        weight: 450.0,
        ..PlanRequest::default()
    };
    assert_eq!(
        planner.plan(&too_heavy, &mut rng).unwrap_err().code,
        ErrorCode::InvalidArgument
    );

    let allergic_to_everything = PlanRequest {
        allergies: "a, e, i, o, u".into(),
        ..PlanRequest::default()
    };
    assert_eq!(
        planner
            .plan(&allergic_to_everything, &mut rng)
            .unwrap_err()
            .code,
        ErrorCode::InvalidArgument
    );
}

#[test]
fn test_predictor_failure_aborts_plan() {
    let planner = WeeklyPlanner::new(
        SequenceGenerator::standard(WorkoutCatalog::Base),
        FailingPredictor::default(),
        ModelInfo::unevaluated("Broken", "0"),
    );
    let err = planner
        .plan(&PlanRequest::default(), &mut seeded_rng(4))
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::PredictorFailed);
}

#[test]
fn test_allergens_are_excluded_from_meals() {
    let body = BodyMetrics {
        age: 30,
        weight_kg: 80.0,
        height_cm: 180.0,
    };
    let allergies = vec!["peanut".to_owned(), "almond".to_owned()];

    for seed in 0..50 {
        let plan = DietPlanner
            .plan(
                &body,
                FitnessLevel::Intermediate,
                Goal::WeightLoss,
                &allergies,
                &mut seeded_rng(seed),
            )
            .unwrap();
        for meal in &plan.meals {
            for food in meal.foods {
                let food = food.to_lowercase();
                assert!(!food.contains("peanut") && !food.contains("almond"), "{food}");
            }
        }
    }
}

#[test]
fn test_request_json_defaults() {
    let request: PlanRequest =
        serde_json::from_str(r#"{"age": 40, "fitnessGoals": "lose weight"}"#).unwrap();

    assert_eq!(request.age, 40);
    assert!((request.weight - 70.0).abs() < f64::EPSILON);
    assert_eq!(request.level().unwrap(), FitnessLevel::Beginner);
    assert_eq!(request.goal(), Goal::WeightLoss);
    assert!(request.allergies.is_empty());
}
