// ABOUTME: `simulate` subcommand fitting a predictor and simulating one week
// ABOUTME: Reports the measured held-out accuracy next to the simulated days
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use anyhow::Result;
use fitplan::intelligence::{seeded_rng, GeneratorConfig};
use fitplan::models::{FitnessLevel, Goal, UserFeatures};
use serde_json::json;

use super::{print_json, train_transition_model};

pub fn run(config: &GeneratorConfig, level: FitnessLevel, goal: Goal, age: u32) -> Result<()> {
    let mut rng = seeded_rng(config.seed);
    let trained = train_transition_model(config, &mut rng)?;

    let features = UserFeatures::new(age, level, goal);
    let simulated = trained
        .generator
        .simulate_week_detailed(level, goal, &features, &trained.model)?;
    let workouts: Vec<String> = simulated.week.iter().map(|code| code.to_string()).collect();

    print_json(&json!({
        "level": level,
        "goal": goal,
        "age": age,
        "base": trained.generator.base_sequence(level, goal),
        "simulated": simulated,
        "workouts": workouts,
        "meanConfidence": simulated.mean_confidence(),
        "evaluation": trained.report,
    }))
}
