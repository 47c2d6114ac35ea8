// ABOUTME: `base` subcommand printing the deterministic week for a level and goal
// ABOUTME: Shows raw codes alongside workout names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use anyhow::Result;
use fitplan::intelligence::{GeneratorConfig, SequenceGenerator};
use fitplan::models::{FitnessLevel, Goal};
use serde_json::json;

use super::print_json;

pub fn run(config: &GeneratorConfig, level: FitnessLevel, goal: Goal) -> Result<()> {
    let generator = SequenceGenerator::standard(config.catalog);
    let week = generator.base_sequence(level, goal);
    let workouts: Vec<String> = week.iter().map(|code| code.to_string()).collect();

    print_json(&json!({
        "level": level,
        "goal": goal,
        "catalog": config.catalog,
        "codes": week,
        "workouts": workouts,
    }))
}
