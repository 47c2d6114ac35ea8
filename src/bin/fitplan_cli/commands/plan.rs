// ABOUTME: `plan` subcommand producing a full weekly plan with exercises and diet
// ABOUTME: Uses the freshly evaluated transition model so reported accuracy is measured
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use anyhow::Result;
use fitplan::intelligence::{seeded_rng, GeneratorConfig};
use fitplan::plans::{ModelInfo, PlanRequest, WeeklyPlanner};

use super::{print_json, train_transition_model};

pub fn run(config: &GeneratorConfig, request: &PlanRequest) -> Result<()> {
    let mut rng = seeded_rng(config.seed);
    let trained = train_transition_model(config, &mut rng)?;

    let model_info = ModelInfo::unevaluated("Transition Model", env!("CARGO_PKG_VERSION"))
        .with_evaluation(&trained.report);
    let planner = WeeklyPlanner::new(trained.generator, trained.model, model_info);

    let plan = planner.plan(request, &mut rng)?;
    print_json(&plan)
}
