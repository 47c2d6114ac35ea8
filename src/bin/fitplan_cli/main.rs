// ABOUTME: fitplan CLI - base weeks, synthetic datasets, week simulation and full plans
// ABOUTME: Prints JSON to stdout; logs go to stderr through the tracing subscriber
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors
//!
//! Usage:
//! ```bash
//! # Base week for a level/goal pair
//! fitplan-cli base --level beginner --goal weight_loss
//!
//! # Summarise 10k perturbed samples, previewing the first five
//! fitplan-cli dataset --count 10000 --preview 5
//!
//! # Classification profiles
//! fitplan-cli profiles --count 5000
//!
//! # Fit the transition model, report held-out accuracy and simulate a week
//! fitplan-cli simulate --level advanced --goal muscle_gain --age 35
//!
//! # Full weekly plan with diet
//! fitplan-cli plan --age 30 --weight 72 --height 178 --level intermediate \
//!     --goals "build muscle" --allergies "peanut"
//! ```
//!
//! Every generation option falls back to its `FITPLAN_*` environment variable.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use fitplan::intelligence::GeneratorConfig;
use fitplan::logging::LoggingConfig;
use fitplan::models::{FitnessLevel, Goal, WorkoutCatalog};
use fitplan::plans::PlanRequest;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "fitplan-cli",
    about = "Fitplan workout sequence tool",
    long_about = "Generate base training weeks, synthetic datasets, simulated weeks and full weekly plans."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    generation: GenerationArgs,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

/// Overrides for the environment-derived generator configuration
#[derive(Args)]
struct GenerationArgs {
    /// Random seed for reproducible output
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Workout catalog: base (7 codes) or extended (12 codes)
    #[arg(long, global = true)]
    catalog: Option<WorkoutCatalog>,

    /// Per-day substitution probability
    #[arg(long, global = true)]
    probability: Option<f64>,

    /// Number of samples to generate
    #[arg(long, global = true)]
    count: Option<usize>,
}

impl GenerationArgs {
    fn apply(&self, config: &mut GeneratorConfig, profiles: bool) {
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(catalog) = self.catalog {
            config.catalog = catalog;
        }
        if let Some(probability) = self.probability {
            config.perturbation_probability = probability;
        }
        if let Some(count) = self.count {
            if profiles {
                config.profile_count = count;
            } else {
                config.sample_count = count;
            }
        }
    }
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Print the deterministic base week for a level and goal
    Base {
        /// beginner, intermediate or advanced
        #[arg(long)]
        level: FitnessLevel,

        /// `weight_loss`, `muscle_gain` or `general_fitness`
        #[arg(long)]
        goal: Goal,
    },

    /// Generate perturbed sequence samples and print their summary
    Dataset {
        /// Include the first N samples in the output
        #[arg(long, default_value = "0")]
        preview: usize,
    },

    /// Generate classification profiles and print their summary
    Profiles,

    /// Fit the transition model, evaluate it and simulate one week
    Simulate {
        /// beginner, intermediate or advanced
        #[arg(long)]
        level: FitnessLevel,

        /// `weight_loss`, `muscle_gain` or `general_fitness`
        #[arg(long)]
        goal: Goal,

        /// User age in years
        #[arg(long, default_value = "30")]
        age: u32,
    },

    /// Build a full weekly plan with exercises and diet
    Plan {
        /// Age in years
        #[arg(long, default_value = "25")]
        age: u32,

        /// Weight in kg
        #[arg(long, default_value = "70")]
        weight: f64,

        /// Height in cm
        #[arg(long, default_value = "170")]
        height: f64,

        /// beginner, intermediate or advanced
        #[arg(long, default_value = "beginner")]
        level: String,

        /// Free-text goal, e.g. "lose weight" or "build muscle"
        #[arg(long, default_value = "improve fitness")]
        goals: String,

        /// Comma-separated allergies
        #[arg(long, default_value = "")]
        allergies: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let mut config = GeneratorConfig::from_environment()?;
    cli.generation
        .apply(&mut config, matches!(cli.command, Command::Profiles));
    config.validate()?;
    debug!(?config, "generator configuration resolved");

    match cli.command {
        Command::Base { level, goal } => commands::base::run(&config, level, goal),
        Command::Dataset { preview } => commands::dataset::run(&config, preview),
        Command::Profiles => commands::dataset::run_profiles(&config),
        Command::Simulate { level, goal, age } => {
            commands::simulate::run(&config, level, goal, age)
        }
        Command::Plan {
            age,
            weight,
            height,
            level,
            goals,
            allergies,
        } => {
            let request = PlanRequest {
                age,
                weight,
                height,
                fitness_level: level,
                fitness_goals: goals,
                allergies,
            };
            commands::plan::run(&config, &request)
        }
    }
}
