// ABOUTME: `dataset` and `profiles` subcommands summarising synthetic training data
// ABOUTME: Streams samples into summary sinks without holding the full dataset
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use anyhow::Result;
use fitplan::errors::AppResult;
use fitplan::intelligence::dataset::sample_profiles;
use fitplan::intelligence::{
    drain_into, seeded_rng, DatasetSink, GeneratorConfig, ProfileDatasetSummary,
    SequenceDatasetSummary, SequenceGenerator, SequenceSample,
};
use serde_json::json;

use super::print_json;

/// Keeps the first `limit` samples
struct Preview {
    limit: usize,
    samples: Vec<SequenceSample>,
}

impl DatasetSink<SequenceSample> for Preview {
    fn accept(&mut self, sample: SequenceSample) -> AppResult<()> {
        if self.samples.len() < self.limit {
            self.samples.push(sample);
        }
        Ok(())
    }
}

pub fn run(config: &GeneratorConfig, preview: usize) -> Result<()> {
    let generator = SequenceGenerator::standard(config.catalog);
    let mut rng = seeded_rng(config.seed);
    let samples = generator.sample_uniform_dataset(
        &mut rng,
        config.sample_count,
        &config.ranges,
        config.perturbation_probability,
    )?;

    let mut sinks = (
        SequenceDatasetSummary::with_generator(generator.clone()),
        Preview {
            limit: preview,
            samples: Vec::with_capacity(preview),
        },
    );
    drain_into(samples, &mut sinks)?;
    let (summary, preview) = sinks;

    print_json(&json!({
        "config": config,
        "summary": summary,
        "preview": preview.samples,
    }))
}

pub fn run_profiles(config: &GeneratorConfig) -> Result<()> {
    let mut rng = seeded_rng(config.seed);
    let profiles = sample_profiles(&mut rng, config.profile_count, config.ranges)?;

    let mut summary = ProfileDatasetSummary::default();
    drain_into(profiles, &mut summary)?;

    print_json(&json!({
        "config": config,
        "summary": summary,
    }))
}
