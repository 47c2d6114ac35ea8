// ABOUTME: Shared test utilities and fixtures for fitplan integration tests
// ABOUTME: Provides quiet logging setup and deterministic predictor stubs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `fitplan`

use std::cell::{Cell, RefCell};
use std::sync::Once;

use fitplan::constants::week::HISTORY_DAYS;
use fitplan::errors::{AppError, AppResult};
use fitplan::intelligence::Predictor;
use fitplan::models::{FitnessLevel, Goal, UserFeatures, WorkoutCatalog, WorkoutCode};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Features for a 30-year-old
pub const fn features(level: FitnessLevel, goal: Goal) -> UserFeatures {
    UserFeatures::new(30, level, goal)
}

/// All probability mass on one index
pub struct OneHotPredictor {
    pub index: usize,
    pub size: usize,
}

impl OneHotPredictor {
    pub const fn new(index: usize, catalog: WorkoutCatalog) -> Self {
        Self {
            index,
            size: catalog.size() as usize,
        }
    }
}

impl Predictor for OneHotPredictor {
    fn predict(
        &self,
        _history: &[WorkoutCode; HISTORY_DAYS],
        _features: &UserFeatures,
    ) -> AppResult<Vec<f64>> {
        let mut distribution = vec![0.0; self.size];
        distribution[self.index] = 1.0;
        Ok(distribution)
    }
}

/// Returns the same distribution every call
pub struct FixedPredictor(pub Vec<f64>);

impl Predictor for FixedPredictor {
    fn predict(
        &self,
        _history: &[WorkoutCode; HISTORY_DAYS],
        _features: &UserFeatures,
    ) -> AppResult<Vec<f64>> {
        Ok(self.0.clone())
    }
}

/// Errors on every call and counts how often it was asked
#[derive(Default)]
pub struct FailingPredictor {
    pub calls: Cell<usize>,
}

impl Predictor for FailingPredictor {
    fn predict(
        &self,
        _history: &[WorkoutCode; HISTORY_DAYS],
        _features: &UserFeatures,
    ) -> AppResult<Vec<f64>> {
        self.calls.set(self.calls.get() + 1);
        Err(AppError::internal("inference backend unavailable"))
    }
}

/// Records every history window it is shown and predicts the last day again
#[derive(Default)]
pub struct EchoPredictor {
    pub windows: RefCell<Vec<[WorkoutCode; HISTORY_DAYS]>>,
}

impl Predictor for EchoPredictor {
    fn predict(
        &self,
        history: &[WorkoutCode; HISTORY_DAYS],
        _features: &UserFeatures,
    ) -> AppResult<Vec<f64>> {
        self.windows.borrow_mut().push(*history);
        let mut distribution = vec![0.0; WorkoutCatalog::Base.size() as usize];
        distribution[history[HISTORY_DAYS - 1].index()] = 1.0;
        Ok(distribution)
    }
}
