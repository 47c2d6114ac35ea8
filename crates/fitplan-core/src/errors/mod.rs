// ABOUTME: Unified error handling system for the Fitplan workspace
// ABOUTME: Defines error codes, the AppError type, and constructor helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! # Unified Error Handling System
//!
//! Every fallible operation in the workspace returns [`AppResult`]. Errors
//! carry a stable [`ErrorCode`] so callers (the CLI, tests, an embedding
//! service) can branch on the failure class without string matching.

use std::error::Error as StdError;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes used throughout the workspace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// An argument was outside its documented domain
    #[serde(rename = "INVALID_ARGUMENT")]
    InvalidArgument = 3000,
    /// A textual value could not be parsed
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat = 3002,

    // Model collaboration (5000-5999)
    /// The predictor returned a distribution that violates its contract
    #[serde(rename = "INVALID_MODEL_OUTPUT")]
    InvalidModelOutput = 5000,
    /// The predictor itself reported a failure
    #[serde(rename = "PREDICTOR_FAILED")]
    PredictorFailed = 5001,

    // Configuration (6000-6999)
    /// Configuration value is present but invalid
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// A dataset sink refused a sample
    #[serde(rename = "DATASET_SINK_FAILED")]
    DatasetSinkFailed = 9002,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidArgument => "An argument was outside its valid range",
            Self::InvalidFormat => "The provided value has an invalid format",
            Self::InvalidModelOutput => "The predictor returned a malformed probability distribution",
            Self::PredictorFailed => "The predictor failed to produce a distribution",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
            Self::DatasetSinkFailed => "The dataset sink rejected a sample",
        }
    }
}

/// Unified application error
#[derive(Debug, Error)]
#[error("{code:?}: {message}")]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Attach an underlying error for chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Argument outside its valid domain
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidArgument, message)
    }

    /// Value that could not be parsed
    #[must_use]
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidFormat, message)
    }

    /// Malformed predictor distribution
    #[must_use]
    pub fn invalid_model_output(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidModelOutput, message)
    }

    /// Predictor-reported failure
    #[must_use]
    pub fn predictor_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::PredictorFailed, message)
    }

    /// Invalid configuration value
    #[must_use]
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Dataset sink rejected a sample
    #[must_use]
    pub fn sink_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatasetSinkFailed, message)
    }

    /// Internal error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
