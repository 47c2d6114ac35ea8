// ABOUTME: Core types and constants for the Fitplan workout sequencing workspace
// ABOUTME: Foundation crate with error handling, workout catalog models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

#![deny(unsafe_code)]

//! # Fitplan Core
//!
//! Foundation crate providing shared types and constants for the Fitplan
//! workspace. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode` and `AppResult`
//! - **constants**: Week shape, catalog sizes and dataset defaults
//! - **models**: Fitness levels, goals, workout codes and week sequences

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`FitnessLevel`, `Goal`, `WorkoutCode`, `WeekSequence`, ...)
pub mod models;
