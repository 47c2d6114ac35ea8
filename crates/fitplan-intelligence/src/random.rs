// ABOUTME: Injectable random source used by perturbation and dataset sampling
// ABOUTME: Blanket-implemented for every rand::Rng so seeded ChaCha streams plug in directly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! Random source abstraction.
//!
//! Generation code never touches process-wide random state. Callers pass a
//! [`RandomSource`] explicitly; any `rand::Rng` qualifies, and
//! [`seeded_rng`] gives the reproducible stream used by the CLI.

use fitplan_core::errors::{AppError, AppResult};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Uniform float and bounded integer draws
pub trait RandomSource {
    /// Uniform float in `[0, 1)`
    fn next_unit(&mut self) -> f64;

    /// Uniform integer in `[0, upper)`; returns 0 when `upper` is 0
    fn next_below(&mut self, upper: u32) -> u32;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }

    fn next_below(&mut self, upper: u32) -> u32 {
        if upper == 0 {
            return 0;
        }
        self.gen_range(0..upper)
    }
}

/// Deterministic stream for a given seed
#[must_use]
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Bounded integer draw that rejects sources breaking the `[0, upper)` contract
///
/// # Errors
///
/// - `InvalidArgument` if `upper` is 0
/// - `InternalError` if the source returns a value at or above `upper`
pub fn draw_below<R: RandomSource + ?Sized>(rng: &mut R, upper: u32) -> AppResult<u32> {
    if upper == 0 {
        return Err(AppError::invalid_argument("cannot draw from an empty range"));
    }
    let value = rng.next_below(upper);
    if value >= upper {
        return Err(AppError::internal(format!(
            "random source returned {value}, outside [0, {upper})"
        )));
    }
    Ok(value)
}

/// Unit draw that rejects values outside `[0, 1)`
///
/// # Errors
///
/// Returns `InternalError` if the source returns a value outside `[0, 1)`
pub fn draw_unit<R: RandomSource + ?Sized>(rng: &mut R) -> AppResult<f64> {
    let value = rng.next_unit();
    if (0.0..1.0).contains(&value) {
        Ok(value)
    } else {
        Err(AppError::internal(format!(
            "random source returned {value}, outside [0, 1)"
        )))
    }
}

/// Uniform float in `[low, high)`
///
/// # Errors
///
/// Returns `InternalError` if the source breaks its unit contract
pub fn uniform_between<R: RandomSource + ?Sized>(
    rng: &mut R,
    low: f64,
    high: f64,
) -> AppResult<f64> {
    Ok(draw_unit(rng)?.mul_add(high - low, low))
}

/// Uniform pick from a slice; `None` when it is empty
///
/// # Errors
///
/// Returns `InternalError` if the source breaks its bound
pub fn pick<T: Copy, R: RandomSource + ?Sized>(rng: &mut R, options: &[T]) -> AppResult<Option<T>> {
    if options.is_empty() {
        return Ok(None);
    }
    let len = u32::try_from(options.len())
        .map_err(|_| AppError::invalid_argument("too many options to pick from"))?;
    let index = draw_below(rng, len)? as usize;
    Ok(options.get(index).copied())
}
