// ABOUTME: Configuration validation error types
// ABOUTME: ConfigError covers out-of-range coefficients and invalid ratio sets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macro Goals Contributors

use thiserror::Error;

/// Configuration-related errors
///
/// The calculation pipeline itself is infallible; these errors surface only
/// from [`crate::config::NutritionConfig::validate`] and the per-section
/// validators, which applications call once at configuration load time.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Value outside acceptable range (e.g., non-positive activity factor)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Percentage weights that must sum to 100 do not
    #[error("Invalid weights: {0}")]
    InvalidWeights(&'static str),

    /// Value out of the documented bounds for its field
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}
