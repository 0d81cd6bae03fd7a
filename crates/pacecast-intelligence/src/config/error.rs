// ABOUTME: Configuration error types for engine tuning validation
// ABOUTME: Defines error variants for invalid ranges, parse failures and bad weights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacecast Contributors

//! Configuration error types for engine tuning validation.

use pacecast_core::errors::{AppError, ErrorCode};
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Values that must be ordered are not (e.g., pace zone ratios)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Failed to parse an environment override
    #[error("Parse error: {0}")]
    Parse(String),

    /// Weights or factors outside their meaningful interval
    #[error("Invalid weights: {0}")]
    InvalidWeights(&'static str),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        match error {
            ConfigError::Parse(_) => Self::config(error.to_string()),
            _ => Self::new(ErrorCode::ConfigInvalid, error.to_string()),
        }
    }
}
