// ABOUTME: Unified error type and error codes for the forecasting engine
// ABOUTME: Provides AppError constructors and the AppResult alias used across crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacecast Contributors

//! # Unified Error Handling
//!
//! The engine prefers sentinel values (default exponent, `None` prediction,
//! neutral ratio) over errors. `AppError` is reserved for inputs no model can
//! make sense of, such as a zero race time, and for failures at the process
//! boundary (unreadable files, malformed JSON, bad configuration).

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// Standard error codes used throughout the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    #[serde(rename = "INVALID_INPUT")]
    /// Input cannot be evaluated by the model
    InvalidInput = 3000,
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    /// Numeric input lies outside the domain of the model
    ValueOutOfRange = 3003,

    // Configuration (6000-6999)
    #[serde(rename = "CONFIG_ERROR")]
    /// Configuration could not be loaded
    ConfigError = 6000,
    #[serde(rename = "CONFIG_INVALID")]
    /// Configuration failed validation
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    #[serde(rename = "INTERNAL_ERROR")]
    /// Numeric routine failed to converge or produced a non-finite value
    InternalError = 9000,
    #[serde(rename = "STORAGE_ERROR")]
    /// Input file could not be read
    StorageError = 9002,
    #[serde(rename = "SERIALIZATION_ERROR")]
    /// Record could not be encoded or decoded
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::ConfigError => "Configuration error encountered",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal calculation error occurred",
            Self::StorageError => "Storage operation failed",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }
}

/// Unified error type for the engine
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Value outside the model domain
    #[must_use]
    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, message)
    }

    /// Internal calculation error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Storage error
    #[must_use]
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    /// Serialization error
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization(error.to_string())
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Reject non-finite or non-positive model inputs
///
/// # Errors
///
/// Returns `AppError::InvalidInput` naming `what` when `value` is `NaN`,
/// infinite, zero or negative
pub fn require_positive(value: f64, what: &str) -> AppResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        debug!(input = what, value, "Rejected model input");
        Err(AppError::invalid_input(format!(
            "{what} must be a positive finite number, got {value}"
        )))
    }
}
