// ABOUTME: Core types and constants for the Pacecast training forecaster
// ABOUTME: Foundation crate with error handling, physiological constants and data records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacecast Contributors

#![deny(unsafe_code)]

//! # Pacecast Core
//!
//! Foundation crate shared by the forecasting engine and its front ends.
//! It changes rarely, so the algorithm crate can be rebuilt on its own.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode` and the `AppResult` alias
//! - **constants**: race distances and physiological model constants
//! - **models**: immutable value records exchanged with callers

/// Unified error handling with standard error codes
pub mod errors;

/// Race distances and physiological model constants
pub mod constants;

/// Plain-data records (personal bests, measurements, paces, forecasts)
pub mod models;
