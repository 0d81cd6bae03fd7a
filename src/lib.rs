// ABOUTME: Main library entry point for the Pacecast running forecaster
// ABOUTME: Re-exports the core and intelligence crates and adds logging and input loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacecast Contributors

#![deny(unsafe_code)]

//! # Pacecast
//!
//! Adaptive fitness forecasting for runners. From personal bests and
//! optional physiology readings it estimates current fitness, predicts
//! race times, derives training paces, projects expected physiology week
//! by week and forecasts fitness at the end of a training plan.
//!
//! ## Architecture
//!
//! - **core** (`pacecast_core`): errors, constants and plain-data records
//! - **intelligence** (`pacecast_intelligence`): the forecasting models
//! - **logging**: tracing subscriber setup for front ends
//! - **input**: JSON loading of profiles and tracking snapshots
//!
//! ## Example Usage
//!
//! ```rust
//! use pacecast::pacecast_intelligence::PerformanceModel;
//!
//! let vdot = PerformanceModel::to_fitness_index(5000.0, 1200.0).unwrap();
//! let marathon = PerformanceModel::to_time(42195.0, vdot).unwrap();
//! assert!(marathon > 3.0 * 3600.0);
//! ```

pub use pacecast_core;
pub use pacecast_intelligence;

/// JSON loading of profiles and tracking snapshots
pub mod input;

/// Structured logging configuration
pub mod logging;
