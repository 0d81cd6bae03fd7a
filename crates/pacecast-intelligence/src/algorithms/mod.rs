// ABOUTME: Leaf algorithms shared by every forecasting component
// ABOUTME: Performance model, fade exponent regression and runner classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacecast Contributors

//! Algorithm Module
//!
//! Leaf models with no dependency on other engine components:
//!
//! - `vdot`: distance/time ⇄ fitness index
//! - `fatigue`: personal Riegel exponent from personal bests
//! - `runner_type`: speed/balanced/endurance bucketing of that exponent

pub mod fatigue;
pub mod runner_type;
pub mod vdot;

pub use fatigue::{FadeFit, FatigueRegression};
pub use runner_type::RunnerClassifier;
pub use vdot::{PerformanceModel, RaceEquivalent};
