// ABOUTME: Physiology tracking module: expected trajectory, adaptation ratio and assessment
// ABOUTME: Compares measured threshold pace and VO2max against band-specific expectations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacecast Contributors

//! Physiology Module
//!
//! - `trajectory`: week-by-week expected LT pace and `VO2max` with bounds
//! - `adaptation`: smoothed measured-vs-expected improvement ratio
//! - `assessment`: user-facing status for a ratio
//! - `tracker`: returns updated tracking snapshots as measurements arrive

pub mod adaptation;
pub mod assessment;
pub mod tracker;
pub mod trajectory;

pub use adaptation::AdaptationRatioTracker;
pub use assessment::AssessmentEngine;
pub use tracker::PhysiologyTracker;
pub use trajectory::{BandResponse, PhysiologyTrajectoryModel, Trajectory, TrajectoryIter};
