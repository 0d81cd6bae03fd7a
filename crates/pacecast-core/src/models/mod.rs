// ABOUTME: Plain-data records exchanged between the engine and its callers
// ABOUTME: Re-exports race, physiology, training and assessment value types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacecast Contributors

//! Data models
//!
//! Every record here is an immutable value created fresh per calculation.
//! Field names serialize as `camelCase` so persistence and UI layers can
//! store them as ordinary JSON.

/// Race distances, personal bests and recent races
pub mod race;

/// Physiology measurements, tracking state and expected trajectory points
pub mod physiology;

/// Pace zones, runner classification, ability bands and forecasts
pub mod training;

/// Adaptation assessment status and result
pub mod assessment;

pub use assessment::{AssessmentResult, AssessmentStatus};
pub use physiology::{
    ExpectedPhysiologyPoint, MeasurementSource, PhysiologyMeasurement, PhysiologyTrackingState,
};
pub use race::{PersonalBests, RaceDistance, RecentRace};
pub use training::{AbilityBand, ForecastResult, Paces, RunnerType};
