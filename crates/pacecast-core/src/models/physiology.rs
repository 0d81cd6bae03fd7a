// ABOUTME: Physiology measurement, tracking state and expected trajectory point records
// ABOUTME: Nullable metrics are explicit Options checked by every consumer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacecast Contributors

use super::assessment::AssessmentResult;
use serde::{Deserialize, Serialize};

/// Where a physiology measurement came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementSource {
    /// Reported by a sports watch
    #[default]
    Watch,
    /// Entered by hand
    Manual,
    /// Taken from a field or lab test
    Test,
}

/// One physiology reading taken during a training week
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysiologyMeasurement {
    /// Training week the reading belongs to (1-based)
    pub week: u32,
    /// Lactate-threshold pace in seconds per km
    #[serde(default)]
    pub lt_pace_sec_per_km: Option<f64>,
    /// `VO2max` in ml/kg/min
    #[serde(default)]
    pub vo2max: Option<f64>,
    /// Origin of the reading
    #[serde(default)]
    pub source: MeasurementSource,
}

impl PhysiologyMeasurement {
    /// Create a measurement for the given week
    #[must_use]
    pub const fn new(
        week: u32,
        lt_pace_sec_per_km: Option<f64>,
        vo2max: Option<f64>,
        source: MeasurementSource,
    ) -> Self {
        Self {
            week,
            lt_pace_sec_per_km,
            vo2max,
            source,
        }
    }
}

/// Snapshot of a runner's physiology tracking, owned by the caller
///
/// The engine reads snapshots and returns updated copies; it never keeps
/// a reference across calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysiologyTrackingState {
    /// Lactate-threshold pace at the start of the plan (sec/km)
    #[serde(default, rename = "initialLT")]
    pub initial_lt: Option<f64>,
    /// `VO2max` at the start of the plan
    #[serde(default, rename = "initialVO2")]
    pub initial_vo2: Option<f64>,
    /// Fitness index the plan started from
    pub baseline_vdot: f64,
    /// Readings in the order they were recorded
    #[serde(default)]
    pub measurements: Vec<PhysiologyMeasurement>,
    /// Smoothed measured-vs-expected improvement ratio
    #[serde(default = "default_adaptation_ratio")]
    pub current_adaptation_ratio: f64,
    /// Most recent assessment, if one has been made
    #[serde(default)]
    pub last_assessment: Option<AssessmentResult>,
}

const fn default_adaptation_ratio() -> f64 {
    1.0
}

impl PhysiologyTrackingState {
    /// Start tracking with no measurements and a neutral ratio
    #[must_use]
    pub const fn new(initial_lt: Option<f64>, initial_vo2: Option<f64>, baseline_vdot: f64) -> Self {
        Self {
            initial_lt,
            initial_vo2,
            baseline_vdot,
            measurements: Vec::new(),
            current_adaptation_ratio: default_adaptation_ratio(),
            last_assessment: None,
        }
    }
}

/// Model-expected physiology for one training week
///
/// A metric whose initial value is unknown has `None` for its expected
/// value and both bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpectedPhysiologyPoint {
    /// Training week (1-based)
    pub week: u32,
    /// Expected lactate-threshold pace (sec/km)
    #[serde(rename = "expectedLT")]
    pub expected_lt: Option<f64>,
    /// Expected `VO2max`
    #[serde(rename = "expectedVO2")]
    pub expected_vo2: Option<f64>,
    /// Faster edge of the LT confidence band
    #[serde(rename = "ltLowerBound")]
    pub lt_lower_bound: Option<f64>,
    /// Slower edge of the LT confidence band
    #[serde(rename = "ltUpperBound")]
    pub lt_upper_bound: Option<f64>,
    /// Lower edge of the `VO2max` confidence band
    #[serde(rename = "vo2LowerBound")]
    pub vo2_lower_bound: Option<f64>,
    /// Upper edge of the `VO2max` confidence band
    #[serde(rename = "vo2UpperBound")]
    pub vo2_upper_bound: Option<f64>,
}
