// ABOUTME: Produces updated physiology tracking snapshots as measurements arrive
// ABOUTME: Appends the reading, recomputes the ratio and refreshes the assessment without mutating input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacecast Contributors

use super::adaptation::AdaptationRatioTracker;
use super::assessment::AssessmentEngine;
use crate::config::AdaptationConfig;
use pacecast_core::models::{PhysiologyMeasurement, PhysiologyTrackingState};
use tracing::info;

/// Snapshot-in, snapshot-out physiology tracking
///
/// The caller owns and persists every snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhysiologyTracker {
    ratio_tracker: AdaptationRatioTracker,
}

impl PhysiologyTracker {
    /// Create a tracker with the given adaptation configuration
    #[must_use]
    pub const fn new(config: AdaptationConfig) -> Self {
        Self {
            ratio_tracker: AdaptationRatioTracker::new(config),
        }
    }

    /// New snapshot with `measurement` appended and derived fields refreshed
    #[must_use]
    pub fn record_measurement(
        &self,
        state: &PhysiologyTrackingState,
        measurement: PhysiologyMeasurement,
        current_week: u32,
    ) -> PhysiologyTrackingState {
        let mut appended = state.clone();
        appended.measurements.push(measurement);
        let updated = self.refresh(&appended, current_week);

        info!(
            week = measurement.week,
            source = ?measurement.source,
            ratio = updated.current_adaptation_ratio,
            "Recorded physiology measurement"
        );
        updated
    }

    /// New snapshot with ratio and assessment recomputed from its measurements
    #[must_use]
    pub fn refresh(
        &self,
        state: &PhysiologyTrackingState,
        current_week: u32,
    ) -> PhysiologyTrackingState {
        let current_adaptation_ratio = self.ratio_tracker.compute_ratio(
            &state.measurements,
            state.initial_lt,
            state.initial_vo2,
            state.baseline_vdot,
        );

        let mut updated = PhysiologyTrackingState {
            current_adaptation_ratio,
            ..state.clone()
        };
        updated.last_assessment = Some(AssessmentEngine::assess(&updated, current_week));
        updated
    }
}
