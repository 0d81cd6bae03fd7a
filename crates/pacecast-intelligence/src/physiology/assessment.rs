// ABOUTME: Maps the adaptation ratio and data sufficiency to a user-facing status
// ABOUTME: Fixed ratio thresholds with one canned message per status
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacecast Contributors

use super::trajectory::{BandResponse, PhysiologyTrajectoryModel};
use pacecast_core::models::{AssessmentResult, AssessmentStatus, PhysiologyTrackingState};

/// Ratio at or above which adaptation is excellent
pub const EXCELLENT_MIN_RATIO: f64 = 1.5;
/// Ratio at or above which adaptation is good
pub const GOOD_MIN_RATIO: f64 = 1.3;
/// Ratio strictly above which adaptation is on track
pub const ON_TRACK_MIN_RATIO: f64 = 0.7;
/// Ratio at or above which adaptation is slow rather than concerning
pub const SLOW_MIN_RATIO: f64 = 0.5;

/// Assessment of a tracking snapshot
pub struct AssessmentEngine;

impl AssessmentEngine {
    /// Assess a tracking state at the given training week
    ///
    /// Rules in priority order:
    /// 1. no initial LT and no initial `VO2max` → `NeedsData`
    /// 2. week below the band's minimum weeks for change → `NeedsData`
    /// 3. otherwise the status for `current_adaptation_ratio`
    #[must_use]
    pub fn assess(state: &PhysiologyTrackingState, current_week: u32) -> AssessmentResult {
        if state.initial_lt.is_none() && state.initial_vo2.is_none() {
            return Self::needs_data();
        }

        let band = PhysiologyTrajectoryModel::ability_band(state.baseline_vdot);
        if current_week < BandResponse::for_band(band).min_weeks_for_change {
            return Self::needs_data();
        }

        Self::status_for_ratio(state.current_adaptation_ratio).map_or_else(
            Self::needs_data,
            |status| AssessmentResult {
                status,
                has_sufficient_data: true,
                message: Self::message(status).to_owned(),
            },
        )
    }

    /// Status for a ratio, `None` for a non-finite ratio
    #[must_use]
    pub fn status_for_ratio(ratio: f64) -> Option<AssessmentStatus> {
        if !ratio.is_finite() {
            return None;
        }
        let status = if ratio >= EXCELLENT_MIN_RATIO {
            AssessmentStatus::Excellent
        } else if ratio >= GOOD_MIN_RATIO {
            AssessmentStatus::Good
        } else if ratio > ON_TRACK_MIN_RATIO {
            AssessmentStatus::OnTrack
        } else if ratio >= SLOW_MIN_RATIO {
            AssessmentStatus::Slow
        } else {
            AssessmentStatus::Concerning
        };
        Some(status)
    }

    /// Canned message for a status
    #[must_use]
    pub const fn message(status: AssessmentStatus) -> &'static str {
        match status {
            AssessmentStatus::NeedsData => {
                "Keep logging threshold pace or VO2max readings. A few more weeks of data are needed before your response to training can be judged."
            }
            AssessmentStatus::Excellent => {
                "You are adapting well ahead of expectations. Your forecast has been raised to match."
            }
            AssessmentStatus::Good => {
                "You are adapting faster than expected. Keep the current training load."
            }
            AssessmentStatus::OnTrack => {
                "Your fitness is improving as expected for your level."
            }
            AssessmentStatus::Slow => {
                "Improvement is slower than expected. Check sleep, recovery and easy-day pacing."
            }
            AssessmentStatus::Concerning => {
                "Measurements show little improvement. Consider reducing load and reviewing recovery before the next block."
            }
        }
    }

    fn needs_data() -> AssessmentResult {
        AssessmentResult {
            status: AssessmentStatus::NeedsData,
            has_sufficient_data: false,
            message: Self::message(AssessmentStatus::NeedsData).to_owned(),
        }
    }
}
