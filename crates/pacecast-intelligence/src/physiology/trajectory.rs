// ABOUTME: Expected lactate-threshold pace and VO2max per training week by ability band
// ABOUTME: Geometric weekly gains with symmetric confidence bands and a restartable lazy trajectory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacecast Contributors

//! Physiology trajectory model
//!
//! For week `w ≥ 1`:
//!
//! - `expectedLT  = initialLT  × (1 − ltWeeklyGain)^(w − 1)`
//! - `expectedVO2 = initialVO2 × (1 + vo2WeeklyGain)^(w − 1)`
//!
//! Bounds are the expected value scaled by `1 ± confidenceInterval`. For LT
//! pace the lower bound is the faster side.

use pacecast_core::models::{AbilityBand, ExpectedPhysiologyPoint};
use serde::{Deserialize, Serialize};

/// Training-response rates for one ability band
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BandResponse {
    /// Fractional `VO2max` increase per week
    pub vo2_weekly_gain: f64,
    /// Fractional LT pace decrease per week
    pub lt_weekly_gain: f64,
    /// Weeks before measurable change is expected
    pub min_weeks_for_change: u32,
    /// Relative half-width of the confidence band
    pub confidence_interval: f64,
}

impl BandResponse {
    /// Response rates for a band
    ///
    /// Lower bands improve faster from a lower base but need fewer weeks
    /// before change shows up in measurements.
    #[must_use]
    pub const fn for_band(band: AbilityBand) -> Self {
        let (vo2_weekly_gain, lt_weekly_gain, min_weeks_for_change, confidence_interval) =
            match band {
                AbilityBand::Beginner => (0.010, 0.008, 3, 0.06),
                AbilityBand::Novice => (0.008, 0.007, 3, 0.05),
                AbilityBand::Intermediate => (0.006, 0.005, 4, 0.04),
                AbilityBand::Advanced => (0.004, 0.003, 5, 0.03),
                AbilityBand::Elite => (0.002, 0.0015, 6, 0.025),
            };
        Self {
            vo2_weekly_gain,
            lt_weekly_gain,
            min_weeks_for_change,
            confidence_interval,
        }
    }
}

/// Projects expected physiology from initial readings
pub struct PhysiologyTrajectoryModel;

impl PhysiologyTrajectoryModel {
    /// Ability band for a fitness index
    #[must_use]
    pub fn ability_band(vdot: f64) -> AbilityBand {
        AbilityBand::from_vdot(vdot)
    }

    /// Expected physiology at a training week
    ///
    /// Week 1 (and week 0) return the initial values exactly. A `None`
    /// initial value yields `None` for that metric and its bounds only.
    #[must_use]
    pub fn expected_at(
        initial_lt: Option<f64>,
        initial_vo2: Option<f64>,
        week: u32,
        baseline_vdot: f64,
    ) -> ExpectedPhysiologyPoint {
        let response = BandResponse::for_band(Self::ability_band(baseline_vdot));
        let ci = response.confidence_interval;

        // No training has happened yet at week 1
        let (expected_lt, expected_vo2) = if week <= 1 {
            (initial_lt, initial_vo2)
        } else {
            let elapsed = f64::from(week - 1);
            (
                initial_lt.map(|lt| lt * (1.0 - response.lt_weekly_gain).powf(elapsed)),
                initial_vo2.map(|vo2| vo2 * (1.0 + response.vo2_weekly_gain).powf(elapsed)),
            )
        };

        ExpectedPhysiologyPoint {
            week,
            expected_lt,
            expected_vo2,
            lt_lower_bound: expected_lt.map(|lt| lt * (1.0 - ci)),
            lt_upper_bound: expected_lt.map(|lt| lt * (1.0 + ci)),
            vo2_lower_bound: expected_vo2.map(|vo2| vo2 * (1.0 - ci)),
            vo2_upper_bound: expected_vo2.map(|vo2| vo2 * (1.0 + ci)),
        }
    }

    /// Trajectory over weeks `1..=total_weeks`
    ///
    /// Nothing is computed until the trajectory is iterated.
    #[must_use]
    pub const fn generate_trajectory(
        initial_lt: Option<f64>,
        initial_vo2: Option<f64>,
        total_weeks: u32,
        baseline_vdot: f64,
    ) -> Trajectory {
        Trajectory {
            initial_lt,
            initial_vo2,
            total_weeks,
            baseline_vdot,
        }
    }
}

/// Lazy, finite week-by-week projection
///
/// Each call to [`Trajectory::iter`] starts again from week 1, and each
/// point equals [`PhysiologyTrajectoryModel::expected_at`] for its week.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trajectory {
    initial_lt: Option<f64>,
    initial_vo2: Option<f64>,
    total_weeks: u32,
    baseline_vdot: f64,
}

impl Trajectory {
    /// Number of weeks in the trajectory
    #[must_use]
    pub const fn total_weeks(&self) -> u32 {
        self.total_weeks
    }

    /// Iterate from week 1
    #[must_use]
    pub const fn iter(&self) -> TrajectoryIter {
        TrajectoryIter {
            trajectory: *self,
            next_week: 1,
        }
    }
}

impl IntoIterator for &Trajectory {
    type Item = ExpectedPhysiologyPoint;
    type IntoIter = TrajectoryIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a [`Trajectory`]
#[derive(Debug, Clone)]
pub struct TrajectoryIter {
    trajectory: Trajectory,
    next_week: u64,
}

impl Iterator for TrajectoryIter {
    type Item = ExpectedPhysiologyPoint;

    fn next(&mut self) -> Option<Self::Item> {
        let week = u32::try_from(self.next_week)
            .ok()
            .filter(|week| *week <= self.trajectory.total_weeks)?;
        self.next_week += 1;
        Some(PhysiologyTrajectoryModel::expected_at(
            self.trajectory.initial_lt,
            self.trajectory.initial_vo2,
            week,
            self.trajectory.baseline_vdot,
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining =
            (u64::from(self.trajectory.total_weeks) + 1).saturating_sub(self.next_week);
        let remaining = usize::try_from(remaining).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TrajectoryIter {}
