// ABOUTME: Smoothed measured-vs-expected physiological improvement ratio
// ABOUTME: Explicit fold over ordered measurements with exponential smoothing and clamping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacecast Contributors

//! Adaptation ratio
//!
//! Per measurement:
//!
//! - `ltRatio  = (initialLT − observedLT) / (initialLT − expectedLT)`
//! - `vo2Ratio = (observedVO2 − initialVO2) / (expectedVO2 − initialVO2)`
//!
//! The available metric ratios are averaged, then folded oldest to newest:
//! `rᵢ = α·mᵢ + (1 − α)·rᵢ₋₁`, seeded with the default ratio.

use super::trajectory::PhysiologyTrajectoryModel;
use crate::config::AdaptationConfig;
use pacecast_core::models::PhysiologyMeasurement;
use tracing::{debug, trace};

/// Computes how fast a runner responds to training relative to expectation
#[derive(Debug, Clone, Copy, Default)]
pub struct AdaptationRatioTracker {
    config: AdaptationConfig,
}

impl AdaptationRatioTracker {
    /// Create a tracker with the given smoothing configuration
    #[must_use]
    pub const fn new(config: AdaptationConfig) -> Self {
        Self { config }
    }

    /// Smoothed, clamped adaptation ratio for an ordered measurement list
    ///
    /// An empty list, or one with no usable metric anywhere, returns the
    /// default ratio (1.0).
    #[must_use]
    pub fn compute_ratio(
        &self,
        measurements: &[PhysiologyMeasurement],
        initial_lt: Option<f64>,
        initial_vo2: Option<f64>,
        baseline_vdot: f64,
    ) -> f64 {
        let alpha = self.config.smoothing_factor;
        let smoothed = measurements
            .iter()
            .filter_map(|m| self.measurement_ratio(m, initial_lt, initial_vo2, baseline_vdot))
            .fold(self.config.default_ratio, |previous, ratio| {
                alpha.mul_add(ratio, (1.0 - alpha) * previous)
            });

        self.clamp(smoothed)
    }

    /// Unsmoothed ratio for a single measurement
    ///
    /// Returns `None` when no metric of the measurement can be compared:
    /// missing initial or observed value, or an expected improvement too
    /// small to divide by (always the case at week 1).
    #[must_use]
    pub fn measurement_ratio(
        &self,
        measurement: &PhysiologyMeasurement,
        initial_lt: Option<f64>,
        initial_vo2: Option<f64>,
        baseline_vdot: f64,
    ) -> Option<f64> {
        let expected = PhysiologyTrajectoryModel::expected_at(
            initial_lt,
            initial_vo2,
            measurement.week,
            baseline_vdot,
        );

        // LT pace improves downward, VO2max upward
        let lt_ratio = self.metric_ratio(
            initial_lt,
            measurement.lt_pace_sec_per_km,
            expected.expected_lt,
            |initial, value| initial - value,
        );
        let vo2_ratio = self.metric_ratio(
            initial_vo2,
            measurement.vo2max,
            expected.expected_vo2,
            |initial, value| value - initial,
        );

        let ratio = match (lt_ratio, vo2_ratio) {
            (Some(lt), Some(vo2)) => Some((lt + vo2) / 2.0),
            (Some(single), None) | (None, Some(single)) => Some(single),
            (None, None) => None,
        };

        trace!(
            week = measurement.week,
            ?lt_ratio,
            ?vo2_ratio,
            ?ratio,
            "Measurement adaptation ratio"
        );
        ratio
    }

    fn metric_ratio(
        &self,
        initial: Option<f64>,
        observed: Option<f64>,
        expected: Option<f64>,
        improvement: impl Fn(f64, f64) -> f64,
    ) -> Option<f64> {
        let initial = initial.filter(|v| v.is_finite())?;
        let observed = observed.filter(|v| v.is_finite())?;
        let expected = expected.filter(|v| v.is_finite())?;

        let expected_improvement = improvement(initial, expected);
        if expected_improvement.abs() < self.config.min_expected_delta {
            return None;
        }

        Some(improvement(initial, observed) / expected_improvement).filter(|r| r.is_finite())
    }

    fn clamp(&self, ratio: f64) -> f64 {
        if !ratio.is_finite() {
            return self.config.default_ratio;
        }
        let clamped = ratio.clamp(self.config.min_ratio, self.config.max_ratio);
        if (clamped - ratio).abs() > f64::EPSILON {
            debug!(ratio, clamped, "Adaptation ratio clamped");
        }
        clamped
    }
}
