// ABOUTME: Derives five training pace zones from a fitness index or measured threshold pace
// ABOUTME: Zones are fixed ratios of threshold pace so r < i < t < m < e always holds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacecast Contributors

use crate::algorithms::PerformanceModel;
use crate::config::PaceZoneConfig;
use pacecast_core::errors::{require_positive, AppResult};
use pacecast_core::models::Paces;
use tracing::debug;

/// Expands a fitness index, or a directly measured threshold pace, into pace zones
#[derive(Debug, Clone, Copy, Default)]
pub struct PaceZoneDeriver {
    config: PaceZoneConfig,
}

impl PaceZoneDeriver {
    /// Create a deriver with the given zone ratios
    #[must_use]
    pub const fn new(config: PaceZoneConfig) -> Self {
        Self { config }
    }

    /// Training paces in seconds per km
    ///
    /// A supplied `lt_pace` is used as threshold pace as-is; otherwise
    /// threshold is the pace the fitness index sustains for the
    /// threshold-equivalent duration (one hour by default).
    ///
    /// # Errors
    ///
    /// Returns an error if neither a usable `lt_pace` nor a positive
    /// fitness index is available
    pub fn derive_paces(&self, fitness_index: f64, lt_pace: Option<f64>) -> AppResult<Paces> {
        let threshold = match lt_pace.filter(|pace| pace.is_finite() && *pace > 0.0) {
            Some(pace) => pace,
            None => PerformanceModel::pace_for_duration(
                fitness_index,
                self.config.threshold_duration_minutes,
            )?,
        };
        self.from_threshold(threshold)
    }

    /// Training paces around a known threshold pace
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if the threshold pace is not a positive finite number
    pub fn from_threshold(&self, threshold_pace: f64) -> AppResult<Paces> {
        let threshold = require_positive(threshold_pace, "Threshold pace")?;
        let paces = Paces {
            easy: threshold * self.config.easy_ratio,
            threshold,
            interval: threshold * self.config.interval_ratio,
            marathon: threshold * self.config.marathon_ratio,
            repetition: threshold * self.config.repetition_ratio,
        };
        debug!(threshold, "Derived pace zones");
        Ok(paces)
    }
}
