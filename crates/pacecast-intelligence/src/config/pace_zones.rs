// ABOUTME: Pace zone ratio configuration relative to threshold pace
// ABOUTME: Empirically tuned ratios kept as data, plus the threshold-equivalent duration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacecast Contributors

use serde::{Deserialize, Serialize};

/// Default zone ratios (multiples of threshold pace, sec/km)
pub mod defaults {
    /// Easy pace ratio
    pub const EASY_RATIO: f64 = 1.15;
    /// Marathon pace ratio
    pub const MARATHON_RATIO: f64 = 1.05;
    /// Interval pace ratio
    pub const INTERVAL_RATIO: f64 = 0.93;
    /// Repetition pace ratio
    pub const REPETITION_RATIO: f64 = 0.88;
    /// Race duration whose pace defines threshold (minutes)
    pub const THRESHOLD_DURATION_MINUTES: f64 = 60.0;
}

/// Pace zone configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaceZoneConfig {
    /// Easy pace as a multiple of threshold pace
    pub easy_ratio: f64,
    /// Marathon pace as a multiple of threshold pace
    pub marathon_ratio: f64,
    /// Interval pace as a multiple of threshold pace
    pub interval_ratio: f64,
    /// Repetition pace as a multiple of threshold pace
    pub repetition_ratio: f64,
    /// Duration of the race whose pace equals threshold pace
    pub threshold_duration_minutes: f64,
}

impl Default for PaceZoneConfig {
    fn default() -> Self {
        Self {
            easy_ratio: defaults::EASY_RATIO,
            marathon_ratio: defaults::MARATHON_RATIO,
            interval_ratio: defaults::INTERVAL_RATIO,
            repetition_ratio: defaults::REPETITION_RATIO,
            threshold_duration_minutes: defaults::THRESHOLD_DURATION_MINUTES,
        }
    }
}
