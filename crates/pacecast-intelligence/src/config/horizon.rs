// ABOUTME: Shared constants of the training horizon forecast model
// ABOUTME: Logistic steepness, gain clamp bounds and taper eligibility
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacecast Contributors

use serde::{Deserialize, Serialize};

/// Training horizon configuration
///
/// Per-distance and per-band tables live next to the forecaster as `match`
/// expressions; only the values shared across distances are tunable here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HorizonConfig {
    /// Steepness `k` of the session-frequency logistic
    pub session_steepness: f64,
    /// Largest projected slowdown in percent
    pub max_slowdown_pct: f64,
    /// Largest projected gain in percent
    pub max_gain_cap_pct: f64,
    /// Build weeks required before the taper window for the bonus to apply
    pub min_build_weeks: u32,
}

impl Default for HorizonConfig {
    fn default() -> Self {
        Self {
            session_steepness: 0.8,
            max_slowdown_pct: 5.0,
            max_gain_cap_pct: 20.0,
            min_build_weeks: 4,
        }
    }
}
