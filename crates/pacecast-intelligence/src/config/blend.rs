// ABOUTME: Confidence weights for fusing race-time sources into one prediction
// ABOUTME: Personal bests, recent race, threshold pace and VO2max each carry a base weight
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacecast Contributors

//! Prediction blending configuration
//!
//! Confidences are relative weights, not probabilities. Each source's base
//! weight is reduced the further it has to be extrapolated to the target
//! distance, and the recent race additionally decays with age.

use serde::{Deserialize, Serialize};

/// Prediction blending configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlendConfig {
    /// Base confidence of a personal best
    pub pb_confidence: f64,
    /// Base confidence of a recent race before recency decay
    pub recent_race_confidence: f64,
    /// Weeks after which a recent race carries half its base confidence
    pub recency_half_life_weeks: f64,
    /// Confidence of the threshold-pace estimate
    pub lt_confidence: f64,
    /// Confidence of the `VO2max` estimate
    pub vo2max_confidence: f64,
    /// Confidence lost per unit of |ln(target / source distance)|
    pub distance_penalty: f64,
    /// Multiplier applied when extrapolating toward a runner's weaker distances
    pub weakness_discount: f64,
    /// Duration (minutes) a runner can hold threshold pace
    pub lt_race_duration_minutes: f64,
}

impl Default for BlendConfig {
    fn default() -> Self {
        Self {
            pb_confidence: 1.0,
            recent_race_confidence: 1.5,
            recency_half_life_weeks: 6.0,
            lt_confidence: 0.8,
            vo2max_confidence: 0.5,
            distance_penalty: 1.0,
            weakness_discount: 0.85,
            lt_race_duration_minutes: 60.0,
        }
    }
}
