// ABOUTME: Adaptation ratio smoothing and clamping configuration
// ABOUTME: Exponential smoothing factor and the bounded ratio interval
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacecast Contributors

use serde::{Deserialize, Serialize};

/// Neutral ratio used before any measurement
pub const DEFAULT_ADAPTATION_RATIO: f64 = 1.0;

/// Adaptation ratio configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdaptationConfig {
    /// Ratio returned for an empty measurement list and used as the fold seed
    pub default_ratio: f64,
    /// Weight of the newest measurement in the exponential smoothing
    pub smoothing_factor: f64,
    /// Lower clamp
    pub min_ratio: f64,
    /// Upper clamp
    pub max_ratio: f64,
    /// Expected improvements smaller than this are treated as zero
    pub min_expected_delta: f64,
}

impl Default for AdaptationConfig {
    fn default() -> Self {
        Self {
            default_ratio: DEFAULT_ADAPTATION_RATIO,
            smoothing_factor: 0.4,
            min_ratio: 0.3,
            max_ratio: 2.0,
            min_expected_delta: 1e-6,
        }
    }
}
