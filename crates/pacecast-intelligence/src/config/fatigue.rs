// ABOUTME: Fade exponent defaults and runner classification thresholds
// ABOUTME: Population exponent used when fewer than two personal bests exist
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacecast Contributors

use serde::{Deserialize, Serialize};

/// Population Riegel exponent
pub const DEFAULT_FADE_EXPONENT: f64 = 1.06;

/// Fade regression and runner classification configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FatigueConfig {
    /// Exponent returned when the fit is not possible
    pub default_exponent: f64,
    /// Smallest meaningful exponent
    pub min_exponent: f64,
    /// Largest meaningful exponent
    pub max_exponent: f64,
    /// Exponents strictly above this classify as `Speed`
    pub speed_threshold: f64,
    /// Exponents strictly below this classify as `Endurance`
    pub endurance_threshold: f64,
}

impl Default for FatigueConfig {
    fn default() -> Self {
        Self {
            default_exponent: DEFAULT_FADE_EXPONENT,
            min_exponent: 0.8,
            max_exponent: 1.5,
            speed_threshold: 1.12,
            endurance_threshold: 1.06,
        }
    }
}
