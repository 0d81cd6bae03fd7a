// ABOUTME: Training pace zones, runner type, ability band and forecast result records
// ABOUTME: Ability band thresholds discretize the fitness index for response-rate tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacecast Contributors

use crate::constants::ability_bands::{
    ADVANCED_MIN_VDOT, ELITE_MIN_VDOT, INTERMEDIATE_MIN_VDOT, NOVICE_MIN_VDOT,
};
use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Five training pace zones in seconds per km
///
/// Ordering holds for any positive threshold pace: `r < i < t < m < e`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paces {
    /// Easy pace
    #[serde(rename = "e")]
    pub easy: f64,
    /// Threshold pace
    #[serde(rename = "t")]
    pub threshold: f64,
    /// Interval pace
    #[serde(rename = "i")]
    pub interval: f64,
    /// Marathon pace
    #[serde(rename = "m")]
    pub marathon: f64,
    /// Repetition pace
    #[serde(rename = "r")]
    pub repetition: f64,
}

impl Paces {
    /// Whether the zones are strictly ordered fastest to slowest
    #[must_use]
    pub fn is_ordered(&self) -> bool {
        self.repetition < self.interval
            && self.interval < self.threshold
            && self.threshold < self.marathon
            && self.marathon < self.easy
    }
}

/// Runner profile derived from the personal fade exponent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RunnerType {
    /// Relatively stronger at short distances
    Speed,
    /// No marked bias
    #[default]
    Balanced,
    /// Relatively stronger at long distances
    Endurance,
}

impl RunnerType {
    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Speed => "speed",
            Self::Balanced => "balanced",
            Self::Endurance => "endurance",
        }
    }
}

impl FromStr for RunnerType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "speed" => Ok(Self::Speed),
            "balanced" => Ok(Self::Balanced),
            "endurance" => Ok(Self::Endurance),
            other => Err(AppError::invalid_input(format!(
                "Unknown runner type: '{other}'. Valid options: speed, balanced, endurance"
            ))),
        }
    }
}

impl fmt::Display for RunnerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Discretized fitness level used to pick training-response tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AbilityBand {
    /// Below 38
    Beginner,
    /// 38 to below 45
    Novice,
    /// 45 to below 52
    Intermediate,
    /// 52 to below 60
    Advanced,
    /// 60 and above
    Elite,
}

impl AbilityBand {
    /// Band for a fitness index
    ///
    /// Non-finite input falls into `Beginner`, the most conservative band.
    #[must_use]
    pub fn from_vdot(vdot: f64) -> Self {
        match vdot {
            v if v >= ELITE_MIN_VDOT => Self::Elite,
            v if v >= ADVANCED_MIN_VDOT => Self::Advanced,
            v if v >= INTERMEDIATE_MIN_VDOT => Self::Intermediate,
            v if v >= NOVICE_MIN_VDOT => Self::Novice,
            _ => Self::Beginner,
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Novice => "novice",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::Elite => "elite",
        }
    }
}

impl fmt::Display for AbilityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Projected fitness at the end of the training horizon
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastResult {
    /// Projected fitness index
    pub forecast_vdot: f64,
    /// Projected race time at the target distance (seconds)
    pub forecast_time: f64,
    /// Applied fitness-index change in percent
    pub vdot_gain_pct: f64,
}
