// ABOUTME: Runner classification from the personal fade exponent
// ABOUTME: High fade marks a speed runner, low fade an endurance runner
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacecast Contributors

use crate::config::FatigueConfig;
use pacecast_core::models::RunnerType;

/// Buckets a fade exponent into `Speed`, `Balanced` or `Endurance`
#[derive(Debug, Clone, Copy, Default)]
pub struct RunnerClassifier {
    config: FatigueConfig,
}

impl RunnerClassifier {
    /// Create a classifier with the given thresholds
    #[must_use]
    pub const fn new(config: FatigueConfig) -> Self {
        Self { config }
    }

    /// Classify a fade exponent
    ///
    /// More fade at long distances means relatively stronger at short ones.
    /// `NaN`, infinities and zero classify as `Balanced`.
    #[must_use]
    pub fn classify(&self, fade_exponent: f64) -> RunnerType {
        if !fade_exponent.is_finite() || fade_exponent.abs() < f64::EPSILON {
            return RunnerType::Balanced;
        }

        if fade_exponent > self.config.speed_threshold {
            RunnerType::Speed
        } else if fade_exponent < self.config.endurance_threshold {
            RunnerType::Endurance
        } else {
            RunnerType::Balanced
        }
    }
}
