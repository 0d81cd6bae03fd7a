// ABOUTME: Engine configuration aggregating all tunable forecasting tables
// ABOUTME: Provides defaults, PACECAST_* environment overrides and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacecast Contributors

//! Engine Configuration Module
//!
//! Configuration is organized into domain-specific modules:
//! - `pace_zones` - Zone ratios relative to threshold pace
//! - `fatigue` - Fade exponent defaults and runner type thresholds
//! - `blend` - Source confidences for race-time blending
//! - `adaptation` - Ratio smoothing and clamping
//! - `horizon` - Shared training-horizon constants
//!
//! The engine never reads the environment itself. Front ends call
//! [`EngineConfig::load`] once and pass the result down.

pub mod adaptation;
pub mod blend;
pub mod error;
pub mod fatigue;
pub mod horizon;
pub mod pace_zones;

pub use adaptation::{AdaptationConfig, DEFAULT_ADAPTATION_RATIO};
pub use blend::BlendConfig;
pub use error::ConfigError;
pub use fatigue::{FatigueConfig, DEFAULT_FADE_EXPONENT};
pub use horizon::HorizonConfig;
pub use pace_zones::PaceZoneConfig;

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use tracing::debug;

/// Main engine configuration container
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Pace zone ratios
    pub pace_zones: PaceZoneConfig,
    /// Fade regression and classification
    pub fatigue: FatigueConfig,
    /// Prediction blending weights
    pub blend: BlendConfig,
    /// Adaptation ratio smoothing
    pub adaptation: AdaptationConfig,
    /// Training horizon constants
    pub horizon: HorizonConfig,
}

impl EngineConfig {
    /// Load defaults, apply environment overrides, then validate
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable holds an unparsable value
    /// or the resulting configuration fails validation
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::from_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults with `PACECAST_*` environment overrides applied
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` naming the first variable that fails to parse
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().apply_env_overrides()
    }

    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}: '{val}'")))?;
            debug!(variable = env_var_name, "Applied configuration override");
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Pace zones
        Self::apply_env_var("PACECAST_ZONE_EASY_RATIO", &mut self.pace_zones.easy_ratio)?;
        Self::apply_env_var(
            "PACECAST_ZONE_MARATHON_RATIO",
            &mut self.pace_zones.marathon_ratio,
        )?;
        Self::apply_env_var(
            "PACECAST_ZONE_INTERVAL_RATIO",
            &mut self.pace_zones.interval_ratio,
        )?;
        Self::apply_env_var(
            "PACECAST_ZONE_REPETITION_RATIO",
            &mut self.pace_zones.repetition_ratio,
        )?;

        // Fade exponent
        Self::apply_env_var(
            "PACECAST_DEFAULT_FADE_EXPONENT",
            &mut self.fatigue.default_exponent,
        )?;

        // Blending
        Self::apply_env_var(
            "PACECAST_RECENCY_HALF_LIFE_WEEKS",
            &mut self.blend.recency_half_life_weeks,
        )?;
        Self::apply_env_var(
            "PACECAST_VO2MAX_CONFIDENCE",
            &mut self.blend.vo2max_confidence,
        )?;

        // Adaptation
        Self::apply_env_var(
            "PACECAST_SMOOTHING_FACTOR",
            &mut self.adaptation.smoothing_factor,
        )?;
        Self::apply_env_var("PACECAST_MIN_RATIO", &mut self.adaptation.min_ratio)?;
        Self::apply_env_var("PACECAST_MAX_RATIO", &mut self.adaptation.max_ratio)?;

        // Horizon
        Self::apply_env_var(
            "PACECAST_SESSION_STEEPNESS",
            &mut self.horizon.session_steepness,
        )?;
        Self::apply_env_var(
            "PACECAST_MAX_GAIN_CAP_PCT",
            &mut self.horizon.max_gain_cap_pct,
        )?;
        Self::apply_env_var(
            "PACECAST_MAX_SLOWDOWN_PCT",
            &mut self.horizon.max_slowdown_pct,
        )?;

        Ok(self)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint
    pub fn validate(&self) -> Result<(), ConfigError> {
        let zones = &self.pace_zones;
        if !(zones.repetition_ratio > 0.0
            && zones.repetition_ratio < zones.interval_ratio
            && zones.interval_ratio < 1.0
            && 1.0 < zones.marathon_ratio
            && zones.marathon_ratio < zones.easy_ratio)
        {
            return Err(ConfigError::InvalidRange(
                "Pace zone ratios must satisfy 0 < repetition < interval < 1 < marathon < easy",
            ));
        }
        if !is_positive(zones.threshold_duration_minutes) {
            return Err(ConfigError::ValueOutOfRange(
                "threshold_duration_minutes must be positive",
            ));
        }

        let fatigue = &self.fatigue;
        if !(is_positive(fatigue.min_exponent)
            && fatigue.max_exponent.is_finite()
            && fatigue.min_exponent < fatigue.max_exponent)
        {
            return Err(ConfigError::InvalidRange(
                "min_exponent must be < max_exponent",
            ));
        }
        if !(fatigue.min_exponent..=fatigue.max_exponent).contains(&fatigue.default_exponent) {
            return Err(ConfigError::ValueOutOfRange(
                "default_exponent must lie within [min_exponent, max_exponent]",
            ));
        }
        if !(fatigue.endurance_threshold.is_finite()
            && fatigue.speed_threshold.is_finite()
            && fatigue.endurance_threshold <= fatigue.speed_threshold)
        {
            return Err(ConfigError::InvalidRange(
                "endurance_threshold must be <= speed_threshold",
            ));
        }

        let blend = &self.blend;
        if [
            blend.pb_confidence,
            blend.recent_race_confidence,
            blend.lt_confidence,
            blend.vo2max_confidence,
        ]
        .iter()
        .any(|weight| !is_non_negative(*weight))
        {
            return Err(ConfigError::InvalidWeights(
                "Source confidences must be finite and non-negative",
            ));
        }
        if !(is_positive(blend.recency_half_life_weeks) && is_positive(blend.lt_race_duration_minutes))
        {
            return Err(ConfigError::ValueOutOfRange(
                "recency_half_life_weeks and lt_race_duration_minutes must be positive",
            ));
        }
        if !is_non_negative(blend.distance_penalty) {
            return Err(ConfigError::ValueOutOfRange(
                "distance_penalty must be non-negative",
            ));
        }
        if !(0.0..=1.0).contains(&blend.weakness_discount) {
            return Err(ConfigError::InvalidWeights(
                "weakness_discount must lie within [0, 1]",
            ));
        }

        let adaptation = &self.adaptation;
        if !(adaptation.smoothing_factor > 0.0 && adaptation.smoothing_factor <= 1.0) {
            return Err(ConfigError::ValueOutOfRange(
                "smoothing_factor must lie within (0, 1]",
            ));
        }
        if !(is_positive(adaptation.min_ratio)
            && adaptation.max_ratio.is_finite()
            && adaptation.min_ratio <= adaptation.default_ratio
            && adaptation.default_ratio <= adaptation.max_ratio)
        {
            return Err(ConfigError::InvalidRange(
                "Ratios must satisfy 0 < min_ratio <= default_ratio <= max_ratio",
            ));
        }

        let horizon = &self.horizon;
        if !(is_non_negative(horizon.max_slowdown_pct)
            && is_non_negative(horizon.max_gain_cap_pct))
        {
            return Err(ConfigError::ValueOutOfRange(
                "Gain clamp bounds must be finite and non-negative",
            ));
        }
        if !is_positive(horizon.session_steepness) {
            return Err(ConfigError::ValueOutOfRange(
                "session_steepness must be positive",
            ));
        }

        Ok(())
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn is_non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}
