// ABOUTME: Multi-factor non-linear forecast of fitness index and race time at the end of a plan
// ABOUTME: Saturating week factor, logistic session factor, runner-type modifier, penalty and taper
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacecast Contributors

//! Training horizon forecasting
//!
//! ```text
//! gain% = max_gain[distance][band]
//!       × (1 − e^(−weeks/τ))
//!       × 1 / (1 + e^(−k·(sessions − ref_sessions)))
//!       × type_modifier[distance][runner type]
//!       − undertrain_penalty + taper_bonus
//! ```
//!
//! A positive gain is scaled by the adaptation ratio, then the result is
//! clamped to `[−max_slowdown, +max_gain_cap]`.

use crate::algorithms::PerformanceModel;
use crate::config::{AdaptationConfig, HorizonConfig};
use pacecast_core::errors::{require_positive, AppError, AppResult};
use pacecast_core::models::{AbilityBand, ForecastResult, RaceDistance, RunnerType};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Gain ceiling and time constant for a (distance, band) pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HorizonParams {
    /// Largest fitness-index gain reachable with unlimited weeks (percent)
    pub max_gain_pct: f64,
    /// Weeks to reach ~63% of the ceiling
    pub tau_weeks: f64,
}

impl HorizonParams {
    /// Parameters for a distance and ability band
    ///
    /// Higher bands have less headroom and respond more slowly.
    #[must_use]
    pub fn lookup(distance: RaceDistance, band: AbilityBand) -> Self {
        let max_gain_pct = match (distance, band) {
            (RaceDistance::FiveK, AbilityBand::Beginner) => 12.0,
            (RaceDistance::FiveK, AbilityBand::Novice) => 10.0,
            (RaceDistance::FiveK, AbilityBand::Intermediate) => 7.0,
            (RaceDistance::FiveK, AbilityBand::Advanced) => 5.0,
            (RaceDistance::FiveK, AbilityBand::Elite) => 3.0,
            (RaceDistance::TenK, AbilityBand::Beginner) => 13.0,
            (RaceDistance::TenK, AbilityBand::Novice) => 11.0,
            (RaceDistance::TenK, AbilityBand::Intermediate) => 8.0,
            (RaceDistance::TenK, AbilityBand::Advanced) => 5.5,
            (RaceDistance::TenK, AbilityBand::Elite) => 3.2,
            (RaceDistance::HalfMarathon, AbilityBand::Beginner) => 14.0,
            (RaceDistance::HalfMarathon, AbilityBand::Novice) => 12.0,
            (RaceDistance::HalfMarathon, AbilityBand::Intermediate) => 9.0,
            (RaceDistance::HalfMarathon, AbilityBand::Advanced) => 6.0,
            (RaceDistance::HalfMarathon, AbilityBand::Elite) => 3.5,
            (RaceDistance::Marathon, AbilityBand::Beginner) => 15.0,
            (RaceDistance::Marathon, AbilityBand::Novice) => 13.0,
            (RaceDistance::Marathon, AbilityBand::Intermediate) => 10.0,
            (RaceDistance::Marathon, AbilityBand::Advanced) => 6.5,
            (RaceDistance::Marathon, AbilityBand::Elite) => 4.0,
        };

        let band_tau = match band {
            AbilityBand::Beginner => 6.0,
            AbilityBand::Novice => 7.0,
            AbilityBand::Intermediate => 8.0,
            AbilityBand::Advanced => 10.0,
            AbilityBand::Elite => 12.0,
        };
        let distance_factor = match distance {
            RaceDistance::FiveK => 1.0,
            RaceDistance::TenK => 1.1,
            RaceDistance::HalfMarathon => 1.25,
            RaceDistance::Marathon => 1.4,
        };

        Self {
            max_gain_pct,
            tau_weeks: band_tau * distance_factor,
        }
    }
}

/// Training-frequency and taper parameters for a distance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistanceProfile {
    /// Sessions per week at which the session factor is one half
    pub reference_sessions: f64,
    /// Fewer sessions than this incur the undertraining penalty
    pub min_sessions: u32,
    /// Flat penalty for undertraining (percent)
    pub undertrain_penalty_pct: f64,
    /// Flat bonus for a taper (percent)
    pub taper_bonus_pct: f64,
    /// Length of the taper window
    pub taper_weeks: u32,
}

impl DistanceProfile {
    /// Profile for a race distance
    #[must_use]
    pub const fn for_distance(distance: RaceDistance) -> Self {
        let (reference_sessions, min_sessions, undertrain_penalty_pct, taper_bonus_pct, taper_weeks) =
            match distance {
                RaceDistance::FiveK => (4.0, 3, 1.5, 1.0, 1),
                RaceDistance::TenK => (4.0, 3, 2.0, 1.5, 1),
                RaceDistance::HalfMarathon => (5.0, 3, 2.5, 2.0, 2),
                RaceDistance::Marathon => (5.0, 4, 3.0, 3.0, 3),
            };
        Self {
            reference_sessions,
            min_sessions,
            undertrain_penalty_pct,
            taper_bonus_pct,
            taper_weeks,
        }
    }
}

/// Gain multiplier for training a runner's weakness
///
/// Speed runners have the most to gain at long distances, endurance
/// runners at short ones.
#[must_use]
pub const fn type_modifier(distance: RaceDistance, runner_type: RunnerType) -> f64 {
    match (runner_type, distance) {
        (RunnerType::Balanced, _) => 1.0,
        (RunnerType::Speed, RaceDistance::FiveK) => 0.9,
        (RunnerType::Speed, RaceDistance::TenK) => 0.95,
        (RunnerType::Speed, RaceDistance::HalfMarathon) => 1.05,
        (RunnerType::Speed, RaceDistance::Marathon) => 1.1,
        (RunnerType::Endurance, RaceDistance::FiveK) => 1.1,
        (RunnerType::Endurance, RaceDistance::TenK) => 1.05,
        (RunnerType::Endurance, RaceDistance::HalfMarathon) => 0.95,
        (RunnerType::Endurance, RaceDistance::Marathon) => 0.9,
    }
}

/// Plan shape and athlete state for one forecast
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HorizonRequest {
    /// Current fitness index
    pub baseline_vdot: f64,
    /// Race distance
    pub target_distance: RaceDistance,
    /// Weeks until race day
    pub weeks_remaining: u32,
    /// Planned running sessions per week
    pub sessions_per_week: u32,
    /// Runner classification
    pub runner_type: RunnerType,
    /// Ability band of the baseline
    pub ability_band: AbilityBand,
    /// Measured responsiveness, if known
    #[serde(default)]
    pub adaptation_ratio: Option<f64>,
}

/// Individual factors behind a forecast gain
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GainBreakdown {
    /// Saturating weeks factor in `[0, 1)`
    pub week_factor: f64,
    /// Logistic sessions factor in `(0, 1)`
    pub session_factor: f64,
    /// Runner-type multiplier
    pub type_modifier: f64,
    /// Applied undertraining penalty (percent)
    pub undertrain_penalty_pct: f64,
    /// Applied taper bonus (percent)
    pub taper_bonus_pct: f64,
    /// Adaptation ratio applied to a positive gain
    pub adaptation_ratio: f64,
    /// Final clamped gain (percent)
    pub gain_pct: f64,
}

/// Projects fitness at the end of a training plan
#[derive(Debug, Clone, Copy, Default)]
pub struct TrainingHorizonForecaster {
    config: HorizonConfig,
    adaptation: AdaptationConfig,
}

impl TrainingHorizonForecaster {
    /// Create a forecaster
    #[must_use]
    pub const fn new(config: HorizonConfig, adaptation: AdaptationConfig) -> Self {
        Self { config, adaptation }
    }

    /// Forecast fitness index and race time at the end of the plan
    ///
    /// # Errors
    ///
    /// Returns an error if the baseline fitness index is not a positive
    /// finite number, the gain is not finite, or the forecast index cannot
    /// be converted to a time
    pub fn forecast(&self, request: &HorizonRequest) -> AppResult<ForecastResult> {
        let baseline = require_positive(request.baseline_vdot, "Baseline fitness index")?;
        let breakdown = self.gain_breakdown(request);

        let forecast_vdot = baseline * (1.0 + breakdown.gain_pct / 100.0);
        if !forecast_vdot.is_finite() {
            return Err(AppError::internal(format!(
                "Forecast fitness index is not finite (gain {:.2}%)",
                breakdown.gain_pct
            )));
        }
        let forecast_time =
            PerformanceModel::to_time(request.target_distance.meters(), forecast_vdot)?;

        debug!(
            distance = %request.target_distance,
            band = %request.ability_band,
            runner_type = %request.runner_type,
            baseline,
            forecast_vdot,
            forecast_time,
            gain_pct = breakdown.gain_pct,
            "Training horizon forecast"
        );

        Ok(ForecastResult {
            forecast_vdot,
            forecast_time,
            vdot_gain_pct: breakdown.gain_pct,
        })
    }

    /// Percentage gain and the factors it was built from
    #[must_use]
    pub fn gain_breakdown(&self, request: &HorizonRequest) -> GainBreakdown {
        let params = HorizonParams::lookup(request.target_distance, request.ability_band);
        let profile = DistanceProfile::for_distance(request.target_distance);

        let week_factor = 1.0 - (-f64::from(request.weeks_remaining) / params.tau_weeks).exp();
        let session_delta = f64::from(request.sessions_per_week) - profile.reference_sessions;
        let session_factor = 1.0 / (1.0 + (-self.config.session_steepness * session_delta).exp());
        let modifier = type_modifier(request.target_distance, request.runner_type);

        let undertrain_penalty_pct = if request.sessions_per_week < profile.min_sessions {
            profile.undertrain_penalty_pct
        } else {
            0.0
        };
        let taper_bonus_pct = if request.weeks_remaining
            >= profile.taper_weeks.saturating_add(self.config.min_build_weeks)
        {
            profile.taper_bonus_pct
        } else {
            0.0
        };

        let raw_gain = (params.max_gain_pct * week_factor * session_factor)
            .mul_add(modifier, taper_bonus_pct - undertrain_penalty_pct);

        let adaptation_ratio = self.sanitize_ratio(request.adaptation_ratio);
        let scaled_gain = if raw_gain > 0.0 {
            raw_gain * adaptation_ratio
        } else {
            raw_gain
        };

        // f64::clamp panics on NaN bounds; a NaN gain is left for forecast to reject
        let gain_pct = if scaled_gain.is_finite() {
            scaled_gain
                .max(-self.config.max_slowdown_pct)
                .min(self.config.max_gain_cap_pct)
        } else {
            scaled_gain
        };

        GainBreakdown {
            week_factor,
            session_factor,
            type_modifier: modifier,
            undertrain_penalty_pct,
            taper_bonus_pct,
            adaptation_ratio,
            gain_pct,
        }
    }

    fn sanitize_ratio(&self, ratio: Option<f64>) -> f64 {
        ratio
            .filter(|r| r.is_finite())
            .map_or(self.adaptation.default_ratio, |r| {
                r.clamp(self.adaptation.min_ratio, self.adaptation.max_ratio)
            })
    }
}
