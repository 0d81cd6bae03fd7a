// ABOUTME: Orchestrates the full forecasting pipeline for one athlete profile
// ABOUTME: Fade fit, classification, blended baseline, pace zones and horizon forecast in one call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacecast Contributors

use crate::algorithms::{FatigueRegression, PerformanceModel, RaceEquivalent, RunnerClassifier};
use crate::config::EngineConfig;
use crate::pace_zones::PaceZoneDeriver;
use crate::physiology::{PhysiologyTracker, PhysiologyTrajectoryModel, Trajectory};
use crate::prediction_blender::{BlendedPrediction, PredictionBlender, PredictionInputs};
use crate::training_horizon::{HorizonRequest, TrainingHorizonForecaster};
use pacecast_core::errors::AppResult;
use pacecast_core::models::{
    AbilityBand, ForecastResult, Paces, PersonalBests, PhysiologyMeasurement,
    PhysiologyTrackingState, RaceDistance, RecentRace, RunnerType,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Everything known about an athlete and their plan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AthleteProfile {
    /// Personal bests, any subset
    #[serde(default)]
    pub personal_bests: PersonalBests,
    /// Most recent race
    #[serde(default)]
    pub recent_race: Option<RecentRace>,
    /// Lactate-threshold pace (sec/km)
    #[serde(default)]
    pub lt_pace: Option<f64>,
    /// `VO2max` (ml/kg/min)
    #[serde(default)]
    pub vo2max: Option<f64>,
    /// Goal race distance
    pub target_distance: RaceDistance,
    /// Weeks until race day
    pub weeks_remaining: u32,
    /// Planned sessions per week
    pub sessions_per_week: u32,
    /// User-chosen runner type, replacing the fitted classification
    #[serde(default)]
    pub runner_type_override: Option<RunnerType>,
    /// Measured responsiveness from physiology tracking
    #[serde(default)]
    pub adaptation_ratio: Option<f64>,
}

/// Output of one planning pass
///
/// Fields that depend on the baseline fitness index are `None` when no
/// source could produce a prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingForecast {
    /// Personal fade exponent
    pub fade_exponent: f64,
    /// Runner type used for the forecast
    pub runner_type: RunnerType,
    /// Blended current fitness index
    pub baseline_vdot: Option<f64>,
    /// Ability band of the baseline
    pub ability_band: Option<AbilityBand>,
    /// Blended current prediction at the target distance
    pub current_prediction: Option<BlendedPrediction>,
    /// Equivalent current times at every canonical distance
    pub race_equivalents: Vec<RaceEquivalent>,
    /// Training pace zones
    pub paces: Option<Paces>,
    /// End-of-plan forecast
    pub forecast: Option<ForecastResult>,
}

/// Facade over every forecasting component, sharing one configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct ForecastEngine {
    config: EngineConfig,
}

impl ForecastEngine {
    /// Create an engine with the given configuration
    #[must_use]
    pub const fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run the full pipeline for a profile
    ///
    /// # Errors
    ///
    /// Returns an error if a baseline exists but the pace or forecast
    /// computation rejects it
    pub fn plan(&self, profile: &AthleteProfile) -> AppResult<TrainingForecast> {
        let fade_exponent =
            FatigueRegression::new(self.config.fatigue).estimate_fade_exponent(&profile.personal_bests);
        let runner_type = profile
            .runner_type_override
            .unwrap_or_else(|| RunnerClassifier::new(self.config.fatigue).classify(fade_exponent));

        let current_prediction = self.predict(profile, fade_exponent, runner_type);
        let baseline_vdot = current_prediction.as_ref().map(|p| p.fitness_index);
        let ability_band = baseline_vdot.map(AbilityBand::from_vdot);

        let race_equivalents = baseline_vdot.map_or_else(Vec::new, Self::race_equivalents);

        let deriver = PaceZoneDeriver::new(self.config.pace_zones);
        let paces = match (profile.lt_pace.filter(|p| p.is_finite() && *p > 0.0), baseline_vdot) {
            (Some(lt_pace), _) => Some(deriver.from_threshold(lt_pace)?),
            (None, Some(vdot)) => Some(deriver.derive_paces(vdot, None)?),
            (None, None) => None,
        };

        let forecast = match (baseline_vdot, ability_band) {
            (Some(vdot), Some(band)) => Some(self.forecaster().forecast(&HorizonRequest {
                baseline_vdot: vdot,
                target_distance: profile.target_distance,
                weeks_remaining: profile.weeks_remaining,
                sessions_per_week: profile.sessions_per_week,
                runner_type,
                ability_band: band,
                adaptation_ratio: profile.adaptation_ratio,
            })?),
            _ => None,
        };

        if baseline_vdot.is_none() {
            warn!(distance = %profile.target_distance, "Prediction unavailable: no usable performance data");
        } else {
            info!(
                distance = %profile.target_distance,
                fade_exponent,
                runner_type = %runner_type,
                ?baseline_vdot,
                "Planned training forecast"
            );
        }

        Ok(TrainingForecast {
            fade_exponent,
            runner_type,
            baseline_vdot,
            ability_band,
            current_prediction,
            race_equivalents,
            paces,
            forecast,
        })
    }

    /// Blended prediction for a profile with a known exponent and type
    #[must_use]
    pub fn predict(
        &self,
        profile: &AthleteProfile,
        fade_exponent: f64,
        runner_type: RunnerType,
    ) -> Option<BlendedPrediction> {
        PredictionBlender::new(self.config.blend).blend(&PredictionInputs {
            target: profile.target_distance,
            personal_bests: profile.personal_bests,
            lt_pace: profile.lt_pace,
            vo2max: profile.vo2max,
            fade_exponent,
            runner_type,
            recent_race: profile.recent_race,
        })
    }

    /// Expected physiology trajectory for a tracking state
    #[must_use]
    pub const fn trajectory(&self, state: &PhysiologyTrackingState, total_weeks: u32) -> Trajectory {
        PhysiologyTrajectoryModel::generate_trajectory(
            state.initial_lt,
            state.initial_vo2,
            total_weeks,
            state.baseline_vdot,
        )
    }

    /// New tracking state with a measurement recorded
    #[must_use]
    pub fn record_measurement(
        &self,
        state: &PhysiologyTrackingState,
        measurement: PhysiologyMeasurement,
        current_week: u32,
    ) -> PhysiologyTrackingState {
        PhysiologyTracker::new(self.config.adaptation).record_measurement(
            state,
            measurement,
            current_week,
        )
    }

    /// New tracking state with ratio and assessment recomputed
    #[must_use]
    pub fn refresh(&self, state: &PhysiologyTrackingState, current_week: u32) -> PhysiologyTrackingState {
        PhysiologyTracker::new(self.config.adaptation).refresh(state, current_week)
    }

    /// Training paces for a fitness index or threshold pace
    ///
    /// # Errors
    ///
    /// Returns an error if neither input is usable
    pub fn paces(&self, fitness_index: f64, lt_pace: Option<f64>) -> AppResult<Paces> {
        PaceZoneDeriver::new(self.config.pace_zones).derive_paces(fitness_index, lt_pace)
    }

    /// Equivalents at every distance the index can be inverted at
    fn race_equivalents(vdot: f64) -> Vec<RaceEquivalent> {
        RaceDistance::ALL
            .into_iter()
            .filter_map(|distance| {
                match PerformanceModel::to_time(distance.meters(), vdot) {
                    Ok(time_seconds) => Some(RaceEquivalent {
                        distance,
                        time_seconds,
                    }),
                    Err(error) => {
                        warn!(%distance, vdot, %error, "No race equivalent at this distance");
                        None
                    }
                }
            })
            .collect()
    }

    const fn forecaster(&self) -> TrainingHorizonForecaster {
        TrainingHorizonForecaster::new(self.config.horizon, self.config.adaptation)
    }
}
