// ABOUTME: Fuses personal bests, a recent race, threshold pace and VO2max into one race-time estimate
// ABOUTME: Confidence-weighted averaging happens in fitness-index space, not time space
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacecast Contributors

//! Prediction blending
//!
//! Every available source is first converted to a candidate time at the
//! target distance:
//!
//! - personal bests and the recent race by Riegel's law with the personal
//!   fade exponent, `T(target) = T(d) × (target / d)^b`
//! - threshold pace as the one-hour race it represents
//! - `VO2max` read directly as a fitness index
//!
//! Candidates are mapped to fitness indices, averaged with their
//! confidences as weights, and the average is mapped back to a time.
//! Averaging indices rather than times avoids the bias of averaging a
//! non-linear quantity.

use crate::algorithms::PerformanceModel;
use crate::config::{BlendConfig, DEFAULT_FADE_EXPONENT};
use pacecast_core::constants::distances::KILOMETER;
use pacecast_core::models::{PersonalBests, RaceDistance, RecentRace, RunnerType};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Everything the blender may draw on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionInputs {
    /// Distance to predict
    pub target: RaceDistance,
    /// Personal bests, any subset
    pub personal_bests: PersonalBests,
    /// Lactate-threshold pace (sec/km)
    pub lt_pace: Option<f64>,
    /// `VO2max` (ml/kg/min)
    pub vo2max: Option<f64>,
    /// Personal fade exponent
    pub fade_exponent: f64,
    /// Runner classification
    pub runner_type: RunnerType,
    /// Most recent race, if any
    pub recent_race: Option<RecentRace>,
}

/// Origin of a candidate estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "distance", rename_all = "camelCase")]
pub enum PredictionSource {
    /// A personal best at the given distance
    PersonalBest(RaceDistance),
    /// The recent race
    RecentRace,
    /// Lactate-threshold pace
    LactateThreshold,
    /// `VO2max` reading
    Vo2max,
}

/// One source's contribution to the blend
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceEstimate {
    /// Where the estimate came from
    pub source: PredictionSource,
    /// Candidate time at the target distance (seconds)
    pub time_seconds: f64,
    /// Fitness index of the candidate time
    pub fitness_index: f64,
    /// Relative weight in the average
    pub confidence: f64,
}

/// Blended race-time estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlendedPrediction {
    /// Predicted time at the target distance (seconds)
    pub time_seconds: f64,
    /// Confidence-weighted fitness index
    pub fitness_index: f64,
    /// Contributing sources
    pub sources: Vec<SourceEstimate>,
}

/// Combines heterogeneous performance signals into one prediction
#[derive(Debug, Clone, Copy, Default)]
pub struct PredictionBlender {
    config: BlendConfig,
}

impl PredictionBlender {
    /// Create a blender with the given source weights
    #[must_use]
    pub const fn new(config: BlendConfig) -> Self {
        Self { config }
    }

    /// Predicted time at the target distance
    ///
    /// `None` means "prediction unavailable": no source produced a usable
    /// estimate. Callers surface that state instead of failing.
    #[must_use]
    pub fn predict_time(&self, inputs: &PredictionInputs) -> Option<f64> {
        self.blend(inputs).map(|prediction| prediction.time_seconds)
    }

    /// Blend every available source into one prediction
    #[must_use]
    pub fn blend(&self, inputs: &PredictionInputs) -> Option<BlendedPrediction> {
        let sources = self.collect_sources(inputs);

        let total_weight: f64 = sources.iter().map(|s| s.confidence).sum();
        if sources.is_empty() || total_weight <= 0.0 {
            debug!(distance = %inputs.target, "No usable prediction source");
            return None;
        }

        let fitness_index = sources
            .iter()
            .map(|s| s.confidence * s.fitness_index)
            .sum::<f64>()
            / total_weight;

        let time_seconds = PerformanceModel::to_time(inputs.target.meters(), fitness_index)
            .map_err(|e| debug!(error = %e, "Blended index could not be inverted"))
            .ok()?;

        debug!(
            distance = %inputs.target,
            fitness_index,
            time_seconds,
            source_count = sources.len(),
            "Blended race prediction"
        );

        Some(BlendedPrediction {
            time_seconds,
            fitness_index,
            sources,
        })
    }

    fn collect_sources(&self, inputs: &PredictionInputs) -> Vec<SourceEstimate> {
        let target_meters = inputs.target.meters();
        let exponent = if inputs.fade_exponent.is_finite() && inputs.fade_exponent > 0.0 {
            inputs.fade_exponent
        } else {
            DEFAULT_FADE_EXPONENT
        };

        let personal_bests = inputs.personal_bests.usable().filter_map(|(distance, time)| {
            let confidence = self.config.pb_confidence
                * self.proximity(distance.meters(), target_meters)
                * self.weakness_factor(distance.meters(), target_meters, inputs.runner_type);
            Self::riegel_estimate(
                PredictionSource::PersonalBest(distance),
                distance.meters(),
                time,
                target_meters,
                exponent,
                confidence,
            )
        });

        let recent = inputs
            .recent_race
            .and_then(|race| self.recent_race_estimate(&race, target_meters, exponent));

        let threshold = inputs
            .lt_pace
            .and_then(|pace| self.threshold_estimate(pace, target_meters));

        let vo2max = inputs
            .vo2max
            .and_then(|vo2| self.vo2max_estimate(vo2, target_meters));

        personal_bests
            .chain(recent)
            .chain(threshold)
            .chain(vo2max)
            .filter(|estimate| estimate.confidence > 0.0)
            .collect()
    }

    fn riegel_estimate(
        source: PredictionSource,
        distance_meters: f64,
        time_seconds: f64,
        target_meters: f64,
        exponent: f64,
        confidence: f64,
    ) -> Option<SourceEstimate> {
        let candidate = time_seconds * (target_meters / distance_meters).powf(exponent);
        let fitness_index = PerformanceModel::to_fitness_index(target_meters, candidate).ok()?;
        trace!(?source, candidate, fitness_index, confidence, "Riegel candidate");
        Some(SourceEstimate {
            source,
            time_seconds: candidate,
            fitness_index,
            confidence,
        })
    }

    fn recent_race_estimate(
        &self,
        race: &RecentRace,
        target_meters: f64,
        exponent: f64,
    ) -> Option<SourceEstimate> {
        let distance_meters = race.distance_meters();
        if !(distance_meters.is_finite()
            && distance_meters > 0.0
            && race.time_seconds.is_finite()
            && race.time_seconds > 0.0)
        {
            return None;
        }

        let weeks_ago = if race.weeks_ago.is_finite() {
            race.weeks_ago.max(0.0)
        } else {
            return None;
        };
        let recency = 0.5_f64.powf(weeks_ago / self.config.recency_half_life_weeks);
        let confidence = self.config.recent_race_confidence
            * recency
            * self.proximity(distance_meters, target_meters);

        Self::riegel_estimate(
            PredictionSource::RecentRace,
            distance_meters,
            race.time_seconds,
            target_meters,
            exponent,
            confidence,
        )
    }

    fn threshold_estimate(&self, lt_pace: f64, target_meters: f64) -> Option<SourceEstimate> {
        if !(lt_pace.is_finite() && lt_pace > 0.0) {
            return None;
        }
        let duration_seconds = self.config.lt_race_duration_minutes * 60.0;
        let distance_meters = KILOMETER * duration_seconds / lt_pace;
        let fitness_index =
            PerformanceModel::to_fitness_index(distance_meters, duration_seconds).ok()?;
        let time_seconds = PerformanceModel::to_time(target_meters, fitness_index).ok()?;
        Some(SourceEstimate {
            source: PredictionSource::LactateThreshold,
            time_seconds,
            fitness_index,
            confidence: self.config.lt_confidence,
        })
    }

    fn vo2max_estimate(&self, vo2max: f64, target_meters: f64) -> Option<SourceEstimate> {
        let time_seconds = PerformanceModel::to_time(target_meters, vo2max).ok()?;
        Some(SourceEstimate {
            source: PredictionSource::Vo2max,
            time_seconds,
            fitness_index: vo2max,
            confidence: self.config.vo2max_confidence,
        })
    }

    /// Confidence multiplier shrinking with extrapolation distance
    fn proximity(&self, source_meters: f64, target_meters: f64) -> f64 {
        1.0 / self
            .config
            .distance_penalty
            .mul_add((target_meters / source_meters).ln().abs(), 1.0)
    }

    /// Discount for extrapolating toward the distances a runner is weaker at
    fn weakness_factor(&self, source_meters: f64, target_meters: f64, runner_type: RunnerType) -> f64 {
        let toward_weakness = match runner_type {
            RunnerType::Speed => target_meters > source_meters,
            RunnerType::Endurance => target_meters < source_meters,
            RunnerType::Balanced => false,
        };
        if toward_weakness {
            self.config.weakness_discount
        } else {
            1.0
        }
    }
}
