// ABOUTME: Adaptive fitness forecasting engine for runners
// ABOUTME: Pure numeric models from race results and physiology to paces, trajectories and forecasts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacecast Contributors

#![deny(unsafe_code)]

//! # Pacecast Intelligence
//!
//! Deterministic, side-effect-free calculators over small bounded inputs.
//! Every function maps inputs to a fresh output record; nothing is cached
//! or shared between calls, so the engine can be used from any number of
//! threads without coordination.
//!
//! ## Components
//!
//! - **algorithms**: performance model, fade regression, runner classification
//! - **`pace_zones`**: five training paces from a fitness index or threshold pace
//! - **`prediction_blender`**: confidence-weighted race-time prediction
//! - **physiology**: expected trajectory, adaptation ratio, assessment
//! - **`training_horizon`**: end-of-plan fitness and race-time forecast
//! - **engine**: one-call pipeline over all of the above
//!
//! ## Example
//!
//! ```rust
//! use pacecast_core::models::{PersonalBests, RaceDistance};
//! use pacecast_intelligence::engine::{AthleteProfile, ForecastEngine};
//!
//! let profile = AthleteProfile {
//!     personal_bests: PersonalBests::default()
//!         .with(RaceDistance::FiveK, 1200.0)
//!         .with(RaceDistance::TenK, 2520.0),
//!     recent_race: None,
//!     lt_pace: None,
//!     vo2max: None,
//!     target_distance: RaceDistance::HalfMarathon,
//!     weeks_remaining: 12,
//!     sessions_per_week: 4,
//!     runner_type_override: None,
//!     adaptation_ratio: None,
//! };
//!
//! let plan = ForecastEngine::default().plan(&profile).unwrap();
//! assert!(plan.forecast.is_some());
//! ```

/// Leaf models: performance model, fade regression, classification
pub mod algorithms;

/// Tunable tables with environment overrides
pub mod config;

/// Orchestrating facade
pub mod engine;

/// Training pace zones
pub mod pace_zones;

/// Physiology trajectory, adaptation ratio and assessment
pub mod physiology;

/// Race-time prediction blending
pub mod prediction_blender;

/// Training horizon forecasting
pub mod training_horizon;

pub use algorithms::{FatigueRegression, PerformanceModel, RunnerClassifier};
pub use config::{ConfigError, EngineConfig};
pub use engine::{AthleteProfile, ForecastEngine, TrainingForecast};
pub use pace_zones::PaceZoneDeriver;
pub use physiology::{
    AdaptationRatioTracker, AssessmentEngine, PhysiologyTracker, PhysiologyTrajectoryModel,
    Trajectory,
};
pub use prediction_blender::{BlendedPrediction, PredictionBlender, PredictionInputs};
pub use training_horizon::{HorizonRequest, TrainingHorizonForecaster};
