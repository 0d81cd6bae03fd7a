// ABOUTME: Command implementations for the Pacecast CLI
// ABOUTME: Each command loads its inputs, calls the engine and returns a JSON value
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacecast Contributors

use anyhow::{anyhow, Result};
use pacecast::input::{load_profile, load_tracking_state};
use pacecast_core::models::{MeasurementSource, PhysiologyMeasurement};
use pacecast_intelligence::engine::ForecastEngine;
use pacecast_intelligence::physiology::PhysiologyTrajectoryModel;
use serde_json::{json, Value};
use std::path::Path;
use tracing::{info, warn};

/// Status reported when no source yields a prediction
const PREDICTION_UNAVAILABLE: &str = "prediction unavailable";

pub fn plan(engine: &ForecastEngine, profile_path: &Path) -> Result<Value> {
    let profile = load_profile(profile_path)?;
    let forecast = engine.plan(&profile)?;

    let status = if forecast.baseline_vdot.is_some() {
        "ok"
    } else {
        warn!(path = %profile_path.display(), "{PREDICTION_UNAVAILABLE}");
        PREDICTION_UNAVAILABLE
    };

    Ok(json!({
        "status": status,
        "forecast": forecast,
    }))
}

pub fn paces(engine: &ForecastEngine, vdot: Option<f64>, lt_pace: Option<f64>) -> Result<Value> {
    let paces = engine.paces(vdot.unwrap_or(f64::NAN), lt_pace)?;
    Ok(serde_json::to_value(paces)?)
}

pub fn trajectory(lt: Option<f64>, vo2: Option<f64>, vdot: f64, weeks: u32) -> Result<Value> {
    if lt.is_none() && vo2.is_none() {
        return Err(anyhow!("At least one of --lt or --vo2 is required"));
    }
    let band = PhysiologyTrajectoryModel::ability_band(vdot);
    let points: Vec<_> =
        PhysiologyTrajectoryModel::generate_trajectory(lt, vo2, weeks, vdot).iter().collect();

    Ok(json!({
        "abilityBand": band,
        "points": points,
    }))
}

pub fn record(
    engine: &ForecastEngine,
    state_path: &Path,
    week: u32,
    lt: Option<f64>,
    vo2: Option<f64>,
    source: MeasurementSource,
    current_week: u32,
) -> Result<Value> {
    if lt.is_none() && vo2.is_none() {
        return Err(anyhow!("A measurement needs --lt, --vo2 or both"));
    }
    let state = load_tracking_state(state_path)?;
    let updated = engine.record_measurement(
        &state,
        PhysiologyMeasurement::new(week, lt, vo2, source),
        current_week,
    );
    info!(
        measurements = updated.measurements.len(),
        ratio = updated.current_adaptation_ratio,
        "Tracking state updated"
    );
    Ok(serde_json::to_value(updated)?)
}

pub fn assess(engine: &ForecastEngine, state_path: &Path, week: u32) -> Result<Value> {
    let state = engine.refresh(&load_tracking_state(state_path)?, week);

    Ok(json!({
        "adaptationRatio": state.current_adaptation_ratio,
        "assessment": state.last_assessment,
    }))
}
