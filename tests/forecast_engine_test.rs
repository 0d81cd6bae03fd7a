// ABOUTME: End-to-end tests of the forecast engine facade
// ABOUTME: Full planning pipeline, missing data handling, JSON profiles and physiology tracking flow
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacecast Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use pacecast_core::models::{
    AssessmentStatus, MeasurementSource, PersonalBests, PhysiologyMeasurement,
    PhysiologyTrackingState, RaceDistance, RunnerType,
};
use pacecast_intelligence::engine::{AthleteProfile, ForecastEngine};

fn profile() -> AthleteProfile {
    AthleteProfile {
        personal_bests: PersonalBests::default()
            .with(RaceDistance::FiveK, 1_200.0)
            .with(RaceDistance::Marathon, 12_600.0),
        recent_race: None,
        lt_pace: None,
        vo2max: None,
        target_distance: RaceDistance::HalfMarathon,
        weeks_remaining: 12,
        sessions_per_week: 5,
        runner_type_override: None,
        adaptation_ratio: None,
    }
}

#[test]
fn test_full_plan() {
    let plan = ForecastEngine::default().plan(&profile()).unwrap();

    assert!(plan.fade_exponent > 0.9 && plan.fade_exponent < 1.3);
    let baseline = plan.baseline_vdot.unwrap();
    assert!(plan.ability_band.is_some());

    let current = plan.current_prediction.as_ref().unwrap();
    assert!((current.fitness_index - baseline).abs() < f64::EPSILON);
    assert_eq!(current.sources.len(), 2);

    let forecast = plan.forecast.unwrap();
    assert!(forecast.forecast_vdot > baseline);
    assert!(forecast.forecast_time < current.time_seconds);

    assert!(plan.paces.unwrap().is_ordered());
    assert_eq!(plan.race_equivalents.len(), 4);
}

#[test]
fn test_empty_profile_has_no_prediction() {
    let empty = AthleteProfile {
        personal_bests: PersonalBests::default(),
        ..profile()
    };
    let plan = ForecastEngine::default().plan(&empty).unwrap();

    assert!((plan.fade_exponent - 1.06).abs() < f64::EPSILON);
    assert_eq!(plan.runner_type, RunnerType::Balanced);
    assert!(plan.baseline_vdot.is_none());
    assert!(plan.ability_band.is_none());
    assert!(plan.current_prediction.is_none());
    assert!(plan.race_equivalents.is_empty());
    assert!(plan.paces.is_none());
    assert!(plan.forecast.is_none());
}

#[test]
fn test_measured_threshold_sets_paces() {
    let threshold_only = AthleteProfile {
        personal_bests: PersonalBests::default(),
        lt_pace: Some(270.0),
        ..profile()
    };
    let plan = ForecastEngine::default().plan(&threshold_only).unwrap();

    let paces = plan.paces.unwrap();
    assert!((paces.threshold - 270.0).abs() < f64::EPSILON);
    assert!(plan.baseline_vdot.is_some());
    assert!(plan.forecast.is_some());
}

#[test]
fn test_runner_type_override_wins() {
    let overridden = AthleteProfile {
        runner_type_override: Some(RunnerType::Endurance),
        ..profile()
    };
    let plan = ForecastEngine::default().plan(&overridden).unwrap();
    assert_eq!(plan.runner_type, RunnerType::Endurance);
}

#[test]
fn test_adaptation_ratio_improves_forecast() {
    let engine = ForecastEngine::default();
    let neutral = engine.plan(&profile()).unwrap().forecast.unwrap();
    let responsive = engine
        .plan(&AthleteProfile {
            adaptation_ratio: Some(1.6),
            ..profile()
        })
        .unwrap()
        .forecast
        .unwrap();
    assert!(responsive.vdot_gain_pct > neutral.vdot_gain_pct);
    assert!(responsive.forecast_time < neutral.forecast_time);
}

#[test]
fn test_profile_from_json() {
    let json = r#"{
        "personalBests": { "k5": 1260, "k10": 2640 },
        "recentRace": { "distanceKm": 10, "timeSeconds": 2610, "weeksAgo": 3 },
        "vo2max": 52,
        "targetDistance": "m",
        "weeksRemaining": 16,
        "sessionsPerWeek": 5
    }"#;
    let parsed: AthleteProfile = serde_json::from_str(json).unwrap();
    assert_eq!(parsed.target_distance, RaceDistance::Marathon);
    assert_eq!(parsed.personal_bests.len(), 2);
    assert!(parsed.lt_pace.is_none());

    let plan = ForecastEngine::default().plan(&parsed).unwrap();
    assert_eq!(plan.current_prediction.unwrap().sources.len(), 4);

    let output = serde_json::to_value(
        ForecastEngine::default().plan(&parsed).unwrap(),
    )
    .unwrap();
    assert!(output.get("baselineVdot").is_some());
    assert!(output.get("raceEquivalents").is_some());
}

#[test]
fn test_tracking_flow() {
    let engine = ForecastEngine::default();
    let start = PhysiologyTrackingState::new(Some(300.0), Some(50.0), 48.0);

    let expected: Vec<_> = engine.trajectory(&start, 12).iter().collect();
    assert_eq!(expected.len(), 12);

    let week_6 = expected[5];
    let on_plan = PhysiologyMeasurement::new(
        6,
        week_6.expected_lt,
        week_6.expected_vo2,
        MeasurementSource::Watch,
    );
    let state = engine.record_measurement(&start, on_plan, 6);

    assert!(start.measurements.is_empty());
    assert_eq!(state.measurements.len(), 1);
    assert!((state.current_adaptation_ratio - 1.0).abs() < 1e-9);
    assert_eq!(
        state.last_assessment.as_ref().unwrap().status,
        AssessmentStatus::OnTrack
    );

    let early = engine.refresh(&state, 2);
    assert_eq!(
        early.last_assessment.unwrap().status,
        AssessmentStatus::NeedsData
    );
}

#[test]
fn test_paces_helper() {
    let engine = ForecastEngine::default();
    let from_index = engine.paces(50.0, None).unwrap();
    let from_threshold = engine.paces(50.0, Some(250.0)).unwrap();
    assert!(from_index.is_ordered());
    assert!((from_threshold.threshold - 250.0).abs() < f64::EPSILON);
    assert!(engine.paces(f64::NAN, None).is_err());
}

#[test]
fn test_race_equivalents_keep_reachable_distances() {
    // Index 145 exceeds what the model allows over 5K at 10 m/s,
    // but the longer distances can still be inverted
    let extreme = AthleteProfile {
        personal_bests: PersonalBests::default(),
        vo2max: Some(145.0),
        target_distance: RaceDistance::Marathon,
        ..profile()
    };
    let plan = ForecastEngine::default().plan(&extreme).unwrap();

    assert_eq!(plan.race_equivalents.len(), 3);
    assert!(plan
        .race_equivalents
        .iter()
        .all(|equivalent| equivalent.distance != RaceDistance::FiveK));
    assert!(plan
        .race_equivalents
        .iter()
        .any(|equivalent| equivalent.distance == RaceDistance::Marathon));
}
