// ABOUTME: Tests for loading athlete profiles and tracking snapshots from JSON files
// ABOUTME: Valid files, missing files and malformed content map to distinct error codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacecast Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use pacecast::input::{load_profile, load_tracking_state};
use pacecast_core::errors::ErrorCode;
use pacecast_core::models::{MeasurementSource, RaceDistance};
use std::fs;

#[test]
fn test_load_valid_profile() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("profile.json");
    fs::write(
        &path,
        r#"{
            "personalBests": { "k10": 2700 },
            "ltPace": 275,
            "targetDistance": "h",
            "weeksRemaining": 10,
            "sessionsPerWeek": 4,
            "runnerTypeOverride": "speed"
        }"#,
    )
    .unwrap();

    let profile = load_profile(&path).unwrap();
    assert_eq!(profile.target_distance, RaceDistance::HalfMarathon);
    assert_eq!(profile.personal_bests.get(RaceDistance::TenK), Some(2_700.0));
    assert_eq!(profile.lt_pace, Some(275.0));
    assert!(profile.runner_type_override.is_some());
}

#[test]
fn test_missing_file_is_storage_error() {
    let temp_dir = tempfile::tempdir().unwrap();
    let err = load_profile(&temp_dir.path().join("absent.json")).unwrap_err();
    assert_eq!(err.code, ErrorCode::StorageError);
}

#[test]
fn test_malformed_json_is_serialization_error() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("broken.json");

    fs::write(&path, "{ not json").unwrap();
    assert_eq!(
        load_profile(&path).unwrap_err().code,
        ErrorCode::SerializationError
    );

    // Valid JSON but no target distance
    fs::write(&path, r#"{ "weeksRemaining": 8, "sessionsPerWeek": 3 }"#).unwrap();
    assert_eq!(
        load_profile(&path).unwrap_err().code,
        ErrorCode::SerializationError
    );
}

#[test]
fn test_load_tracking_state_defaults() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("state.json");
    fs::write(
        &path,
        r#"{
            "initialLT": 300,
            "baselineVdot": 47.5,
            "measurements": [
                { "week": 4, "ltPaceSecPerKm": 294 },
                { "week": 6, "vo2max": 51.2, "source": "test" }
            ]
        }"#,
    )
    .unwrap();

    let state = load_tracking_state(&path).unwrap();
    assert_eq!(state.initial_lt, Some(300.0));
    assert!(state.initial_vo2.is_none());
    assert!((state.current_adaptation_ratio - 1.0).abs() < f64::EPSILON);
    assert!(state.last_assessment.is_none());
    assert_eq!(state.measurements.len(), 2);
    assert_eq!(state.measurements[0].source, MeasurementSource::Watch);
    assert_eq!(state.measurements[1].source, MeasurementSource::Test);
}
