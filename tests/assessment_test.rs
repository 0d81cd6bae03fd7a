// ABOUTME: Tests for adaptation assessment statuses and snapshot tracking
// ABOUTME: Data sufficiency rules, ratio boundaries, canned messages and non-mutating updates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacecast Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use pacecast_core::models::{
    AssessmentStatus, MeasurementSource, PhysiologyMeasurement, PhysiologyTrackingState,
};
use pacecast_intelligence::config::AdaptationConfig;
use pacecast_intelligence::physiology::{AssessmentEngine, PhysiologyTracker};
use std::collections::HashSet;

fn state_with_ratio(ratio: f64) -> PhysiologyTrackingState {
    let mut state = PhysiologyTrackingState::new(Some(300.0), Some(50.0), 48.0);
    state.current_adaptation_ratio = ratio;
    state
}

#[test]
fn test_no_initial_values_needs_data() {
    let mut state = PhysiologyTrackingState::new(None, None, 48.0);
    state.current_adaptation_ratio = 1.8;
    let result = AssessmentEngine::assess(&state, 20);
    assert_eq!(result.status, AssessmentStatus::NeedsData);
    assert!(!result.has_sufficient_data);
}

#[test]
fn test_too_early_needs_data() {
    // Intermediate band needs four weeks before change is measurable
    let state = state_with_ratio(1.8);
    assert_eq!(
        AssessmentEngine::assess(&state, 3).status,
        AssessmentStatus::NeedsData
    );
    assert_eq!(
        AssessmentEngine::assess(&state, 4).status,
        AssessmentStatus::Excellent
    );

    // Beginner band only needs three
    let mut beginner = state;
    beginner.baseline_vdot = 32.0;
    assert_eq!(
        AssessmentEngine::assess(&beginner, 3).status,
        AssessmentStatus::Excellent
    );
}

#[test]
fn test_single_initial_value_is_enough() {
    let mut state = PhysiologyTrackingState::new(None, Some(50.0), 48.0);
    state.current_adaptation_ratio = 1.0;
    let result = AssessmentEngine::assess(&state, 8);
    assert_eq!(result.status, AssessmentStatus::OnTrack);
    assert!(result.has_sufficient_data);
}

#[test]
fn test_ratio_boundaries() {
    let cases = [
        (2.0, AssessmentStatus::Excellent),
        (1.5, AssessmentStatus::Excellent),
        (1.49, AssessmentStatus::Good),
        (1.3, AssessmentStatus::Good),
        (1.29, AssessmentStatus::OnTrack),
        (1.0, AssessmentStatus::OnTrack),
        (0.71, AssessmentStatus::OnTrack),
        (0.7, AssessmentStatus::Slow),
        (0.5, AssessmentStatus::Slow),
        (0.49, AssessmentStatus::Concerning),
        (0.3, AssessmentStatus::Concerning),
    ];
    for (ratio, expected) in cases {
        let result = AssessmentEngine::assess(&state_with_ratio(ratio), 10);
        assert_eq!(result.status, expected, "ratio {ratio}");
        assert!(result.has_sufficient_data);
        assert_eq!(result.message, AssessmentEngine::message(expected));
    }
}

#[test]
fn test_non_finite_ratio_needs_data() {
    assert!(AssessmentEngine::status_for_ratio(f64::NAN).is_none());
    let result = AssessmentEngine::assess(&state_with_ratio(f64::NAN), 10);
    assert_eq!(result.status, AssessmentStatus::NeedsData);
}

#[test]
fn test_each_status_has_its_own_message() {
    let statuses = [
        AssessmentStatus::NeedsData,
        AssessmentStatus::Excellent,
        AssessmentStatus::Good,
        AssessmentStatus::OnTrack,
        AssessmentStatus::Slow,
        AssessmentStatus::Concerning,
    ];
    let messages: HashSet<_> = statuses
        .iter()
        .map(|status| AssessmentEngine::message(*status))
        .collect();
    assert_eq!(messages.len(), statuses.len());
    assert!(messages.iter().all(|message| !message.is_empty()));
}

#[test]
fn test_record_measurement_returns_new_snapshot() {
    let tracker = PhysiologyTracker::new(AdaptationConfig::default());
    let original = PhysiologyTrackingState::new(Some(300.0), Some(50.0), 48.0);
    let before = original.clone();

    let measurement = PhysiologyMeasurement::new(8, Some(270.0), Some(56.0), MeasurementSource::Test);
    let updated = tracker.record_measurement(&original, measurement, 8);

    assert_eq!(original, before, "Input snapshot must not change");
    assert_eq!(updated.measurements, vec![measurement]);
    assert!(updated.current_adaptation_ratio > 1.0);

    let assessment = updated.last_assessment.unwrap();
    assert!(assessment.has_sufficient_data);
    assert!(matches!(
        assessment.status,
        AssessmentStatus::Good | AssessmentStatus::Excellent
    ));
}

#[test]
fn test_measurements_accumulate_in_order() {
    let tracker = PhysiologyTracker::new(AdaptationConfig::default());
    let mut state = PhysiologyTrackingState::new(Some(300.0), None, 48.0);

    for week in [2, 4, 6] {
        let lt = 300.0 - f64::from(week);
        let measurement = PhysiologyMeasurement::new(week, Some(lt), None, MeasurementSource::Watch);
        state = tracker.record_measurement(&state, measurement, week);
    }

    let weeks: Vec<u32> = state.measurements.iter().map(|m| m.week).collect();
    assert_eq!(weeks, vec![2, 4, 6]);
}

#[test]
fn test_refresh_is_idempotent() {
    let tracker = PhysiologyTracker::new(AdaptationConfig::default());
    let state = tracker.record_measurement(
        &PhysiologyTrackingState::new(Some(300.0), Some(50.0), 48.0),
        PhysiologyMeasurement::new(6, Some(292.0), Some(51.5), MeasurementSource::Manual),
        6,
    );
    assert_eq!(tracker.refresh(&state, 6), state);
}
