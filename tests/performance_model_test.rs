// ABOUTME: Tests for the performance model converting race results to and from a fitness index
// ABOUTME: Covers published reference values, monotonicity, inversion accuracy and input guards
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacecast Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use pacecast_core::errors::ErrorCode;
use pacecast_core::models::RaceDistance;
use pacecast_intelligence::algorithms::PerformanceModel;

const DISTANCE_5K: f64 = 5_000.0;
const DISTANCE_10K: f64 = 10_000.0;
const DISTANCE_MARATHON: f64 = 42_195.0;

#[test]
fn test_fitness_index_from_5k() {
    // 5K in 20:00 is VDOT ~50
    let vdot = PerformanceModel::to_fitness_index(DISTANCE_5K, 20.0 * 60.0).unwrap();
    assert!(
        (49.0..=51.0).contains(&vdot),
        "VDOT should be around 50, got {vdot}"
    );
}

#[test]
fn test_fitness_index_from_10k() {
    // 10K in 40:00 is VDOT ~52
    let vdot = PerformanceModel::to_fitness_index(DISTANCE_10K, 40.0 * 60.0).unwrap();
    assert!(
        (50.0..=53.0).contains(&vdot),
        "VDOT should be around 52, got {vdot}"
    );
}

#[test]
fn test_faster_time_gives_higher_index() {
    let mut previous = 0.0;
    for time in (1_200..=3_600).rev().step_by(60) {
        let vdot = PerformanceModel::to_fitness_index(DISTANCE_10K, f64::from(time)).unwrap();
        assert!(
            vdot > previous,
            "VDOT must increase strictly as time decreases (time {time}s gave {vdot})"
        );
        previous = vdot;
    }
}

#[test]
fn test_to_time_inverts_fitness_index() {
    for (distance, time) in [
        (DISTANCE_5K, 1_500.0),
        (DISTANCE_10K, 2_400.0),
        (21_097.5, 5_400.0),
        (DISTANCE_MARATHON, 12_600.0),
    ] {
        let vdot = PerformanceModel::to_fitness_index(distance, time).unwrap();
        let recovered = PerformanceModel::to_time(distance, vdot).unwrap();
        assert!(
            (recovered - time).abs() < 1.0,
            "Inverse at {distance} m should recover {time}s, got {recovered}s"
        );
    }
}

#[test]
fn test_vdot_50_marathon_prediction() {
    let marathon = PerformanceModel::to_time(DISTANCE_MARATHON, 50.0).unwrap();
    let hours = marathon / 3600.0;
    assert!(
        (3.0..=3.3).contains(&hours),
        "VDOT 50 marathon should be ~3:10, got {hours:.2} hours"
    );
}

#[test]
fn test_invalid_inputs_are_rejected() {
    for (distance, time) in [
        (0.0, 1_200.0),
        (DISTANCE_5K, 0.0),
        (-5.0, 1_200.0),
        (DISTANCE_5K, f64::NAN),
        (f64::INFINITY, 1_200.0),
    ] {
        let err = PerformanceModel::to_fitness_index(distance, time).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
    }

    let err = PerformanceModel::to_time(DISTANCE_5K, -1.0).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[test]
fn test_unreachable_index_is_out_of_range() {
    let err = PerformanceModel::to_time(DISTANCE_5K, 500.0).unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
}

#[test]
fn test_sustainable_fraction_decays_with_duration() {
    let short = PerformanceModel::sustainable_fraction(5.0);
    let hour = PerformanceModel::sustainable_fraction(60.0);
    let long = PerformanceModel::sustainable_fraction(240.0);
    assert!(short > hour && hour > long);
    assert!(long > 0.8, "Fraction never drops below the 0.8 asymptote");
    assert!((hour - 0.88).abs() < 0.01, "One-hour fraction ~0.88, got {hour}");
}

#[test]
fn test_velocity_for_oxygen_cost_inverts_cost_curve() {
    for velocity in [150.0, 200.0, 250.0, 330.0] {
        let cost = PerformanceModel::oxygen_cost(velocity);
        let recovered = PerformanceModel::velocity_for_oxygen_cost(cost).unwrap();
        assert!(
            (recovered - velocity).abs() < 1e-6,
            "Expected {velocity} m/min, got {recovered}"
        );
    }
    assert!(PerformanceModel::velocity_for_oxygen_cost(-10.0).is_err());
}

#[test]
fn test_threshold_pace_for_vdot_50() {
    let pace = PerformanceModel::pace_for_duration(50.0, 60.0).unwrap();
    assert!(
        (245.0..=262.0).contains(&pace),
        "VDOT 50 threshold pace should be ~4:15/km, got {pace}s"
    );
}

#[test]
fn test_race_equivalents_cover_all_distances() {
    let equivalents = PerformanceModel::race_equivalents(50.0).unwrap();
    assert_eq!(equivalents.len(), 4);
    assert_eq!(
        equivalents.iter().map(|e| e.distance).collect::<Vec<_>>(),
        RaceDistance::ALL.to_vec()
    );
    assert!(equivalents
        .windows(2)
        .all(|pair| pair[0].time_seconds < pair[1].time_seconds));
}

#[test]
fn test_distance_key_to_meters() {
    assert_eq!(RaceDistance::key_to_meters("k5"), Some(5_000.0));
    assert_eq!(RaceDistance::key_to_meters("k10"), Some(10_000.0));
    assert_eq!(RaceDistance::key_to_meters("h"), Some(21_097.5));
    assert_eq!(RaceDistance::key_to_meters("m"), Some(42_195.0));
    assert_eq!(RaceDistance::key_to_meters("Marathon"), Some(42_195.0));
    assert_eq!(RaceDistance::key_to_meters("ultra"), None);
}
