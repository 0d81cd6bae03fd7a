// ABOUTME: Tests for the smoothed measured-vs-expected adaptation ratio
// ABOUTME: Default ratio, on-plan measurements, faster responders, skipped metrics and clamping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacecast Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use pacecast_core::models::{MeasurementSource, PhysiologyMeasurement};
use pacecast_intelligence::config::AdaptationConfig;
use pacecast_intelligence::physiology::{AdaptationRatioTracker, PhysiologyTrajectoryModel};

const INITIAL_LT: f64 = 300.0;
const INITIAL_VO2: f64 = 50.0;
const BASELINE_VDOT: f64 = 48.0;

fn tracker() -> AdaptationRatioTracker {
    AdaptationRatioTracker::new(AdaptationConfig::default())
}

fn measurement(week: u32, lt: Option<f64>, vo2: Option<f64>) -> PhysiologyMeasurement {
    PhysiologyMeasurement::new(week, lt, vo2, MeasurementSource::Watch)
}

fn ratio(measurements: &[PhysiologyMeasurement]) -> f64 {
    tracker().compute_ratio(measurements, Some(INITIAL_LT), Some(INITIAL_VO2), BASELINE_VDOT)
}

fn expected(week: u32) -> (f64, f64) {
    let point = PhysiologyTrajectoryModel::expected_at(
        Some(INITIAL_LT),
        Some(INITIAL_VO2),
        week,
        BASELINE_VDOT,
    );
    (point.expected_lt.unwrap(), point.expected_vo2.unwrap())
}

#[test]
fn test_empty_measurements_give_default_ratio() {
    assert_eq!(ratio(&[]), 1.0);
}

#[test]
fn test_measurement_on_expectation_is_neutral() {
    let (lt, vo2) = expected(8);
    let value = ratio(&[measurement(8, Some(lt), Some(vo2))]);
    assert!((value - 1.0).abs() < 0.1, "Expected ~1.0, got {value}");
}

#[test]
fn test_faster_than_expected_raises_ratio() {
    let (lt, vo2) = expected(8);
    let value = ratio(&[measurement(8, Some(lt - 5.0), Some(vo2 + 2.0))]);
    assert!(value > 1.0, "Beating expectation must raise the ratio, got {value}");
}

#[test]
fn test_slower_than_expected_lowers_ratio() {
    let (lt, vo2) = expected(10);
    let value = ratio(&[measurement(10, Some(lt + 4.0), Some(vo2 - 1.0))]);
    assert!(value < 1.0, "Falling short must lower the ratio, got {value}");
}

#[test]
fn test_single_measurement_smoothing() {
    let (lt, _) = expected(8);
    let expected_gain = INITIAL_LT - lt;
    // Twice the expected LT improvement, no VO2 reading
    let m = measurement(8, Some(INITIAL_LT - 2.0 * expected_gain), None);

    let raw = tracker()
        .measurement_ratio(&m, Some(INITIAL_LT), Some(INITIAL_VO2), BASELINE_VDOT)
        .unwrap();
    assert!((raw - 2.0).abs() < 1e-9);

    let smoothed = ratio(&[m]);
    assert!((smoothed - 0.6_f64.mul_add(1.0, 0.4 * 2.0)).abs() < 1e-9);
}

#[test]
fn test_week_one_measurement_is_skipped() {
    let m = measurement(1, Some(290.0), Some(52.0));
    assert!(tracker()
        .measurement_ratio(&m, Some(INITIAL_LT), Some(INITIAL_VO2), BASELINE_VDOT)
        .is_none());
    assert_eq!(ratio(&[m]), 1.0);
}

#[test]
fn test_measurement_without_comparable_metric_is_skipped() {
    let (lt, vo2) = expected(6);
    let useful = measurement(6, Some(lt - 3.0), Some(vo2 + 1.0));
    let empty = measurement(7, None, None);

    assert_eq!(ratio(&[useful, empty]), ratio(&[useful]));

    let no_initials =
        tracker().compute_ratio(&[useful], None, None, BASELINE_VDOT);
    assert_eq!(no_initials, 1.0);
}

#[test]
fn test_ratio_is_clamped() {
    let wild_gain = measurement(6, Some(100.0), Some(90.0));
    assert_eq!(ratio(&[wild_gain]), 2.0);

    let wild_loss = measurement(6, Some(600.0), Some(20.0));
    assert_eq!(ratio(&[wild_loss]), 0.3);

    let non_finite = measurement(6, Some(f64::INFINITY), Some(f64::NAN));
    assert_eq!(ratio(&[non_finite]), 1.0);
}

#[test]
fn test_fold_is_ordered_and_deterministic() {
    let (lt4, vo2_4) = expected(4);
    let (lt8, vo2_8) = expected(8);
    let early = measurement(4, Some(lt4 - 6.0), Some(vo2_4 + 2.0));
    let late = measurement(8, Some(lt8 + 3.0), Some(vo2_8 - 0.5));

    let forward = ratio(&[early, late]);
    assert_eq!(forward, ratio(&[early, late]));
    assert!((forward - ratio(&[late, early])).abs() > 1e-6);
    assert!((0.3..=2.0).contains(&forward));
}
