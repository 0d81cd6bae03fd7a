// ABOUTME: VDOT performance model converting race results to a fitness index and back
// ABOUTME: Daniels-Gilbert oxygen cost and sustainable-fraction curves with bounded bisection inverse
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacecast Contributors

use pacecast_core::constants::distances::KILOMETER;
use pacecast_core::constants::inversion::{
    MAX_ITERATIONS, MAX_SPEED_MPS, MIN_SPEED_MPS, TIME_TOLERANCE_SECONDS,
};
use pacecast_core::constants::{oxygen_cost, sustainable_fraction};
use pacecast_core::errors::{require_positive, AppError, AppResult};
use pacecast_core::models::RaceDistance;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Equivalent performance at one canonical distance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceEquivalent {
    /// Race distance
    pub distance: RaceDistance,
    /// Equivalent finishing time in seconds
    pub time_seconds: f64,
}

/// Two-stage duration/intensity/economy model of running performance
///
/// 1. The fraction of maximal aerobic power sustainable for a race decays
///    with its duration: `%max = 0.8 + 0.1894393·e^(−0.012778·t) + 0.2989558·e^(−0.1932605·t)`
///    with `t` in minutes.
/// 2. The aerobic cost of running at velocity `v` (m/min) is
///    `VO2 = −4.60 + 0.182258·v + 0.000104·v²`.
///
/// The fitness index (VDOT) is the cost of race pace divided by the
/// sustainable fraction. Both curves are monotonic over the searched
/// velocity range, so the index strictly increases as race time falls.
///
/// # Scientific References
///
/// - Daniels, J. & Gilbert, J. (1979). *Oxygen Power: Performance Tables for Distance Runners*
/// - Daniels, J. (2013). "Daniels' Running Formula" (3rd ed.). Human Kinetics.
pub struct PerformanceModel;

impl PerformanceModel {
    /// Aerobic cost (ml/kg/min) of running at `velocity` meters per minute
    #[must_use]
    pub fn oxygen_cost(velocity: f64) -> f64 {
        (oxygen_cost::A * velocity).mul_add(velocity, oxygen_cost::B.mul_add(velocity, oxygen_cost::C))
    }

    /// Fraction of `VO2max` sustainable for a race lasting `minutes`
    #[must_use]
    pub fn sustainable_fraction(minutes: f64) -> f64 {
        sustainable_fraction::K1.mul_add(
            (sustainable_fraction::R1 * minutes).exp(),
            sustainable_fraction::K2.mul_add(
                (sustainable_fraction::R2 * minutes).exp(),
                sustainable_fraction::BASE,
            ),
        )
    }

    /// Calculate the fitness index from a race performance
    ///
    /// # Arguments
    ///
    /// * `distance_meters` - Race distance in meters
    /// * `time_seconds` - Race time in seconds
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if time or distance is non-positive or non-finite
    ///
    /// # Example
    ///
    /// ```rust
    /// use pacecast_intelligence::algorithms::PerformanceModel;
    ///
    /// let vdot = PerformanceModel::to_fitness_index(5_000.0, 1_200.0)?; // 5K in 20:00
    /// assert!((49.0..51.0).contains(&vdot));
    /// # Ok::<(), pacecast_core::errors::AppError>(())
    /// ```
    pub fn to_fitness_index(distance_meters: f64, time_seconds: f64) -> AppResult<f64> {
        require_positive(distance_meters, "Distance")?;
        require_positive(time_seconds, "Time")?;
        Ok(Self::index_at(distance_meters, time_seconds))
    }

    /// Unchecked forward model shared by the public API and the inversion loop
    fn index_at(distance_meters: f64, time_seconds: f64) -> f64 {
        let minutes = time_seconds / 60.0;
        let velocity = distance_meters / minutes;
        Self::oxygen_cost(velocity) / Self::sustainable_fraction(minutes)
    }

    /// Predict the race time at `distance_meters` for a fitness index
    ///
    /// Solved by bisection on race time between the times implied by
    /// 10 m/s and 0.5 m/s, capped at a fixed iteration count.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` for non-positive inputs and
    /// `AppError::ValueOutOfRange` when no time within the searched speed
    /// range produces the requested index
    pub fn to_time(distance_meters: f64, fitness_index: f64) -> AppResult<f64> {
        require_positive(distance_meters, "Distance")?;
        require_positive(fitness_index, "Fitness index")?;

        let mut fast = distance_meters / MAX_SPEED_MPS;
        let mut slow = distance_meters / MIN_SPEED_MPS;

        if fitness_index > Self::index_at(distance_meters, fast)
            || fitness_index < Self::index_at(distance_meters, slow)
        {
            return Err(AppError::out_of_range(format!(
                "Fitness index {fitness_index:.1} cannot be reached at {distance_meters:.0} m"
            )));
        }

        let mut iterations = 0;
        while iterations < MAX_ITERATIONS && slow - fast > TIME_TOLERANCE_SECONDS {
            let mid = 0.5 * (fast + slow);
            if Self::index_at(distance_meters, mid) > fitness_index {
                fast = mid;
            } else {
                slow = mid;
            }
            iterations += 1;
        }

        trace!(distance_meters, fitness_index, iterations, "Inverted performance model");
        Ok(0.5 * (fast + slow))
    }

    /// Velocity (m/min) whose aerobic cost equals `cost`
    ///
    /// Positive root of `A·v² + B·v + (C − cost) = 0`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::ValueOutOfRange` if no positive velocity has that cost
    pub fn velocity_for_oxygen_cost(cost: f64) -> AppResult<f64> {
        let discriminant = oxygen_cost::B.mul_add(
            oxygen_cost::B,
            4.0 * oxygen_cost::A * (cost - oxygen_cost::C),
        );
        if !discriminant.is_finite() || discriminant < 0.0 {
            return Err(AppError::out_of_range(format!(
                "No running velocity has an oxygen cost of {cost:.2}"
            )));
        }

        let velocity = (discriminant.sqrt() - oxygen_cost::B) / (2.0 * oxygen_cost::A);
        if velocity <= 0.0 {
            return Err(AppError::out_of_range(format!(
                "Oxygen cost {cost:.2} is below the cost of moving"
            )));
        }
        Ok(velocity)
    }

    /// Pace (sec/km) a runner of `fitness_index` can hold for `duration_minutes`
    ///
    /// # Errors
    ///
    /// Returns an error if the fitness index or duration is non-positive
    pub fn pace_for_duration(fitness_index: f64, duration_minutes: f64) -> AppResult<f64> {
        require_positive(fitness_index, "Fitness index")?;
        require_positive(duration_minutes, "Duration")?;
        let cost = fitness_index * Self::sustainable_fraction(duration_minutes);
        let velocity = Self::velocity_for_oxygen_cost(cost)?;
        Ok(KILOMETER / velocity * 60.0)
    }

    /// Equivalent times for every canonical distance
    ///
    /// # Errors
    ///
    /// Returns an error if the fitness index cannot be inverted at some distance
    pub fn race_equivalents(fitness_index: f64) -> AppResult<Vec<RaceEquivalent>> {
        RaceDistance::ALL
            .into_iter()
            .map(|distance| {
                Self::to_time(distance.meters(), fitness_index).map(|time_seconds| {
                    RaceEquivalent {
                        distance,
                        time_seconds,
                    }
                })
            })
            .collect()
    }
}
