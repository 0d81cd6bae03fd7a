// ABOUTME: Race distances and physiological constants for the running performance model
// ABOUTME: Daniels-Gilbert oxygen cost and sustainable-fraction coefficients, band thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacecast Contributors

//! Physiological constants based on published running research
//!
//! References:
//! - Daniels, J. & Gilbert, J. (1979). *Oxygen Power: Performance Tables for Distance Runners*
//! - Riegel, P.S. (1981). "Athletic records and human endurance." *American Scientist*, 69(3)

/// Canonical race distances in meters
pub mod distances {
    /// 5 kilometres
    pub const FIVE_K_METERS: f64 = 5_000.0;
    /// 10 kilometres
    pub const TEN_K_METERS: f64 = 10_000.0;
    /// Half marathon
    pub const HALF_MARATHON_METERS: f64 = 21_097.5;
    /// Marathon
    pub const MARATHON_METERS: f64 = 42_195.0;
    /// One kilometre, used for pace conversions
    pub const KILOMETER: f64 = 1_000.0;
}

/// Oxygen cost of running as a function of velocity (m/min)
///
/// `VO2 = C + B·v + A·v²`
pub mod oxygen_cost {
    /// Coefficient of the velocity-squared term
    pub const A: f64 = 0.000_104;
    /// Coefficient of the velocity term
    pub const B: f64 = 0.182_258;
    /// Constant term
    pub const C: f64 = -4.60;
}

/// Fraction of maximal aerobic power sustainable for a race lasting `t` minutes
///
/// `%max = BASE + K1·e^(R1·t) + K2·e^(R2·t)`
pub mod sustainable_fraction {
    /// Asymptotic fraction for very long efforts
    pub const BASE: f64 = 0.8;
    /// Slow-decay amplitude
    pub const K1: f64 = 0.189_439_3;
    /// Slow-decay rate per minute
    pub const R1: f64 = -0.012_778;
    /// Fast-decay amplitude
    pub const K2: f64 = 0.298_955_8;
    /// Fast-decay rate per minute
    pub const R2: f64 = -0.193_260_5;
}

/// Bounds for the numeric inversion of the performance model
pub mod inversion {
    /// Fastest velocity searched (m/s)
    pub const MAX_SPEED_MPS: f64 = 10.0;
    /// Slowest velocity searched (m/s)
    pub const MIN_SPEED_MPS: f64 = 0.5;
    /// Bisection iteration cap
    pub const MAX_ITERATIONS: usize = 60;
    /// Convergence tolerance on race time (seconds)
    pub const TIME_TOLERANCE_SECONDS: f64 = 0.01;
}

/// Fitness-index thresholds separating ability bands
pub mod ability_bands {
    /// Lower edge of the elite band
    pub const ELITE_MIN_VDOT: f64 = 60.0;
    /// Lower edge of the advanced band
    pub const ADVANCED_MIN_VDOT: f64 = 52.0;
    /// Lower edge of the intermediate band
    pub const INTERMEDIATE_MIN_VDOT: f64 = 45.0;
    /// Lower edge of the novice band
    pub const NOVICE_MIN_VDOT: f64 = 38.0;
}
