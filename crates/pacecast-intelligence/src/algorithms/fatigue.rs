// ABOUTME: Personal pace-fade exponent fitted from personal bests by log-log least squares
// ABOUTME: Falls back to the population Riegel exponent when fewer than two PBs exist
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacecast Contributors
#![allow(clippy::cast_precision_loss)] // Safe: at most four personal bests

use crate::config::FatigueConfig;
use pacecast_core::models::PersonalBests;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Result of fitting `ln(time) = ln(T0) + b·ln(distance)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FadeFit {
    /// Fade exponent `b`, within the configured meaningful range
    pub exponent: f64,
    /// `ln(T0)`, absent when the default exponent was used
    pub intercept: Option<f64>,
    /// Coefficient of determination, absent when the default exponent was used
    pub r_squared: Option<f64>,
    /// Number of personal bests in the fit
    pub sample_count: usize,
    /// Whether the population default was returned instead of a fit
    pub used_default: bool,
}

/// Fits an individual's Riegel exponent from every supplied personal best
///
/// Ordinary least squares on `x = ln(distance)`, `y = ln(time)` with no
/// distance weighting:
///
/// `b = Σ(x − x̄)(y − ȳ) / Σ(x − x̄)²`
#[derive(Debug, Clone, Copy, Default)]
pub struct FatigueRegression {
    config: FatigueConfig,
}

impl FatigueRegression {
    /// Create a regression with the given configuration
    #[must_use]
    pub const fn new(config: FatigueConfig) -> Self {
        Self { config }
    }

    /// Fade exponent for a set of personal bests
    ///
    /// Fewer than two usable distances yield the population default (1.06).
    #[must_use]
    pub fn estimate_fade_exponent(&self, personal_bests: &PersonalBests) -> f64 {
        self.fit(personal_bests).exponent
    }

    /// Full regression record for a set of personal bests
    #[must_use]
    pub fn fit(&self, personal_bests: &PersonalBests) -> FadeFit {
        let points: Vec<(f64, f64)> = personal_bests
            .usable()
            .map(|(distance, time)| (distance.meters().ln(), time.ln()))
            .collect();

        if points.len() < 2 {
            debug!(
                sample_count = points.len(),
                "Too few personal bests for a fade fit, using default exponent"
            );
            return self.default_fit(points.len());
        }

        let n = points.len() as f64;
        let mean_x = points.iter().map(|(x, _)| x).sum::<f64>() / n;
        let mean_y = points.iter().map(|(_, y)| y).sum::<f64>() / n;

        let (sxy, sxx, syy) = points.iter().fold((0.0, 0.0, 0.0), |(sxy, sxx, syy), (x, y)| {
            let dx = x - mean_x;
            let dy = y - mean_y;
            (dx.mul_add(dy, sxy), dx.mul_add(dx, sxx), dy.mul_add(dy, syy))
        });

        if sxx.abs() < f64::EPSILON {
            return self.default_fit(points.len());
        }

        let slope = sxy / sxx;
        if !slope.is_finite() {
            return self.default_fit(points.len());
        }
        let intercept = slope.mul_add(-mean_x, mean_y);
        let r_squared = if syy.abs() < f64::EPSILON {
            1.0
        } else {
            (sxy * sxy) / (sxx * syy)
        };

        let exponent = slope.clamp(self.config.min_exponent, self.config.max_exponent);
        if (exponent - slope).abs() > f64::EPSILON {
            debug!(slope, exponent, "Fade exponent clamped to meaningful range");
        }

        FadeFit {
            exponent,
            intercept: Some(intercept),
            r_squared: Some(r_squared),
            sample_count: points.len(),
            used_default: false,
        }
    }

    const fn default_fit(&self, sample_count: usize) -> FadeFit {
        FadeFit {
            exponent: self.config.default_exponent,
            intercept: None,
            r_squared: None,
            sample_count,
            used_default: true,
        }
    }
}
