// ABOUTME: Race distance enum, sparse personal-best map and recent race record
// ABOUTME: Handles distance key parsing and iteration over present personal bests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacecast Contributors

use crate::constants::distances::{
    FIVE_K_METERS, HALF_MARATHON_METERS, KILOMETER, MARATHON_METERS, TEN_K_METERS,
};
use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canonical race distance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RaceDistance {
    /// 5 kilometres
    #[serde(rename = "k5", alias = "5k", alias = "5K")]
    FiveK,
    /// 10 kilometres
    #[serde(rename = "k10", alias = "10k", alias = "10K")]
    TenK,
    /// Half marathon
    #[serde(rename = "h", alias = "half")]
    HalfMarathon,
    /// Marathon
    #[serde(rename = "m", alias = "marathon")]
    Marathon,
}

impl RaceDistance {
    /// All canonical distances, shortest first
    pub const ALL: [Self; 4] = [Self::FiveK, Self::TenK, Self::HalfMarathon, Self::Marathon];

    /// Distance in meters
    #[must_use]
    pub const fn meters(self) -> f64 {
        match self {
            Self::FiveK => FIVE_K_METERS,
            Self::TenK => TEN_K_METERS,
            Self::HalfMarathon => HALF_MARATHON_METERS,
            Self::Marathon => MARATHON_METERS,
        }
    }

    /// Distance in kilometres
    #[must_use]
    pub fn kilometers(self) -> f64 {
        self.meters() / KILOMETER
    }

    /// Short storage key (`k5`, `k10`, `h`, `m`)
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::FiveK => "k5",
            Self::TenK => "k10",
            Self::HalfMarathon => "h",
            Self::Marathon => "m",
        }
    }

    /// Resolve a distance key to meters
    ///
    /// Accepts the storage keys as well as the common spellings
    /// (`5k`, `10K`, `half`, `marathon`). Unknown keys yield `None`.
    #[must_use]
    pub fn key_to_meters(key: &str) -> Option<f64> {
        key.parse::<Self>().ok().map(Self::meters)
    }
}

impl FromStr for RaceDistance {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "k5" | "5k" => Ok(Self::FiveK),
            "k10" | "10k" => Ok(Self::TenK),
            "h" | "half" | "half_marathon" | "hm" => Ok(Self::HalfMarathon),
            "m" | "marathon" | "full" => Ok(Self::Marathon),
            other => Err(AppError::invalid_input(format!(
                "Unknown race distance: '{other}'. Valid options: k5, k10, half, marathon"
            ))),
        }
    }
}

impl fmt::Display for RaceDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::FiveK => "5K",
            Self::TenK => "10K",
            Self::HalfMarathon => "Half Marathon",
            Self::Marathon => "Marathon",
        };
        f.write_str(label)
    }
}

/// Personal-best times in seconds, at most one per canonical distance
///
/// Any subset of distances, including none, is valid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalBests {
    /// 5K time (seconds)
    #[serde(default, rename = "k5", skip_serializing_if = "Option::is_none")]
    pub five_k: Option<f64>,
    /// 10K time (seconds)
    #[serde(default, rename = "k10", skip_serializing_if = "Option::is_none")]
    pub ten_k: Option<f64>,
    /// Half marathon time (seconds)
    #[serde(default, rename = "h", skip_serializing_if = "Option::is_none")]
    pub half_marathon: Option<f64>,
    /// Marathon time (seconds)
    #[serde(default, rename = "m", skip_serializing_if = "Option::is_none")]
    pub marathon: Option<f64>,
}

impl PersonalBests {
    /// Set the time for one distance, returning the updated record
    #[must_use]
    pub fn with(mut self, distance: RaceDistance, time_seconds: f64) -> Self {
        match distance {
            RaceDistance::FiveK => self.five_k = Some(time_seconds),
            RaceDistance::TenK => self.ten_k = Some(time_seconds),
            RaceDistance::HalfMarathon => self.half_marathon = Some(time_seconds),
            RaceDistance::Marathon => self.marathon = Some(time_seconds),
        }
        self
    }

    /// Time recorded for a distance, if any
    #[must_use]
    pub const fn get(&self, distance: RaceDistance) -> Option<f64> {
        match distance {
            RaceDistance::FiveK => self.five_k,
            RaceDistance::TenK => self.ten_k,
            RaceDistance::HalfMarathon => self.half_marathon,
            RaceDistance::Marathon => self.marathon,
        }
    }

    /// Present entries, shortest distance first
    pub fn iter(&self) -> impl Iterator<Item = (RaceDistance, f64)> + '_ {
        RaceDistance::ALL
            .into_iter()
            .filter_map(|distance| self.get(distance).map(|time| (distance, time)))
    }

    /// Present entries whose time is a positive finite number
    pub fn usable(&self) -> impl Iterator<Item = (RaceDistance, f64)> + '_ {
        self.iter()
            .filter(|(_, time)| time.is_finite() && *time > 0.0)
    }

    /// Number of distances with a recorded time
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Whether no distance has a recorded time
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A recent, non-PB race used as a recency-weighted fitness signal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentRace {
    /// Race distance in kilometres
    pub distance_km: f64,
    /// Finishing time in seconds
    pub time_seconds: f64,
    /// Weeks elapsed since the race
    pub weeks_ago: f64,
}

impl RecentRace {
    /// Race distance in meters
    #[must_use]
    pub fn distance_meters(&self) -> f64 {
        self.distance_km * KILOMETER
    }
}
