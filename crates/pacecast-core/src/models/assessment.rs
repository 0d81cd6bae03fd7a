// ABOUTME: Adaptation assessment status and user-facing result record
// ABOUTME: Canned messages are attached per status by the assessment engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacecast Contributors

use serde::{Deserialize, Serialize};

/// How a runner is responding to training relative to expectation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AssessmentStatus {
    /// Not enough data or time to judge
    NeedsData,
    /// Ratio at or above 1.5
    Excellent,
    /// Ratio from 1.3 up to 1.5
    Good,
    /// Ratio strictly between 0.7 and 1.3
    OnTrack,
    /// Ratio from 0.5 to 0.7 inclusive
    Slow,
    /// Ratio below 0.5
    Concerning,
}

/// Status plus the message shown to the runner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    /// Assessment status
    pub status: AssessmentStatus,
    /// Whether enough data existed to judge the ratio
    pub has_sufficient_data: bool,
    /// Canned message for the status
    pub message: String,
}
