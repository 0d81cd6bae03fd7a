// ABOUTME: Loads athlete profiles and physiology tracking snapshots from JSON files
// ABOUTME: I/O failures map to storage errors and malformed JSON to serialization errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacecast Contributors

use pacecast_core::errors::{AppError, AppResult};
use pacecast_core::models::PhysiologyTrackingState;
use pacecast_intelligence::engine::AthleteProfile;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read an athlete profile
///
/// # Errors
///
/// Returns `StorageError` if the file cannot be read and
/// `SerializationError` if it is not a valid profile
pub fn load_profile(path: &Path) -> AppResult<AthleteProfile> {
    load_json(path)
}

/// Read a physiology tracking snapshot
///
/// # Errors
///
/// Returns `StorageError` if the file cannot be read and
/// `SerializationError` if it is not a valid tracking state
pub fn load_tracking_state(path: &Path) -> AppResult<PhysiologyTrackingState> {
    load_json(path)
}

fn load_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let raw = fs::read_to_string(path)
        .map_err(|e| AppError::storage(format!("Cannot read {}: {e}", path.display())))?;
    debug!(path = %path.display(), bytes = raw.len(), "Loaded input file");
    serde_json::from_str(&raw).map_err(|e| {
        AppError::serialization(format!("Invalid JSON in {}: {e}", path.display()))
    })
}
