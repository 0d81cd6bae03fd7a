// ABOUTME: Logging configuration and structured logging setup for the forecasting front ends
// ABOUTME: Configures log level, output format and location details for tracing output on stderr
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacecast Contributors

//! Structured logging configuration
//!
//! Log output goes to stderr so that command output on stdout stays
//! machine-readable.

use anyhow::{anyhow, Result};
use std::env;
use std::fmt;
use std::io;
use std::str::FromStr;
use tracing::{debug, Level};
use tracing_subscriber::{fmt as fmt_layer, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service name reported in startup logs
pub const SERVICE_NAME: &str = "pacecast";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Log level or filter directive (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// `JSON` lines for log aggregation
    Json,
    /// Multi-line human-readable output
    Pretty,
    /// Single-line output
    #[default]
    Compact,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            other => Err(anyhow!(
                "Unknown log format: '{other}'. Valid options: json, pretty, compact"
            )),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Json => "json",
            Self::Pretty => "pretty",
            Self::Compact => "compact",
        })
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: LogFormat::Compact,
            include_location: false,
            service_name: SERVICE_NAME.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    ///
    /// Reads `RUST_LOG`, `LOG_FORMAT` and `LOG_INCLUDE_LOCATION`. Unknown
    /// formats fall back to compact output.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            level: env::var("RUST_LOG").unwrap_or(defaults.level),
            format: env::var("LOG_FORMAT")
                .ok()
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(defaults.format),
            include_location: env::var("LOG_INCLUDE_LOCATION")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(defaults.include_location),
            ..defaults
        }
    }

    /// Override the level, e.g. from a `--verbose` flag
    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Filter built from the configured level
    ///
    /// An unparsable level falls back to `warn`.
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.level).unwrap_or_else(|_| EnvFilter::new(Level::WARN.as_str()))
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());

        let installed = match self.format {
            LogFormat::Json => registry
                .with(
                    fmt_layer::layer()
                        .json()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_target(true)
                        .with_writer(io::stderr),
                )
                .try_init(),
            LogFormat::Pretty => registry
                .with(
                    fmt_layer::layer()
                        .pretty()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_target(true)
                        .with_writer(io::stderr),
                )
                .try_init(),
            LogFormat::Compact => registry
                .with(
                    fmt_layer::layer()
                        .compact()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_target(false)
                        .with_writer(io::stderr),
                )
                .try_init(),
        };
        installed.map_err(|e| anyhow!("Failed to initialize logging: {e}"))?;

        debug!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            log.level = %self.level,
            log.format = %self.format,
            "Logging initialized"
        );
        Ok(())
    }
}

/// Initialize logging from environment
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}
