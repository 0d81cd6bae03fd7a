// ABOUTME: Pacecast CLI - command-line front end to the running forecast engine
// ABOUTME: Plans, pace zones, physiology trajectories, measurement recording and assessments as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pacecast Contributors
//!
//! Usage:
//! ```bash
//! # Full forecast for an athlete profile
//! pacecast-cli plan profile.json
//!
//! # Training paces from a fitness index or a measured threshold pace
//! pacecast-cli paces --vdot 50
//! pacecast-cli paces --lt-pace 255
//!
//! # Expected physiology for a 16-week plan
//! pacecast-cli trajectory --lt 300 --vo2 48 --vdot 47 --weeks 16
//!
//! # Record a measurement and print the updated tracking state
//! pacecast-cli record state.json --week 6 --lt 290 --vo2 50
//!
//! # Assess a tracking state at week 8
//! pacecast-cli assess state.json --week 8
//! ```

mod commands;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand, ValueEnum};
use pacecast::logging::LoggingConfig;
use pacecast_core::models::MeasurementSource;
use pacecast_intelligence::config::EngineConfig;
use pacecast_intelligence::engine::ForecastEngine;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "pacecast-cli",
    about = "Running fitness forecast CLI",
    long_about = "Predicts race times, training paces and fitness trajectories from personal bests and physiology readings. All output is JSON on stdout."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Full forecast for an athlete profile JSON file
    Plan {
        /// Path to the athlete profile
        profile: PathBuf,
    },

    /// Training pace zones
    Paces {
        /// Fitness index (VDOT)
        #[arg(long, required_unless_present = "lt_pace")]
        vdot: Option<f64>,

        /// Measured lactate-threshold pace in seconds per km
        #[arg(long)]
        lt_pace: Option<f64>,
    },

    /// Expected physiology week by week
    Trajectory {
        /// Initial lactate-threshold pace in seconds per km
        #[arg(long)]
        lt: Option<f64>,

        /// Initial VO2max
        #[arg(long)]
        vo2: Option<f64>,

        /// Baseline fitness index selecting the ability band
        #[arg(long)]
        vdot: f64,

        /// Plan length in weeks
        #[arg(long, default_value = "16")]
        weeks: u32,
    },

    /// Append a measurement to a tracking state and print the new state
    Record {
        /// Path to the tracking state
        state: PathBuf,

        /// Training week of the measurement
        #[arg(long)]
        week: u32,

        /// Measured lactate-threshold pace in seconds per km
        #[arg(long)]
        lt: Option<f64>,

        /// Measured VO2max
        #[arg(long)]
        vo2: Option<f64>,

        /// Where the measurement came from
        #[arg(long, value_enum, default_value_t = SourceArg::Watch)]
        source: SourceArg,

        /// Current training week, defaults to the measurement week
        #[arg(long)]
        current_week: Option<u32>,
    },

    /// Assess adaptation for a tracking state
    Assess {
        /// Path to the tracking state
        state: PathBuf,

        /// Current training week
        #[arg(long)]
        week: u32,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SourceArg {
    Watch,
    Manual,
    Test,
}

impl From<SourceArg> for MeasurementSource {
    fn from(source: SourceArg) -> Self {
        match source {
            SourceArg::Watch => Self::Watch,
            SourceArg::Manual => Self::Manual,
            SourceArg::Test => Self::Test,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let config = EngineConfig::load().map_err(|e| anyhow!("Invalid engine configuration: {e}"))?;
    debug!(?config, "Engine configuration loaded");
    let engine = ForecastEngine::new(config);

    let output = match cli.command {
        Command::Plan { profile } => commands::plan(&engine, &profile)?,
        Command::Paces { vdot, lt_pace } => commands::paces(&engine, vdot, lt_pace)?,
        Command::Trajectory {
            lt,
            vo2,
            vdot,
            weeks,
        } => commands::trajectory(lt, vo2, vdot, weeks)?,
        Command::Record {
            state,
            week,
            lt,
            vo2,
            source,
            current_week,
        } => commands::record(
            &engine,
            &state,
            week,
            lt,
            vo2,
            source.into(),
            current_week.unwrap_or(week),
        )?,
        Command::Assess { state, week } => commands::assess(&engine, &state, week)?,
    };

    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{rendered}");
    Ok(())
}
