// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wallhang Replay - headless driver for the painting placement session.
//!
//! Feeds a recorded trace of tracking-quality changes and taps (each tap with
//! its camera pose and floor hit-test result) through a placement session and
//! prints a JSON report of every transition plus the final scene.
//!
//! # Environment
//!
//! - `WALLHANG_ADJUSTER_OPACITY` - preview opacity (default 0.5)
//! - `WALLHANG_INDICATOR_DISTANCE` - guide line distance in meters (default 0.2)
//! - `WALLHANG_ARTWORK` - artwork asset name
//! - `RUST_LOG` - log filter (default `info,wallhang_session=debug`)

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

mod config;
mod replay;
mod trace;

use config::Config;
use trace::Trace;

#[derive(Debug, Parser)]
#[command(name = "wallhang-replay", version, about)]
struct Args {
    /// Trace file to replay.
    trace: PathBuf,

    /// Write the report here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pretty-print the JSON report.
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::from_env();

    // Logs go to stderr so the report can be piped
    tracing_subscriber::fmt()
        .with_env_filter(config.log_filter.as_str())
        .with_writer(std::io::stderr)
        .init();

    tracing::info!(
        trace = %args.trace.display(),
        adjuster_opacity = config.adjuster_opacity,
        indicator_distance = config.indicator_distance,
        artwork = %config.artwork,
        "Starting replay"
    );

    let trace = Trace::load(&args.trace)?;
    let report = replay::replay(&trace, config.session_config())?;

    tracing::info!(
        steps = report.steps.len(),
        errors = report.error_count(),
        state = ?report.session.state,
        "Replay finished"
    );

    let json = if args.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };

    match &args.output {
        Some(path) => std::fs::write(path, json)
            .with_context(|| format!("cannot write report '{}'", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", json)?;
        }
    }

    Ok(())
}
