//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Wakalog.
//! The Wakalog project belongs to the Dunimd project team.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! You may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use wakalog::log::{setup_logging, WkLogArgs, WkLogLevel};
use wakalog::wk_event;

#[derive(Parser, Debug)]
#[command(name = "wakalog")]
#[command(about = "Write a structured log record for a tracked editor event", long_about = None)]
struct Cli {
    /// Seconds since the epoch of the tracked event; defaults to now
    #[arg(long)]
    timestamp: Option<f64>,

    /// The event was triggered by saving the file
    #[arg(long)]
    write: bool,

    /// File the event concerns
    #[arg(long)]
    file: Option<String>,

    /// Editor plugin identifier, e.g. vim-wakatime/4.0.0
    #[arg(long)]
    plugin: Option<String>,

    /// Log file path; defaults to ~/.wakatime.log
    #[arg(long)]
    logfile: Option<String>,

    /// Log DEBUG and above instead of WARNING and above
    #[arg(long)]
    verbose: bool,

    /// Severity of the record to write
    #[arg(long, default_value = "info")]
    level: WkLogLevel,

    /// Message to log
    message: String,
}

fn now_seconds() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or_default()
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let args = WkLogArgs {
        timestamp: cli.timestamp.unwrap_or_else(now_seconds),
        is_write: cli.write.then_some(true),
        target_file: cli.file,
        plugin: cli.plugin,
        logfile: cli.logfile,
        verbose: cli.verbose,
    };
    let logger = Arc::new(setup_logging(&args, env!("CARGO_PKG_VERSION")));
    // Records from dependencies using the `log` facade go to the same file.
    logger.install()?;

    wk_event!(logger, cli.level, cli.message);
    log::logger().flush();

    Ok(())
}
