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

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{Result, WkError};
use crate::log::core::{WkLogLevel, WkLogger};
use crate::log::formatters::WkJsonFormatter;
use crate::log::handlers::{WkFileHandler, WkLogHandler, WkNullHandler, WkStderrHandler};
use crate::log::session::WkSessionMetadata;

/// File name of the log in the user's home directory.
pub const WK_DEFAULT_LOG_FILE: &str = ".wakatime.log";

/// Plugin arguments relevant to logging, as parsed by the command line.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WkLogArgs {
    pub timestamp: f64,
    #[serde(default)]
    pub is_write: Option<bool>,
    #[serde(default)]
    pub target_file: Option<String>,
    #[serde(default)]
    pub plugin: Option<String>,
    #[serde(default)]
    pub logfile: Option<String>,
    #[serde(default)]
    pub verbose: bool,
}

impl WkLogArgs {
    pub fn session_metadata(&self, version: &str) -> WkSessionMetadata {
        WkSessionMetadata {
            timestamp: self.timestamp,
            is_write: self.is_write,
            target_file: self.target_file.clone(),
            version: version.to_string(),
            plugin: self.plugin.clone(),
        }
    }

    pub fn log_config(&self) -> WkLogConfig {
        WkLogConfigBuilder {
            verbose: Some(self.verbose),
            log_file: self.logfile.as_ref().map(PathBuf::from),
            ..WkLogConfigBuilder::default()
        }
        .build()
    }
}

/// Runtime knobs of the logger: the verbose switch and the file location.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WkLogConfig {
    /// DEBUG when set, WARNING otherwise.
    pub verbose: bool,
    /// Log file path; `~` is expanded. Defaults to `~/.wakatime.log`.
    pub log_file: Option<PathBuf>,
    /// Write to stderr instead of dropping lines when the file cannot be
    /// opened.
    pub console_fallback: bool,
}

impl Default for WkLogConfig {
    fn default() -> Self {
        WkLogConfig {
            verbose: false,
            log_file: None,
            console_fallback: true,
        }
    }
}

impl WkLogConfig {
    pub fn level(&self) -> WkLogLevel {
        if self.verbose {
            WkLogLevel::Debug
        } else {
            WkLogLevel::Warning
        }
    }

    pub fn resolved_log_file(&self) -> PathBuf {
        match &self.log_file {
            Some(path) => expand_home(path),
            None => default_log_file(),
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct WkLogConfigBuilder {
    pub verbose: Option<bool>,
    pub log_file: Option<PathBuf>,
    pub console_fallback: Option<bool>,
}

impl WkLogConfigBuilder {
    pub fn build(self) -> WkLogConfig {
        let base = WkLogConfig::default();
        WkLogConfig {
            verbose: self.verbose.unwrap_or(base.verbose),
            log_file: self.log_file.or(base.log_file),
            console_fallback: self.console_fallback.unwrap_or(base.console_fallback),
        }
    }

    /// Strict variant of [`from_json`](Self::from_json).
    pub fn try_from_json(value: &Value) -> Result<WkLogConfig> {
        let builder: WkLogConfigBuilder = serde_json::from_value(value.clone())
            .map_err(|e| WkError::config(format!("invalid log config: {e}")))?;
        Ok(builder.build())
    }

    /// Build from a JSON blob, falling back to defaults when it is malformed.
    pub fn from_json(value: &Value) -> WkLogConfig {
        Self::try_from_json(value).unwrap_or_default()
    }
}

fn default_log_file() -> PathBuf {
    match dirs::home_dir() {
        Some(home) => home.join(WK_DEFAULT_LOG_FILE),
        None => PathBuf::from(WK_DEFAULT_LOG_FILE),
    }
}

fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match dirs::home_dir() {
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}

pub fn set_log_level(logger: &WkLogger, verbose: bool) {
    let level = if verbose {
        WkLogLevel::Debug
    } else {
        WkLogLevel::Warning
    };
    logger.set_level(level);
}

/// Build a logger from config and session metadata. Never fails.
///
/// If the log file cannot be opened the logger writes to stderr, or drops
/// everything when `console_fallback` is off.
pub fn build_logger(config: &WkLogConfig, metadata: WkSessionMetadata) -> WkLogger {
    let mut formatter = WkJsonFormatter::new();
    formatter.configure(metadata);

    let path = config.resolved_log_file();
    let handler: Box<dyn WkLogHandler + Send + Sync> = match WkFileHandler::open(&path) {
        Ok(handler) => Box::new(handler),
        Err(err) if config.console_fallback => {
            let _ = writeln!(
                io::stderr().lock(),
                "wakalog: cannot open {}: {}",
                path.display(),
                err
            );
            Box::new(WkStderrHandler)
        }
        Err(_) => Box::new(WkNullHandler),
    };
    WkLogger::new(formatter, config.level(), handler)
}

pub fn setup_logging(args: &WkLogArgs, version: &str) -> WkLogger {
    build_logger(&args.log_config(), args.session_metadata(version))
}
