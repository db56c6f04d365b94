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

//! # Wakalog Core Library
//!
//! Structured JSON logging for time-tracking editor plugins. Every log event
//! becomes one JSON object per line in an append-only file, stamped with the
//! session metadata the plugin was started with (tracked timestamp, target
//! file, write flag, plugin name and tool version).
//!
//! ## Module Overview
//!
//! - **log**: Formatter, logger, handlers and setup
//! - **errors**: Error type returned by setup paths
//!
//! ## Quick Start
//!
//! ```rust
//! use wakalog::log::{setup_logging, WkLogArgs};
//! use wakalog::wk_warn;
//!
//! let args = WkLogArgs {
//!     timestamp: 1_700_000_000.0,
//!     target_file: Some("src/main.rs".into()),
//!     plugin: Some("vim-wakatime/4.0.0".into()),
//!     ..WkLogArgs::default()
//! };
//! let logger = setup_logging(&args, env!("CARGO_PKG_VERSION"));
//! wk_warn!(logger, "heartbeat queued offline");
//! ```
//!
//! ## Error Handling
//!
//! Log calls never fail. Setup helpers that can fail return
//! `Result<T, WkError>`; [`setup_logging`](crate::log::setup_logging) degrades to stderr instead.

pub mod errors;
pub mod log;

pub use errors::{Result, WkError};
pub use self::log::{
    setup_logging, WkCallerContext, WkJsonFormatter, WkLogArgs, WkLogConfig, WkLogLevel,
    WkLogRecord, WkLogger, WkMessage, WkSessionMetadata,
};
