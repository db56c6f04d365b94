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

//! # Wakalog Log Module
//!
//! - **core**: Levels, records and the [`WkLogger`] instance
//! - **formatters**: Ordered JSON line formatting
//! - **handlers**: File, stderr and no-op sinks
//! - **config**: Verbose switch, log file location and setup
//! - **session**: Per-process metadata stamped on every line
//! - **context**: Explicit caller location and logging macros
//! - **message**: Text/bytes/JSON payload normalization

pub mod config;
pub mod context;
pub mod core;
pub mod formatters;
pub mod handlers;
pub mod message;
pub mod session;

pub use self::config::{
    build_logger, set_log_level, setup_logging, WkLogArgs, WkLogConfig, WkLogConfigBuilder,
    WK_DEFAULT_LOG_FILE,
};
pub use self::context::WkCallerContext;
pub use self::core::{WkLogLevel, WkLogRecord, WkLogger};
pub use self::formatters::{format_exception, WkJsonFormatter, WkLogLine, WK_DEFAULT_DATEFMT};
pub use self::handlers::{WkFileHandler, WkLogHandler, WkNullHandler, WkStderrHandler};
pub use self::message::WkMessage;
pub use self::session::WkSessionMetadata;
