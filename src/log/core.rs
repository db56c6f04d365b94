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

use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, RwLock};

use chrono::{DateTime, FixedOffset, Local};

use crate::errors::{Result, WkError};
use crate::log::context::WkCallerContext;
use crate::log::formatters::{format_exception, WkJsonFormatter};
use crate::log::handlers::WkLogHandler;
use crate::log::message::WkMessage;
use crate::log::session::WkSessionMetadata;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WkLogLevel {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl WkLogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            WkLogLevel::Debug => "DEBUG",
            WkLogLevel::Info => "INFO",
            WkLogLevel::Warning => "WARNING",
            WkLogLevel::Error => "ERROR",
            WkLogLevel::Critical => "CRITICAL",
        }
    }

    /// Numeric severity using the conventional 10..50 scale.
    pub fn value(&self) -> u8 {
        match self {
            WkLogLevel::Debug => 10,
            WkLogLevel::Info => 20,
            WkLogLevel::Warning => 30,
            WkLogLevel::Error => 40,
            WkLogLevel::Critical => 50,
        }
    }

    fn from_facade(level: log::Level) -> Self {
        match level {
            log::Level::Error => WkLogLevel::Error,
            log::Level::Warn => WkLogLevel::Warning,
            log::Level::Info => WkLogLevel::Info,
            log::Level::Debug | log::Level::Trace => WkLogLevel::Debug,
        }
    }

    fn to_facade_filter(self) -> log::LevelFilter {
        match self {
            WkLogLevel::Debug => log::LevelFilter::Trace,
            WkLogLevel::Info => log::LevelFilter::Info,
            WkLogLevel::Warning => log::LevelFilter::Warn,
            WkLogLevel::Error | WkLogLevel::Critical => log::LevelFilter::Error,
        }
    }
}

impl fmt::Display for WkLogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WkLogLevel {
    type Err = WkError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "DEBUG" => Ok(WkLogLevel::Debug),
            "INFO" => Ok(WkLogLevel::Info),
            "WARN" | "WARNING" => Ok(WkLogLevel::Warning),
            "ERROR" => Ok(WkLogLevel::Error),
            "CRITICAL" => Ok(WkLogLevel::Critical),
            other => Err(WkError::config(format!("unknown log level '{other}'"))),
        }
    }
}

/// A single log event before formatting.
#[derive(Clone, Debug)]
pub struct WkLogRecord {
    pub level: WkLogLevel,
    pub message: WkMessage,
    /// Emission time of the log line itself.
    pub created: DateTime<FixedOffset>,
    pub caller: WkCallerContext,
    /// Pre-rendered error chain, appended to the message when formatted.
    pub exception: Option<String>,
}

impl WkLogRecord {
    /// Record stamped with the current local time.
    pub fn new(level: WkLogLevel, caller: WkCallerContext, message: impl Into<WkMessage>) -> Self {
        WkLogRecord {
            level,
            message: message.into(),
            created: Local::now().fixed_offset(),
            caller,
            exception: None,
        }
    }

    pub fn with_created(mut self, created: DateTime<FixedOffset>) -> Self {
        self.created = created;
        self
    }

    pub fn with_exception(mut self, exception: impl Into<String>) -> Self {
        self.exception = Some(exception.into());
        self
    }
}

/// Logger owned by the application's composition root.
///
/// There is no process-wide registry: build one with [`WkLogger::new`] or
/// [`setup_logging`](crate::log::setup_logging) and pass it by reference.
/// [`WkLogger::install`] additionally routes `log` facade records into it.
pub struct WkLogger {
    formatter: RwLock<WkJsonFormatter>,
    level: RwLock<WkLogLevel>,
    handler: Box<dyn WkLogHandler + Send + Sync>,
}

impl WkLogger {
    pub fn new(
        formatter: WkJsonFormatter,
        level: WkLogLevel,
        handler: Box<dyn WkLogHandler + Send + Sync>,
    ) -> Self {
        WkLogger {
            formatter: RwLock::new(formatter),
            level: RwLock::new(level),
            handler,
        }
    }

    pub fn level(&self) -> WkLogLevel {
        match self.level.read() {
            Ok(level) => *level,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    pub fn set_level(&self, level: WkLogLevel) {
        match self.level.write() {
            Ok(mut guard) => *guard = level,
            Err(poisoned) => *poisoned.into_inner() = level,
        }
    }

    pub fn enabled(&self, level: WkLogLevel) -> bool {
        level >= self.level()
    }

    /// Re-bind session metadata on an already built logger.
    pub fn reconfigure(&self, metadata: WkSessionMetadata) {
        match self.formatter.write() {
            Ok(mut formatter) => formatter.configure(metadata),
            Err(poisoned) => poisoned.into_inner().configure(metadata),
        }
    }

    /// Format a record and hand it to the handler. Never fails.
    pub fn emit(&self, record: WkLogRecord) {
        if !self.enabled(record.level) {
            return;
        }
        let line = match self.formatter.read() {
            Ok(formatter) => formatter.format(&record),
            Err(poisoned) => poisoned.into_inner().format(&record),
        };
        self.handler.handle(&line);
    }

    pub fn log(&self, level: WkLogLevel, caller: WkCallerContext, message: impl Into<WkMessage>) {
        if !self.enabled(level) {
            return;
        }
        self.emit(WkLogRecord::new(level, caller, message));
    }

    pub fn debug(&self, caller: WkCallerContext, message: impl Into<WkMessage>) {
        self.log(WkLogLevel::Debug, caller, message);
    }

    pub fn info(&self, caller: WkCallerContext, message: impl Into<WkMessage>) {
        self.log(WkLogLevel::Info, caller, message);
    }

    pub fn warn(&self, caller: WkCallerContext, message: impl Into<WkMessage>) {
        self.log(WkLogLevel::Warning, caller, message);
    }

    pub fn error(&self, caller: WkCallerContext, message: impl Into<WkMessage>) {
        self.log(WkLogLevel::Error, caller, message);
    }

    pub fn critical(&self, caller: WkCallerContext, message: impl Into<WkMessage>) {
        self.log(WkLogLevel::Critical, caller, message);
    }

    /// Log at ERROR with the error's source chain attached.
    pub fn exception(
        &self,
        caller: WkCallerContext,
        message: impl Into<WkMessage>,
        err: &(dyn std::error::Error + 'static),
    ) {
        if !self.enabled(WkLogLevel::Error) {
            return;
        }
        let record = WkLogRecord::new(WkLogLevel::Error, caller, message)
            .with_exception(format_exception(err));
        self.emit(record);
    }

    /// Register this logger as the `log` facade backend.
    ///
    /// Records from any crate using `log::warn!` and friends then land in the
    /// same file while the caller keeps using its own handle. Fails if
    /// another facade logger is already installed.
    pub fn install(self: &Arc<Self>) -> Result<()> {
        let filter = self.level().to_facade_filter();
        log::set_boxed_logger(Box::new(WkFacadeLogger(Arc::clone(self))))?;
        log::set_max_level(filter);
        Ok(())
    }
}

struct WkFacadeLogger(Arc<WkLogger>);

impl log::Log for WkFacadeLogger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        log::Log::enabled(&*self.0, metadata)
    }

    fn log(&self, record: &log::Record<'_>) {
        log::Log::log(&*self.0, record);
    }

    fn flush(&self) {
        log::Log::flush(&*self.0);
    }
}

impl fmt::Debug for WkLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WkLogger")
            .field("level", &self.level())
            .finish_non_exhaustive()
    }
}

impl log::Log for WkLogger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        WkLogger::enabled(self, WkLogLevel::from_facade(metadata.level()))
    }

    fn log(&self, record: &log::Record<'_>) {
        let level = WkLogLevel::from_facade(record.level());
        if !WkLogger::enabled(self, level) {
            return;
        }
        let message = match record.args().as_str() {
            Some(s) => s.to_owned(),
            None => record.args().to_string(),
        };
        self.emit(WkLogRecord::new(
            level,
            WkCallerContext::from_log_record(record),
            message,
        ));
    }

    fn flush(&self) {
        self.handler.flush();
    }
}
