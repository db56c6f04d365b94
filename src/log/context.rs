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

/// Location of the code that issued a log call.
///
/// Captured at the call site (see [`wk_event!`](crate::wk_event)) or read
/// from a `log::Record`, then carried down with the event. Either part may
/// be missing, in which case it is left out of the log line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WkCallerContext {
    pub package: Option<String>,
    pub lineno: Option<u32>,
}

impl WkCallerContext {
    pub fn new(package: impl Into<String>, lineno: u32) -> Self {
        WkCallerContext {
            package: Some(package.into()),
            lineno: Some(lineno),
        }
    }

    pub fn unknown() -> Self {
        WkCallerContext::default()
    }

    pub fn from_log_record(record: &log::Record<'_>) -> Self {
        WkCallerContext {
            package: record.module_path().map(str::to_owned),
            lineno: record.line(),
        }
    }
}

/// Emit an event through a [`WkLogger`](crate::log::WkLogger), recording the
/// calling module and line.
#[macro_export]
///
/// A string literal is a format string, as with `log::warn!`, so inline
/// captures like `"queued {n} heartbeats"` are expanded and literal braces
/// must be doubled. Any other expression is logged as a payload
/// (`String`, bytes, `serde_json::Value`) without formatting.
macro_rules! wk_event {
    ($logger:expr, $level:expr, $fmt:literal) => {
        $logger.log(
            $level,
            $crate::log::WkCallerContext::new(module_path!(), line!()),
            format!($fmt),
        )
    };
    ($logger:expr, $level:expr, $fmt:literal, $($arg:tt)+) => {
        $logger.log(
            $level,
            $crate::log::WkCallerContext::new(module_path!(), line!()),
            format!($fmt, $($arg)+),
        )
    };
    ($logger:expr, $level:expr, $msg:expr) => {
        $logger.log(
            $level,
            $crate::log::WkCallerContext::new(module_path!(), line!()),
            $msg,
        )
    };
}

#[macro_export]
macro_rules! wk_debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::wk_event!($logger, $crate::log::WkLogLevel::Debug, $($arg)+)
    };
}

#[macro_export]
macro_rules! wk_info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::wk_event!($logger, $crate::log::WkLogLevel::Info, $($arg)+)
    };
}

#[macro_export]
macro_rules! wk_warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::wk_event!($logger, $crate::log::WkLogLevel::Warning, $($arg)+)
    };
}

#[macro_export]
macro_rules! wk_error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::wk_event!($logger, $crate::log::WkLogLevel::Error, $($arg)+)
    };
}

#[macro_export]
macro_rules! wk_critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::wk_event!($logger, $crate::log::WkLogLevel::Critical, $($arg)+)
    };
}
