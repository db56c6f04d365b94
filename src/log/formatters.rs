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

//! # JSON line formatter
//!
//! Turns a [`WkLogRecord`] plus the bound [`WkSessionMetadata`] into one JSON
//! object per line. Fields are written in a fixed order:
//!
//! ```text
//! now, package, lineno, version, plugin, time, isWrite, file, level, message
//! ```
//!
//! `plugin` and `isWrite` are dropped from that sequence when unset, as are
//! `package`/`lineno` when the caller location is unknown. `file` is always
//! written once metadata is bound and is `null` without a target file.
//!
//! A formatter that has not been configured writes only `now`, the caller
//! location, `level` and `message`.

use std::error::Error;

use serde::Serialize;
use serde_json::Value;

use crate::log::core::WkLogRecord;
use crate::log::session::WkSessionMetadata;

/// Date layout of the `now` field, e.g. `2023/11/14 22:13:20 +0000`.
pub const WK_DEFAULT_DATEFMT: &str = "%Y/%m/%d %H:%M:%S %z";

const UNSERIALIZABLE_PLACEHOLDER: &str = "<unserializable log record>";

/// Serialized shape of one log line. Field order here is the output order.
#[derive(Debug, Serialize)]
pub struct WkLogLine<'a> {
    pub now: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lineno: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugin: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<f64>,
    #[serde(rename = "isWrite", skip_serializing_if = "Option::is_none")]
    pub is_write: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<Option<&'a str>>,
    pub level: &'static str,
    pub message: Value,
}

#[derive(Clone, Debug)]
pub struct WkJsonFormatter {
    datefmt: String,
    metadata: Option<WkSessionMetadata>,
}

impl Default for WkJsonFormatter {
    fn default() -> Self {
        WkJsonFormatter::new()
    }
}

impl WkJsonFormatter {
    pub fn new() -> Self {
        WkJsonFormatter {
            datefmt: WK_DEFAULT_DATEFMT.to_string(),
            metadata: None,
        }
    }

    pub fn with_datefmt(mut self, datefmt: impl Into<String>) -> Self {
        self.datefmt = datefmt.into();
        self
    }

    /// Bind session metadata. Calling again replaces the previous binding.
    pub fn configure(&mut self, metadata: WkSessionMetadata) {
        self.metadata = Some(metadata);
    }

    pub fn is_configured(&self) -> bool {
        self.metadata.is_some()
    }

    /// Build the ordered line for `record` without serializing it.
    pub fn build_line<'a>(&'a self, record: &'a WkLogRecord) -> WkLogLine<'a> {
        let meta = self.metadata.as_ref();
        WkLogLine {
            now: self.format_time(record),
            package: record.caller.package.as_deref(),
            lineno: record.caller.lineno,
            version: meta.map(|m| m.version.as_str()),
            plugin: meta.and_then(|m| m.plugin_name()),
            time: meta.map(|m| m.timestamp),
            is_write: meta.and_then(|m| m.write_flag()),
            file: meta.map(|m| m.target_file.as_deref()),
            level: record.level.as_str(),
            message: message_value(record),
        }
    }

    /// Serialize `record` to a single JSON line. Never fails.
    pub fn format(&self, record: &WkLogRecord) -> String {
        let mut line = self.build_line(record);
        match serde_json::to_string(&line) {
            Ok(s) => s,
            Err(_) => {
                line.message = Value::String(UNSERIALIZABLE_PLACEHOLDER.to_string());
                serde_json::to_string(&line).unwrap_or_else(|_| {
                    format!(
                        r#"{{"level":"{}","message":"{}"}}"#,
                        record.level.as_str(),
                        UNSERIALIZABLE_PLACEHOLDER
                    )
                })
            }
        }
    }

    fn format_time(&self, record: &WkLogRecord) -> String {
        use std::fmt::Write;

        let mut out = String::new();
        // chrono reports bad format strings through fmt::Error
        if write!(out, "{}", record.created.format(&self.datefmt)).is_err() {
            out.clear();
            let _ = write!(out, "{}", record.created.format(WK_DEFAULT_DATEFMT));
        }
        out
    }
}

fn message_value(record: &WkLogRecord) -> Value {
    match &record.exception {
        None => record.message.clone().into_value(),
        Some(exc) => {
            let mut text = record.message.to_text();
            if !text.ends_with('\n') {
                text.push('\n');
            }
            text.push_str(exc);
            Value::String(text)
        }
    }
}

/// Render an error and its `source()` chain, one cause per line.
pub fn format_exception(err: &(dyn Error + 'static)) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str("\nCaused by: ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}
