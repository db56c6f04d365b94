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

use serde_json::Value;

/// Payload of a log event.
///
/// Callers may hand over raw bytes (for example output captured from a
/// subprocess); those are turned into text before serialization by a
/// conversion that cannot fail.
#[derive(Clone, Debug, PartialEq)]
pub enum WkMessage {
    Text(String),
    Bytes(Vec<u8>),
    Json(Value),
}

impl WkMessage {
    /// Total conversion to text. Invalid UTF-8 sequences become U+FFFD.
    pub fn to_text(&self) -> String {
        match self {
            WkMessage::Text(s) => s.clone(),
            WkMessage::Bytes(b) => decode_bytes(b),
            WkMessage::Json(Value::String(s)) => s.clone(),
            WkMessage::Json(v) => v.to_string(),
        }
    }

    /// Normalized JSON value ready for the serializer.
    pub fn into_value(self) -> Value {
        match self {
            WkMessage::Text(s) => Value::String(s),
            WkMessage::Bytes(b) => Value::String(decode_bytes(&b)),
            WkMessage::Json(v) => v,
        }
    }
}

fn decode_bytes(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_owned(),
        Err(_) => String::from_utf8_lossy(bytes).into_owned(),
    }
}

impl From<&str> for WkMessage {
    fn from(s: &str) -> Self {
        WkMessage::Text(s.to_owned())
    }
}

impl From<String> for WkMessage {
    fn from(s: String) -> Self {
        WkMessage::Text(s)
    }
}

impl From<Vec<u8>> for WkMessage {
    fn from(b: Vec<u8>) -> Self {
        WkMessage::Bytes(b)
    }
}

impl From<&[u8]> for WkMessage {
    fn from(b: &[u8]) -> Self {
        WkMessage::Bytes(b.to_vec())
    }
}

impl From<Value> for WkMessage {
    fn from(v: Value) -> Self {
        WkMessage::Json(v)
    }
}
