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

use serde::{Deserialize, Serialize};

/// Context bound once per process and stamped onto every log line.
///
/// Built from the plugin's command-line arguments at startup and never
/// mutated afterwards. Absent optional values are left out of the output
/// rather than written as null.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WkSessionMetadata {
    /// Seconds since the epoch of the tracked event, not of the log line.
    pub timestamp: f64,
    /// Set when the tracked event was a file save.
    #[serde(default)]
    pub is_write: Option<bool>,
    /// File the tracked action concerns.
    #[serde(default)]
    pub target_file: Option<String>,
    /// Release of the tool writing the log.
    pub version: String,
    /// Editor integration in use, e.g. `vim-wakatime/4.0.0`.
    #[serde(default)]
    pub plugin: Option<String>,
}

impl WkSessionMetadata {
    pub fn new(timestamp: f64, version: impl Into<String>) -> Self {
        WkSessionMetadata {
            timestamp,
            is_write: None,
            target_file: None,
            version: version.into(),
            plugin: None,
        }
    }

    pub fn with_write(mut self, is_write: bool) -> Self {
        self.is_write = Some(is_write);
        self
    }

    pub fn with_target_file(mut self, target_file: impl Into<String>) -> Self {
        self.target_file = Some(target_file.into());
        self
    }

    pub fn with_plugin(mut self, plugin: impl Into<String>) -> Self {
        self.plugin = Some(plugin.into());
        self
    }

    /// Plugin identifier when one was given; an empty string counts as unset.
    pub fn plugin_name(&self) -> Option<&str> {
        self.plugin.as_deref().filter(|p| !p.is_empty())
    }

    /// `Some(true)` only; a false flag is omitted just like a missing one.
    pub fn write_flag(&self) -> Option<bool> {
        match self.is_write {
            Some(true) => Some(true),
            _ => None,
        }
    }
}
