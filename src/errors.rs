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

//! # Wakalog Error Module
//!
//! Error types used while building a logger. Emitting a log line never
//! returns an error; these only surface from setup paths such as opening the
//! log file or installing the `log` facade backend.
//!
//! ## Error Categories
//!
//! - **Io**: Log file could not be opened or created
//! - **Config**: Invalid configuration values
//! - **Setup**: Logger installation failures

use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Convenience result type used throughout Wakalog.
pub type Result<T> = std::result::Result<T, WkError>;

/// Canonical error enumeration for Wakalog.
#[derive(Debug, Error, Serialize, Deserialize)]
pub enum WkError {
    /// Errors originating from filesystem IO.
    #[error("io error: {0}")]
    Io(String),

    /// Invalid or unusable configuration.
    #[error("config error: {message}")]
    Config { message: String },

    /// Failures while wiring the logger into the process.
    #[error("setup error: {0}")]
    Setup(String),
}

impl From<io::Error> for WkError {
    fn from(err: io::Error) -> Self {
        WkError::Io(err.to_string())
    }
}

impl From<log::SetLoggerError> for WkError {
    fn from(err: log::SetLoggerError) -> Self {
        WkError::Setup(err.to_string())
    }
}

impl WkError {
    /// Helper to construct config errors.
    pub fn config<T: Into<String>>(message: T) -> Self {
        WkError::Config {
            message: message.into(),
        }
    }
}
