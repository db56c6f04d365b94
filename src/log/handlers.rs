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

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use crate::errors::Result;

/// Destination for formatted log lines.
///
/// Implementations swallow their own I/O errors: a log call must never fail
/// or panic because the sink is unhappy.
pub trait WkLogHandler {
    fn handle(&self, line: &str);

    fn flush(&self) {}
}

/// Appends one line per record to a file.
///
/// The file is opened once in create+append mode. There is no locking across
/// processes; concurrent writers may interleave lines.
#[derive(Debug)]
pub struct WkFileHandler {
    file: Mutex<File>,
}

impl WkFileHandler {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(WkFileHandler {
            file: Mutex::new(file),
        })
    }

    fn lock(&self) -> MutexGuard<'_, File> {
        match self.file.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl WkLogHandler for WkFileHandler {
    fn handle(&self, line: &str) {
        let _ = writeln!(self.lock(), "{}", line);
    }

    fn flush(&self) {
        let _ = self.lock().flush();
    }
}

/// Console fallback used when the log file cannot be opened.
#[derive(Debug, Default)]
pub struct WkStderrHandler;

impl WkLogHandler for WkStderrHandler {
    fn handle(&self, line: &str) {
        let _ = writeln!(io::stderr().lock(), "{}", line);
    }
}

/// Drops everything.
#[derive(Debug, Default)]
pub struct WkNullHandler;

impl WkLogHandler for WkNullHandler {
    fn handle(&self, _line: &str) {}
}
