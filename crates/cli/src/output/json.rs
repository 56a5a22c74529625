// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output formatter.
//!
//! JSON is buffered and written at the end (not streamed).

use std::io::Write;
use std::path::Path;

use chrono::Utc;
use serde::Serialize;

use crate::report::{Report, StaleEntry};

/// Complete JSON document for one audit.
#[derive(Debug, Serialize)]
pub struct AuditOutput<'a> {
    pub timestamp: String,
    pub config: String,
    /// True when any pattern has stale codes.
    pub stale: bool,
    pub patterns: &'a [StaleEntry],
}

/// JSON output formatter.
pub struct JsonFormatter<W: Write> {
    writer: W,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write the complete JSON output.
    pub fn write(&mut self, output: &AuditOutput<'_>) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(output).map_err(std::io::Error::other)?;
        writeln!(self.writer, "{}", json)
    }
}

/// Create AuditOutput with current timestamp.
pub fn create_output<'a>(config: &Path, report: &'a Report) -> AuditOutput<'a> {
    AuditOutput {
        timestamp: Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
        config: config.display().to_string(),
        stale: report.has_stale(),
        patterns: report.entries(),
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
