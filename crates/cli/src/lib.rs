// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Audit a linter's per-file-ignores for codes it no longer reports.

pub mod cli;
pub mod color;
pub mod discovery;
pub mod error;
pub mod ini;
pub mod output;
pub mod report;
pub mod rules;
pub mod scan;
pub mod scratch;

pub use cli::{Cli, OutputFormat};
pub use error::{Error, ExitCode, Result};
pub use ini::{IniDocument, IniError};
pub use report::{Report, StaleEntry, stale_codes};
pub use rules::{Rule, RuleSet, read_rules};
pub use scan::{Linter, ScanResult, scan};
pub use scratch::ScratchConfig;

#[cfg(test)]
pub mod test_utils;
