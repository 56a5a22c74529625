// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Stale-code comparison between configured ignores and linter findings.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::rules::RuleSet;
use crate::scan::ScanResult;

/// A pattern with ignore codes the linter no longer reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaleEntry {
    pub pattern: String,
    /// Sorted ascending.
    pub codes: Vec<String>,
}

/// Stale entries in rule order; patterns without stale codes are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    entries: Vec<StaleEntry>,
}

impl Report {
    /// Compare every rule against its scan result.
    ///
    /// Every rule pattern must have been scanned; a missing result is a bug
    /// in the caller.
    pub fn build(rules: &RuleSet, scan: &ScanResult) -> Result<Self> {
        let mut entries = Vec::new();
        for rule in rules.iter() {
            let reported = scan.get(&rule.pattern).ok_or_else(|| {
                Error::Internal(format!("no scan result for pattern '{}'", rule.pattern))
            })?;
            let stale = stale_codes(&rule.codes, reported);
            if !stale.is_empty() {
                entries.push(StaleEntry {
                    pattern: rule.pattern.clone(),
                    codes: stale.into_iter().collect(),
                });
            }
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[StaleEntry] {
        &self.entries
    }

    pub fn has_stale(&self) -> bool {
        !self.entries.is_empty()
    }
}

/// Configured codes the linter did not report.
pub fn stale_codes(configured: &BTreeSet<String>, reported: &BTreeSet<String>) -> BTreeSet<String> {
    configured.difference(reported).cloned().collect()
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
