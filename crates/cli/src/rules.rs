// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-file-ignore rules.
//!
//! The ignore directive's value is a newline-separated list of entries:
//!
//! ```text
//! per-file-ignores =
//!     **/__init__.py: D104, F401
//!     tests/*.py: S101
//! ```

use std::collections::BTreeSet;
use std::path::Path;

use crate::error::{Error, Result};
use crate::ini::IniDocument;

/// Section read when none is given.
pub const DEFAULT_SECTION: &str = "flake8";

/// Key read when none is given.
pub const DEFAULT_KEY: &str = "per-file-ignores";

/// Codes suppressed for one glob pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub pattern: String,
    pub codes: BTreeSet<String>,
}

/// Rules in the order their patterns first appear in the config.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the codes for `pattern`.
    ///
    /// A repeated pattern replaces the earlier codes but keeps its position.
    pub fn insert(&mut self, pattern: impl Into<String>, codes: BTreeSet<String>) {
        let pattern = pattern.into();
        match self.rules.iter_mut().find(|r| r.pattern == pattern) {
            Some(rule) => rule.codes = codes,
            None => self.rules.push(Rule { pattern, codes }),
        }
    }

    pub fn get(&self, pattern: &str) -> Option<&BTreeSet<String>> {
        self.rules
            .iter()
            .find(|r| r.pattern == pattern)
            .map(|r| &r.codes)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<P, C, S> FromIterator<(P, C)> for RuleSet
where
    P: Into<String>,
    C: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (P, C)>>(iter: T) -> Self {
        let mut set = RuleSet::new();
        for (pattern, codes) in iter {
            set.insert(pattern, codes.into_iter().map(Into::into).collect());
        }
        set
    }
}

/// An ignore entry without the `<glob>:<codes>` separator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("ignore entry `{entry}` has no ':' separator")]
pub struct EntryError {
    pub entry: String,
}

/// Parse the value of the ignore directive.
pub fn parse_ignores(value: &str) -> std::result::Result<RuleSet, EntryError> {
    let mut rules = RuleSet::new();
    for line in value.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let Some((pattern, codes)) = line.split_once(':') else {
            return Err(EntryError {
                entry: line.to_string(),
            });
        };
        let codes = codes
            .split(',')
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .map(str::to_string)
            .collect();
        rules.insert(pattern.trim(), codes);
    }
    Ok(rules)
}

/// Read the rule set from `section`/`key` of the config file at `path`.
pub fn read_rules(path: &Path, section: &str, key: &str) -> Result<RuleSet> {
    let doc = IniDocument::load(path)?;
    let value = doc
        .get(section, key)
        .map_err(|e| Error::config(format!("{}: {}", path.display(), e), path))?;
    let rules = parse_ignores(&value)
        .map_err(|e| Error::config(format!("{}: {}", path.display(), e), path))?;
    tracing::debug!("read {} ignore rule(s) from {}", rules.len(), path.display());
    Ok(rules)
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
