// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Config file discovery.
//!
//! Walks from the current directory up to the git root looking for the
//! first linter config that has the ignore section.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::ini::IniDocument;

/// Config file names checked in each directory, in order.
pub const CONFIG_CANDIDATES: &[&str] = &["setup.cfg", "tox.ini", ".flake8"];

/// Find a config containing `[section]`, starting from `start_dir` and
/// walking up to the git root.
pub fn find_config(start_dir: &Path, section: &str) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        for name in CONFIG_CANDIDATES {
            let candidate = current.join(name);
            if has_section(&candidate, section) {
                return Some(candidate);
            }
        }

        // Stop at git root
        if current.join(".git").exists() {
            return None;
        }

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => return None,
        }
    }
}

fn has_section(path: &Path, section: &str) -> bool {
    if !path.is_file() {
        return false;
    }
    match IniDocument::load(path) {
        Ok(doc) => doc.has_section(section),
        Err(e) => {
            tracing::debug!("skipping {}: {}", path.display(), e);
            false
        }
    }
}

/// Resolve the config path from the CLI arg/env var or discovery.
///
/// Priority:
/// 1. CLI flag `-C`/`--config` (handled by clap with env = "STALEIGNORE_CONFIG")
/// 2. Discovery from current directory up to git root
///
/// The returned path is absolute, so it stays valid when the linter runs
/// from the config's directory.
pub fn resolve_config(explicit: Option<&Path>, cwd: &Path, section: &str) -> Result<PathBuf> {
    let path = match explicit {
        Some(path) => {
            let path = cwd.join(path);
            if !path.is_file() {
                return Err(Error::config(
                    format!("config file not found: {}", path.display()),
                    path,
                ));
            }
            path
        }
        None => find_config(cwd, section).ok_or_else(|| Error::Config {
            message: format!(
                "no {} with a [{}] section found from {}",
                CONFIG_CANDIDATES.join(", "),
                section,
                cwd.display()
            ),
            path: None,
        })?,
    };

    std::fs::canonicalize(&path).map_err(|e| {
        Error::config(
            format!("failed to resolve {}: {}", path.display(), e),
            path.clone(),
        )
    })
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
