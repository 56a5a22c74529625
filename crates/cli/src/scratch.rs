// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scratch copy of the linter config with the ignore directive emptied.
//!
//! The copy sits next to the original (so relative settings in it resolve
//! the same way) and is removed when the [`ScratchConfig`] guard is dropped.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{Error, Result};
use crate::ini::IniDocument;

/// Extension given to every scratch config.
pub const SCRATCH_SUFFIX: &str = ".cfg";

/// A temporary config file deleted on drop.
#[derive(Debug)]
pub struct ScratchConfig {
    file: NamedTempFile,
}

impl ScratchConfig {
    /// Write a copy of `source` whose `section`/`key` value is empty.
    ///
    /// The file is named `<source filename><random><SCRATCH_SUFFIX>` and is
    /// created in the source's directory.
    pub fn create(source: &Path, section: &str, key: &str) -> Result<Self> {
        let mut doc = IniDocument::load(source)?;
        doc.clear_value(section, key)
            .map_err(|e| Error::config(format!("{}: {}", source.display(), e), source))?;

        let dir = match source.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let prefix = source
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_else(|| "config".into());

        let mut file = tempfile::Builder::new()
            .prefix(&prefix)
            .suffix(SCRATCH_SUFFIX)
            .tempfile_in(dir)
            .map_err(|source| Error::Io {
                path: dir.to_path_buf(),
                source,
            })?;

        let path = file.path().to_path_buf();
        file.write_all(doc.render().as_bytes())
            .and_then(|()| file.flush())
            .map_err(|source| Error::Io { path, source })?;

        tracing::debug!("wrote scratch config {}", file.path().display());
        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Remove the scratch file now.
    ///
    /// Failure is logged, not returned; there is nothing left to retry with.
    pub fn close(self) {
        let path = self.file.path().to_path_buf();
        match self.file.close() {
            Ok(()) => tracing::debug!("removed scratch config {}", path.display()),
            Err(e) => tracing::warn!("failed to remove {}: {}", path.display(), e),
        }
    }
}

#[cfg(test)]
#[path = "scratch_tests.rs"]
mod tests;
