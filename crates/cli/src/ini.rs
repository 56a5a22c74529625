// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Lossless INI documents.
//!
//! Reads the INI dialect linters load through Python's `configparser`:
//! - `[section]` headers (case-sensitive names)
//! - `key = value` or `key: value` entries (keys compared case-insensitively)
//! - indented continuation lines that extend the previous value
//! - full-line `#` / `;` comments
//!
//! Every line keeps its original bytes, so a document renders back exactly
//! as read apart from entries edited through [`IniDocument::clear_value`].

use std::collections::HashSet;
use std::path::Path;

use crate::error::{Error, Result};

/// INI parse and lookup errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IniError {
    /// Entry appears before the first section header.
    #[error("line {line}: entry outside of any section")]
    MissingSectionHeader { line: usize },

    /// Line is not a header, entry, comment, or continuation.
    #[error("line {line}: cannot parse `{text}`")]
    Malformed { line: usize, text: String },

    /// Section header repeated.
    #[error("line {line}: duplicate section [{section}]")]
    DuplicateSection { line: usize, section: String },

    /// Key repeated within one section.
    #[error("line {line}: duplicate option `{key}` in section [{section}]")]
    DuplicateOption {
        line: usize,
        section: String,
        key: String,
    },

    #[error("no section [{0}]")]
    NoSection(String),

    #[error("no option `{key}` in section [{section}]")]
    NoOption { section: String, key: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum LineKind {
    Blank,
    Comment,
    Section(String),
    /// `delimiter` is the byte offset of the `=` or `:` in the line text.
    Entry {
        key: String,
        delimiter: usize,
    },
    Continuation,
}

#[derive(Debug, Clone)]
struct Line {
    /// Line text without its terminator.
    text: String,
    /// `"\n"`, `"\r\n"`, or empty for an unterminated last line.
    ending: String,
    kind: LineKind,
}

/// A parsed INI file that preserves its source bytes.
#[derive(Debug, Clone)]
pub struct IniDocument {
    lines: Vec<Line>,
}

impl IniDocument {
    /// Parse INI source text.
    pub fn parse(source: &str) -> std::result::Result<Self, IniError> {
        let mut lines = Vec::new();
        let mut sections: HashSet<String> = HashSet::new();
        let mut keys: HashSet<String> = HashSet::new();
        let mut current_section: Option<String> = None;
        // Indent of the current entry's key line; `None` outside an entry.
        let mut entry_indent: Option<usize> = None;

        for (idx, raw) in source.split_inclusive('\n').enumerate() {
            let line_no = idx + 1;
            let (text, ending) = split_ending(raw);
            let trimmed = text.trim();
            let indent = text.len() - text.trim_start().len();

            let kind = if trimmed.is_empty() {
                LineKind::Blank
            } else if trimmed.starts_with('#') || trimmed.starts_with(';') {
                LineKind::Comment
            } else if entry_indent.is_some_and(|level| indent > level) {
                LineKind::Continuation
            } else if let Some(name) = section_name(trimmed) {
                if !sections.insert(name.to_string()) {
                    return Err(IniError::DuplicateSection {
                        line: line_no,
                        section: name.to_string(),
                    });
                }
                current_section = Some(name.to_string());
                keys.clear();
                entry_indent = None;
                LineKind::Section(name.to_string())
            } else {
                let Some(section) = &current_section else {
                    return Err(IniError::MissingSectionHeader { line: line_no });
                };
                let Some(delimiter) = text.find(['=', ':']) else {
                    return Err(IniError::Malformed {
                        line: line_no,
                        text: trimmed.to_string(),
                    });
                };
                let key = text[..delimiter].trim().to_lowercase();
                if key.is_empty() {
                    return Err(IniError::Malformed {
                        line: line_no,
                        text: trimmed.to_string(),
                    });
                }
                if !keys.insert(key.clone()) {
                    return Err(IniError::DuplicateOption {
                        line: line_no,
                        section: section.clone(),
                        key,
                    });
                }
                entry_indent = Some(indent);
                LineKind::Entry { key, delimiter }
            };

            lines.push(Line {
                text: text.to_string(),
                ending: ending.to_string(),
                kind,
            });
        }

        Ok(Self { lines })
    }

    /// Read and parse an INI file, reporting failures as config errors.
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("failed to read {}: {}", path.display(), e), path)
        })?;
        Self::parse(&source)
            .map_err(|e| Error::config(format!("{}: {}", path.display(), e), path))
    }

    /// Whether a section with this exact name exists.
    pub fn has_section(&self, section: &str) -> bool {
        self.lines
            .iter()
            .any(|line| matches!(&line.kind, LineKind::Section(name) if name == section))
    }

    /// Get the value of `key` in `section`.
    ///
    /// Multi-line values are joined with `\n`; each line is trimmed, blank
    /// lines between continuations are kept, and trailing blanks are dropped.
    pub fn get(&self, section: &str, key: &str) -> std::result::Result<String, IniError> {
        let idx = self.find_entry(section, key)?;
        let LineKind::Entry { delimiter, .. } = &self.lines[idx].kind else {
            return Err(no_option(section, key));
        };

        let mut parts = vec![self.lines[idx].text[delimiter + 1..].trim()];
        for line in &self.lines[idx + 1..self.entry_end(idx)] {
            match line.kind {
                LineKind::Blank => parts.push(""),
                LineKind::Continuation => parts.push(line.text.trim()),
                _ => {}
            }
        }
        Ok(parts.join("\n").trim_end().to_string())
    }

    /// Replace the value of `key` in `section` with an empty string.
    ///
    /// The key line keeps its indentation, key text, and delimiter. Its
    /// continuation lines (and blank lines between them) are removed;
    /// comments inside the value stay where they are.
    pub fn clear_value(&mut self, section: &str, key: &str) -> std::result::Result<(), IniError> {
        let idx = self.find_entry(section, key)?;
        let end = self.entry_end(idx);

        let LineKind::Entry { delimiter, .. } = &self.lines[idx].kind else {
            return Err(no_option(section, key));
        };
        let delimiter = *delimiter;
        self.lines[idx].text.truncate(delimiter + 1);

        // Blank lines after the last continuation sit between entries, not inside.
        let last_continuation = self.lines[idx + 1..end]
            .iter()
            .rposition(|line| line.kind == LineKind::Continuation)
            .map(|pos| idx + 1 + pos);

        if let Some(last) = last_continuation {
            let mut pos = 0;
            self.lines.retain(|line| {
                let inside = pos > idx && pos <= last;
                pos += 1;
                !(inside && matches!(line.kind, LineKind::Continuation | LineKind::Blank))
            });
        }
        Ok(())
    }

    /// Render the document back to text.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(&line.text);
            out.push_str(&line.ending);
        }
        out
    }

    fn find_entry(&self, section: &str, key: &str) -> std::result::Result<usize, IniError> {
        let start = self
            .lines
            .iter()
            .position(|line| matches!(&line.kind, LineKind::Section(name) if name == section))
            .ok_or_else(|| IniError::NoSection(section.to_string()))?;

        let wanted = key.trim().to_lowercase();
        for (offset, line) in self.lines[start + 1..].iter().enumerate() {
            match &line.kind {
                LineKind::Section(_) => break,
                LineKind::Entry { key, .. } if *key == wanted => return Ok(start + 1 + offset),
                _ => {}
            }
        }
        Err(no_option(section, key))
    }

    /// Index one past the last line that can belong to the entry at `idx`.
    fn entry_end(&self, idx: usize) -> usize {
        self.lines[idx + 1..]
            .iter()
            .position(|line| matches!(line.kind, LineKind::Section(_) | LineKind::Entry { .. }))
            .map_or(self.lines.len(), |pos| idx + 1 + pos)
    }
}

fn no_option(section: &str, key: &str) -> IniError {
    IniError::NoOption {
        section: section.to_string(),
        key: key.to_string(),
    }
}

fn split_ending(raw: &str) -> (&str, &str) {
    if let Some(text) = raw.strip_suffix("\r\n") {
        (text, "\r\n")
    } else if let Some(text) = raw.strip_suffix('\n') {
        (text, "\n")
    } else {
        (raw, "")
    }
}

fn section_name(trimmed: &str) -> Option<&str> {
    trimmed
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .filter(|name| !name.is_empty())
}

#[cfg(test)]
#[path = "ini_tests.rs"]
mod tests;
