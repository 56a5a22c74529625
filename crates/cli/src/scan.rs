// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Linter runs with ignores disabled.
//!
//! For every rule pattern the glob is expanded under the project root and
//! the linter is run once over the matches with the scratch config:
//!
//! ```text
//! <linter> --config=<scratch> --format=%(row)d\t%(code)s <files...>
//! ```
//!
//! Each output line is `<row>\t<code>`; anything else is noise and dropped.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use globset::{Glob, GlobBuilder, GlobMatcher};
use ignore::WalkBuilder;

use crate::error::{Error, Result};
use crate::rules::RuleSet;

/// Linter command used when none is configured.
pub const DEFAULT_LINTER: &str = "python3 -m flake8";

/// Output format requested from the linter: one `<row>\t<code>` per violation.
pub const OUTPUT_FORMAT: &str = "%(row)d\t%(code)s";

/// An external linter command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Linter {
    program: String,
    args: Vec<String>,
}

impl Linter {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Parse a shell-style command line such as `python3 -m flake8`.
    pub fn parse(command_line: &str) -> Result<Self> {
        let words = shell_words::split(command_line)
            .map_err(|e| Error::Argument(format!("invalid linter command '{command_line}': {e}")))?;
        let mut words = words.into_iter();
        let Some(program) = words.next() else {
            return Err(Error::Argument("linter command is empty".to_string()));
        };
        Ok(Self::new(program, words.collect()))
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Build the invocation for one set of files.
    pub fn command(&self, config: &Path, files: &[PathBuf]) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd.arg(format!("--config={}", config.display()));
        cmd.arg(format!("--format={OUTPUT_FORMAT}"));
        cmd.args(files);
        cmd
    }

    /// Run the linter over `files` from `root` and collect the reported codes.
    ///
    /// The linter's exit status is not checked: linters exit non-zero
    /// whenever they report anything.
    pub fn report(&self, config: &Path, files: &[PathBuf], root: &Path) -> Result<BTreeSet<String>> {
        let mut cmd = self.command(config, files);
        cmd.current_dir(root);
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::inherit());

        tracing::debug!("running {:?}", cmd);
        let output = cmd.output().map_err(|source| Error::Spawn {
            program: self.program.clone(),
            source,
        })?;
        tracing::trace!("{} exited with {}", self.program, output.status);

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(parse_output(&stdout))
    }
}

/// Codes the linter reported, keyed by rule pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    reported: BTreeMap<String, BTreeSet<String>>,
}

impl ScanResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, pattern: impl Into<String>, codes: BTreeSet<String>) {
        self.reported.insert(pattern.into(), codes);
    }

    pub fn get(&self, pattern: &str) -> Option<&BTreeSet<String>> {
        self.reported.get(pattern)
    }

    pub fn len(&self) -> usize {
        self.reported.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reported.is_empty()
    }
}

impl<P, C, S> FromIterator<(P, C)> for ScanResult
where
    P: Into<String>,
    C: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (P, C)>>(iter: T) -> Self {
        let mut result = ScanResult::new();
        for (pattern, codes) in iter {
            result.insert(pattern, codes.into_iter().map(Into::into).collect());
        }
        result
    }
}

/// Run the linter once per rule pattern, in rule order.
pub fn scan(rules: &RuleSet, linter: &Linter, config: &Path, root: &Path) -> Result<ScanResult> {
    let mut result = ScanResult::new();
    for rule in rules.iter() {
        let files = expand_glob(root, &rule.pattern)?;
        tracing::debug!("{}: {} matching file(s)", rule.pattern, files.len());

        let codes = linter.report(config, &files, root)?;
        tracing::debug!("{}: reported {:?}", rule.pattern, codes);
        result.insert(rule.pattern.clone(), codes);
    }
    Ok(result)
}

/// Parse `<row>\t<code>` lines into the set of codes.
///
/// Lines that do not split into exactly two fields are skipped.
pub fn parse_output(stdout: &str) -> BTreeSet<String> {
    let mut codes = BTreeSet::new();
    for line in stdout.lines() {
        let mut fields = line.split('\t');
        let (Some(_row), Some(code), None) = (fields.next(), fields.next(), fields.next()) else {
            continue;
        };
        codes.insert(code.to_string());
    }
    codes
}

/// Expand a glob pattern to paths under `root`, relative to `root`.
///
/// `*`, `?` and `[...]` stay within one path component and `**` spans any
/// number of directories. Matching directories are returned alongside
/// files; the linter descends into them itself. A hidden entry is only
/// matched by a pattern component that itself starts with `.`, so
/// `pkg/.conf.py` and `pkg/.*` find dotfiles while `pkg/*` does not.
/// Results are sorted.
pub fn expand_glob(root: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let pattern = pattern.strip_prefix("./").unwrap_or(pattern);
    let matcher = compile_glob(pattern)?.compile_matcher();
    let hidden = hidden_components(pattern)?;

    let prefix = literal_prefix(pattern);
    let base = root.join(&prefix);
    if !base.is_dir() {
        return Ok(Vec::new());
    }

    let mut builder = WalkBuilder::new(&base);
    builder.standard_filters(false);
    // Without `**` or alternation, matches sit at a fixed depth below the prefix.
    if !pattern.contains("**") && !pattern.contains('{') {
        let depth = pattern.split('/').count() - prefix.components().count();
        builder.max_depth(Some(depth));
    }
    // Prune hidden entries no dot component of the pattern can match.
    builder.filter_entry(move |entry| {
        entry.depth() == 0
            || !entry.file_name().to_string_lossy().starts_with('.')
            || hidden.iter().any(|glob| glob.is_match(entry.file_name()))
    });

    let mut paths = Vec::new();
    for entry in builder.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!("walk error: {}", err);
                continue;
            }
        };
        let Ok(relative) = entry.path().strip_prefix(root) else {
            continue;
        };
        if !relative.as_os_str().is_empty() && matcher.is_match(relative) {
            paths.push(relative.to_path_buf());
        }
    }
    paths.sort();
    Ok(paths)
}

fn compile_glob(pattern: &str) -> Result<Glob> {
    GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map_err(|e| Error::Config {
            message: format!("invalid glob pattern '{pattern}': {e}"),
            path: None,
        })
}

/// Matchers for the pattern components that name hidden entries.
fn hidden_components(pattern: &str) -> Result<Vec<GlobMatcher>> {
    pattern
        .split('/')
        .filter(|component| component.starts_with('.') && *component != "." && *component != "..")
        .map(|component| compile_glob(component).map(|glob| glob.compile_matcher()))
        .collect()
}

/// Check if a string contains glob pattern characters.
pub fn is_glob_pattern(s: &str) -> bool {
    s.contains(['*', '?', '[', '{'])
}

/// Leading directories of `pattern` that contain no glob characters.
fn literal_prefix(pattern: &str) -> PathBuf {
    let mut components: Vec<&str> = pattern.split('/').collect();
    // The final component names files, never a directory to walk from.
    components.pop();
    components
        .into_iter()
        .take_while(|component| !is_glob_pattern(component))
        .filter(|component| !component.is_empty())
        .collect()
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
