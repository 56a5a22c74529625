//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for running staleignore against throwaway projects
//! with a fake linter.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Returns a Command configured to run the staleignore binary
pub fn staleignore_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("staleignore"));
    for var in [
        "STALEIGNORE_CONFIG",
        "STALEIGNORE_LINTER",
        "STALEIGNORE_LOG",
        "NO_COLOR",
        "COLOR",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

/// Fake flake8: reports `<row>\t<code>` for every `# report: <code>` line in
/// the files it is given, mixed with lines that are not two tab-separated
/// fields. It records each call and the last config it was pointed at.
const FAKE_LINTER: &str = r#"config=""
echo "$@" >> "$TOOLS/calls.log"
for arg in "$@"; do
  case "$arg" in
    --config=*) config="${arg#--config=}" ;;
    --format=*) ;;
    *) awk '/^# report: /{ printf "%d\t%s\n", NR, $3 }' "$arg" ;;
  esac
done
echo "noise without a tab"
printf '1\tTOO\tMANY\n'
if [ -n "$config" ]; then cp "$config" "$TOOLS/seen.cfg"; fi
exit 1
"#;

/// A temporary project plus a directory holding the fake linter.
pub struct Project {
    dir: TempDir,
    tools: TempDir,
}

#[allow(dead_code)]
impl Project {
    /// Empty project.
    pub fn empty() -> Self {
        let tools = TempDir::new().unwrap();
        let script = FAKE_LINTER.replace("$TOOLS", &tools.path().display().to_string());
        fs::write(tools.path().join("flake8.sh"), script).unwrap();
        Self {
            dir: TempDir::new().unwrap(),
            tools,
        }
    }

    /// Project with a setup.cfg.
    pub fn with_config(config: &str) -> Self {
        Self::empty().file("setup.cfg", config)
    }

    /// Project copied from tests/fixtures/<name>.
    pub fn fixture(name: &str) -> Self {
        let project = Self::empty();
        let source = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("../../tests/fixtures")
            .join(name);
        copy_tree(&source, project.path());
        project
    }

    /// Add a file; parent directories are created automatically.
    pub fn file(self, path: &str, content: &str) -> Self {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
        self
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Linter command line for the fake linter.
    pub fn linter(&self) -> String {
        format!("sh {}", self.tools.path().join("flake8.sh").display())
    }

    /// staleignore command running in the project root with the fake linter.
    pub fn cmd(&self) -> Command {
        let mut cmd = staleignore_cmd();
        cmd.current_dir(self.path()).arg("--linter").arg(self.linter());
        cmd
    }

    /// Config the fake linter last ran with.
    pub fn seen_config(&self) -> String {
        fs::read_to_string(self.tools.path().join("seen.cfg")).unwrap()
    }

    /// Arguments of every fake linter call, one line per call.
    pub fn linter_log(&self) -> String {
        fs::read_to_string(self.tools.path().join("calls.log")).unwrap_or_default()
    }

    /// Number of times the fake linter ran.
    pub fn linter_calls(&self) -> usize {
        self.linter_log().lines().count()
    }

    /// Sorted paths of every file in the project, relative to its root.
    pub fn files(&self) -> Vec<PathBuf> {
        let mut files = Vec::new();
        collect_files(self.path(), self.path(), &mut files);
        files.sort();
        files
    }
}

fn copy_tree(from: &Path, to: &Path) {
    for entry in fs::read_dir(from).unwrap() {
        let entry = entry.unwrap();
        let target = to.join(entry.file_name());
        if entry.file_type().unwrap().is_dir() {
            fs::create_dir_all(&target).unwrap();
            copy_tree(&entry.path(), &target);
        } else {
            fs::copy(entry.path(), target).unwrap();
        }
    }
}

fn collect_files(root: &Path, dir: &Path, out: &mut Vec<PathBuf>) {
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            collect_files(root, &path, out);
        } else {
            out.push(path.strip_prefix(root).unwrap().to_path_buf());
        }
    }
}
