//! Behavioral specs for fatal errors.
//!
//! Configuration and environment problems exit with 2, print a single
//! `staleignore:` line to stderr, and leave no scratch config behind.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

#[test]
fn missing_config_exits_2() {
    let project = Project::empty();
    std::fs::create_dir(project.path().join(".git")).unwrap();
    project
        .cmd()
        .assert()
        .code(2)
        .stderr(predicates::str::starts_with("staleignore: config error"));
}

#[test]
fn explicit_missing_config_exits_2() {
    let project = Project::empty();
    project
        .cmd()
        .args(["-C", "nope.cfg"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("not found"));
}

#[test]
fn missing_key_exits_2_without_scratch_file() {
    let project = Project::with_config("[flake8]\nmax-line-length = 100\n");
    project
        .cmd()
        .assert()
        .code(2)
        .stderr(predicates::str::contains("per-file-ignores"));
    assert_eq!(project.files().len(), 1);
}

#[test]
fn malformed_entry_exits_2() {
    let project = Project::with_config("[flake8]\nper-file-ignores =\n    a.py E1\n");
    project
        .cmd()
        .assert()
        .code(2)
        .stderr(predicates::str::contains("a.py E1"));
    assert_eq!(project.linter_calls(), 0);
}

#[test]
fn missing_linter_exits_2_and_cleans_up() {
    let project = Project::with_config("[flake8]\nper-file-ignores = a.py: E1\n").file("a.py", "");
    let before = project.files();
    staleignore_cmd()
        .current_dir(project.path())
        .args(["--linter", "staleignore-missing-linter --flag"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("staleignore-missing-linter"));
    assert_eq!(project.files(), before);
}

#[test]
fn empty_linter_command_exits_2() {
    let project = Project::with_config("[flake8]\nper-file-ignores = a.py: E1\n");
    staleignore_cmd()
        .current_dir(project.path())
        .args(["--linter", ""])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("linter command is empty"));
}

#[test]
fn invalid_glob_exits_2() {
    let project = Project::with_config("[flake8]\nper-file-ignores = a/[.py: E1\n");
    project
        .cmd()
        .assert()
        .code(2)
        .stderr(predicates::str::contains("invalid glob"));
    assert_eq!(project.files().len(), 1);
}
