// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::Parser;

use crate::rules::{DEFAULT_KEY, DEFAULT_SECTION};
use crate::scan::DEFAULT_LINTER;

/// Find per-file-ignores codes the linter no longer reports
#[derive(Parser)]
#[command(name = "staleignore")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file to audit (default: first setup.cfg, tox.ini, or .flake8
    /// with the section, searching up to the git root)
    #[arg(short = 'C', long = "config", env = "STALEIGNORE_CONFIG")]
    pub config: Option<PathBuf>,

    /// INI section holding the ignore directive
    #[arg(long, default_value = DEFAULT_SECTION, value_name = "NAME")]
    pub section: String,

    /// Key holding the per-file ignores
    #[arg(long, default_value = DEFAULT_KEY, value_name = "NAME")]
    pub key: String,

    /// Linter command line
    #[arg(
        long,
        default_value = DEFAULT_LINTER,
        env = "STALEIGNORE_LINTER",
        value_name = "CMD"
    )]
    pub linter: String,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Exit with status 1 when stale codes are found
    #[arg(long)]
    pub check: bool,

    /// Force color output
    #[arg(long)]
    pub color: bool,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
