// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Audit command: read rules, lint clean, report stale codes.

use std::path::Path;

use termcolor::StandardStream;

use staleignore::cli::{Cli, OutputFormat};
use staleignore::color::color_choice;
use staleignore::discovery::resolve_config;
use staleignore::error::ExitCode;
use staleignore::output::json::{JsonFormatter, create_output};
use staleignore::output::text::TextFormatter;
use staleignore::report::Report;
use staleignore::rules::read_rules;
use staleignore::scan::{Linter, scan};
use staleignore::scratch::ScratchConfig;

/// Run the audit.
pub fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let config = resolve_config(cli.config.as_deref(), &cwd, &cli.section)?;
    tracing::debug!("auditing {}", config.display());

    // Globs in per-file-ignores are relative to the config's directory.
    let root = config.parent().unwrap_or(Path::new(".")).to_path_buf();
    let linter = Linter::parse(&cli.linter)?;
    let rules = read_rules(&config, &cli.section, &cli.key)?;

    let scratch = ScratchConfig::create(&config, &cli.section, &cli.key)?;
    let scanned = scan(&rules, &linter, scratch.path(), &root);
    scratch.close();
    let scanned = scanned?;

    let report = Report::build(&rules, &scanned)?;
    tracing::debug!(
        "{} of {} pattern(s) have stale codes",
        report.entries().len(),
        rules.len()
    );

    match cli.output {
        OutputFormat::Text => {
            let stdout = StandardStream::stdout(color_choice(cli.color, cli.no_color));
            TextFormatter::new(stdout).write(&report)?;
        }
        OutputFormat::Json => {
            JsonFormatter::new(std::io::stdout()).write(&create_output(&config, &report))?;
        }
    }

    if cli.check && report.has_stale() {
        Ok(ExitCode::StaleFound)
    } else {
        Ok(ExitCode::Success)
    }
}
