// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Staleignore CLI entry point.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use staleignore::cli::Cli;
use staleignore::error::ExitCode;

mod cmd_audit;

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("STALEIGNORE_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("staleignore: {}", e);
            match e.downcast_ref::<staleignore::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    cmd_audit::run(&cli)
}
