// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

use std::process::ExitCode;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing::{debug, error, info};
use zonectl::{
    cli::{run_task, Cli, Commands},
    constants::{DEFAULT_LOG_LEVEL, LOG_FORMAT_ENV},
    output::ModuleResult,
};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Commands::Completions { shell } = cli.command {
        clap_complete::generate(shell, &mut Cli::command(), "zonectl", &mut std::io::stdout());
        return ExitCode::SUCCESS;
    }

    init_logging();

    let result = run(cli.command);
    let outcome = ModuleResult::from(&result);

    if let Err(e) = &result {
        error!(error = %format!("{e:#}"), "Module failed");
    }

    match outcome.to_json() {
        Ok(json) => println!("{json}"),
        Err(e) => {
            error!(error = %e, "Failed to serialize module result");
            return ExitCode::FAILURE;
        }
    }

    if outcome.failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn run(command: Commands) -> Result<bool> {
    let Some(task) = command.into_task()? else {
        return Ok(false);
    };

    // One read and at most one write, strictly in sequence
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let changed = runtime.block_on(run_task(task))?;
    info!(changed = changed, "Module finished");
    Ok(changed)
}

fn init_logging() {
    // Initialize logging with custom format
    // Format: timestamp file:line LEVEL message
    //
    // Respects RUST_LOG environment variable if set, otherwise defaults to INFO level
    // Example: RUST_LOG=debug zonectl zone ...
    //
    // Respects RUST_LOG_FORMAT environment variable for output format
    // Example: RUST_LOG_FORMAT=json zonectl zone ...
    //
    // Logs go to stderr; stdout carries only the JSON result.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_LEVEL));

    let log_format = std::env::var(LOG_FORMAT_ENV).unwrap_or_else(|_| "text".to_string());

    match log_format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_file(true)
                .with_line_number(true)
                .with_target(false)
                .json()
                .init();
        }
        _ => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_file(true)
                .with_line_number(true)
                .with_target(false)
                .with_ansi(true)
                .compact()
                .init();
        }
    }

    debug!("Logging initialized with file and line number tracking");
}
