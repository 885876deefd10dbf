// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Regextag CLI entry point.

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use regextag::cli::{Cli, Command};
use regextag::error::ExitCode;

mod cmd_compile;
mod cmd_escape;

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("REGEXTAG_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

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
            eprintln!("regextag: {}", e);
            match e.downcast_ref::<regextag::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match &cli.command {
        None => {
            // Show help for bare invocation
            Cli::command().print_help()?;
            println!();
            Ok(ExitCode::Success)
        }
        Some(Command::Compile(args)) => cmd_compile::run(&cli, args),
        Some(Command::Test(args)) => cmd_test::run(&cli, args),
        Some(Command::Escape(args)) => cmd_escape::run(args),
    }
}
