// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::flags::Flags;

/// Build regex matchers from literal fragments and escaped substitutions
#[derive(Parser)]
#[command(name = "regextag")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "REGEXTAG_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compile a pattern and print its source and flags
    Compile(CompileArgs),
    /// Compile a pattern and match it against text
    Test(TestArgs),
    /// Escape values so they match literally
    Escape(EscapeArgs),
}

/// Pattern flags shared by commands that compile.
#[derive(clap::Args, Debug, Clone, Copy, Default)]
pub struct FlagArgs {
    /// Visit every match (g)
    #[arg(short = 'g', long)]
    pub global: bool,

    /// Case-insensitive matching (i)
    #[arg(short = 'i', long)]
    pub ignore_case: bool,

    /// ^ and $ match at line boundaries (m)
    #[arg(short = 'm', long)]
    pub multiline: bool,

    /// Matches must start at the search position (y)
    #[arg(short = 'y', long)]
    pub sticky: bool,

    /// Unicode mode (u)
    #[arg(short = 'u', long)]
    pub unicode: bool,

    /// Let `.` match newlines too
    #[arg(short = 's', long)]
    pub dot_all: bool,

    /// Ignore whitespace and #-comments in fragments
    #[arg(short = 'x', long)]
    pub verbose: bool,
}

impl FlagArgs {
    pub fn to_flags(&self) -> Flags {
        Flags {
            global: self.global,
            ignore_case: self.ignore_case,
            multiline: self.multiline,
            sticky: self.sticky,
            unicode: self.unicode,
            dot_all: self.dot_all,
            verbose: self.verbose,
        }
    }
}

#[derive(clap::Args)]
pub struct CompileArgs {
    #[command(flatten)]
    pub flags: FlagArgs,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Pattern parts, alternating fragment and substitution
    /// (use `--` before parts starting with `-`)
    #[arg(value_name = "PART")]
    pub parts: Vec<String>,
}

#[derive(clap::Args)]
pub struct TestArgs {
    #[command(flatten)]
    pub flags: FlagArgs,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Text to match against (repeatable; reads stdin when absent)
    #[arg(short = 't', long = "text", value_name = "TEXT")]
    pub texts: Vec<String>,

    /// Print the text with matches replaced instead of listing matches
    #[arg(short = 'r', long, value_name = "REPLACEMENT")]
    pub replace: Option<String>,

    /// Pattern parts, alternating fragment and substitution
    /// (use `--` before parts starting with `-`)
    #[arg(value_name = "PART")]
    pub parts: Vec<String>,
}

#[derive(clap::Args)]
pub struct EscapeArgs {
    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Values to escape
    #[arg(value_name = "VALUE", required = true)]
    pub values: Vec<String>,
}

#[derive(Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
