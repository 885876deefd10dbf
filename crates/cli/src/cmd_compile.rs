// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compile command implementation.

use regextag::cli::{Cli, CompileArgs, FlagArgs, OutputFormat};
use regextag::color::resolve_color;
use regextag::config;
use regextag::error::ExitCode;
use regextag::output::json::JsonFormatter;
use regextag::output::text::TextFormatter;
use regextag::pattern::{Matcher, Template};

/// Run the compile command.
pub fn run(cli: &Cli, args: &CompileArgs) -> anyhow::Result<ExitCode> {
    let matcher = build_matcher(cli, &args.flags, &args.parts)?;

    match args.output {
        OutputFormat::Text => {
            let mut formatter = TextFormatter::stdout(resolve_color());
            formatter.write_pattern(&matcher)?;
        }
        OutputFormat::Json => {
            let mut formatter = JsonFormatter::new(std::io::stdout());
            formatter.write_pattern(&matcher)?;
        }
    }

    Ok(ExitCode::Success)
}

/// Merge config-file flags with command-line flags and compile `parts`.
pub fn build_matcher(cli: &Cli, flag_args: &FlagArgs, parts: &[String]) -> anyhow::Result<Matcher> {
    let cwd = std::env::current_dir()?;
    let flags = config::default_flags(cli.config.as_deref(), &cwd)?.union(flag_args.to_flags());
    let template = Template::from_parts(parts);
    let pattern = template.compile_source(&flags);
    Ok(pattern.build()?)
}
