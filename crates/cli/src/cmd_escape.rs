// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Escape command implementation.

use regextag::cli::{EscapeArgs, OutputFormat};
use regextag::error::ExitCode;
use regextag::output::json::{EscapeOutput, JsonFormatter};
use regextag::output::text::TextFormatter;
use regextag::pattern::escape;

/// Run the escape command.
pub fn run(args: &EscapeArgs) -> anyhow::Result<ExitCode> {
    let escaped: Vec<EscapeOutput> = args
        .values
        .iter()
        .map(|value| EscapeOutput {
            value: value.clone(),
            escaped: escape(value).into_owned(),
        })
        .collect();

    match args.output {
        OutputFormat::Text => {
            // Escaped values are plain pattern text; never colored.
            let mut formatter = TextFormatter::stdout(termcolor::ColorChoice::Never);
            for item in &escaped {
                formatter.write_escaped(&item.escaped)?;
            }
        }
        OutputFormat::Json => {
            JsonFormatter::new(std::io::stdout()).write_escaped(&escaped)?;
        }
    }

    Ok(ExitCode::Success)
}
