// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text output formatter.
//!
//! ```text
//! /<source>/<flags>
//! <input>:<line>: <matched text>
//! <input>: NO MATCH
//! ```

use termcolor::{ColorChoice, StandardStream, WriteColor};

use super::MatchReport;
use crate::color::scheme;
use crate::pattern::Matcher;

/// Text output formatter with color support.
pub struct TextFormatter<W: WriteColor> {
    out: W,
}

impl TextFormatter<StandardStream> {
    /// Create a formatter writing to stdout.
    pub fn stdout(color_choice: ColorChoice) -> Self {
        Self::new(StandardStream::stdout(color_choice))
    }
}

impl<W: WriteColor> TextFormatter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write a compiled pattern as `/source/flags`.
    pub fn write_pattern(&mut self, matcher: &Matcher) -> std::io::Result<()> {
        write!(self.out, "/")?;
        self.out.set_color(&scheme::source())?;
        write!(self.out, "{}", matcher.source())?;
        self.out.reset()?;
        write!(self.out, "/")?;
        self.out.set_color(&scheme::flags())?;
        write!(self.out, "{}", matcher.flags())?;
        self.out.reset()?;
        writeln!(self.out)
    }

    /// Write the matches (or replaced content) for one input.
    pub fn write_report(&mut self, report: &MatchReport) -> std::io::Result<()> {
        if let Some(replaced) = &report.replaced {
            return writeln!(self.out, "{}", replaced);
        }

        if !report.matched() {
            self.out.set_color(&scheme::label())?;
            write!(self.out, "{}", report.input)?;
            self.out.reset()?;
            write!(self.out, ": ")?;
            self.out.set_color(&scheme::no_match())?;
            write!(self.out, "NO MATCH")?;
            self.out.reset()?;
            return writeln!(self.out);
        }

        for m in &report.matches {
            self.out.set_color(&scheme::label())?;
            write!(self.out, "{}", report.input)?;
            self.out.reset()?;
            write!(self.out, ":")?;
            self.out.set_color(&scheme::line_number())?;
            write!(self.out, "{}", m.line)?;
            self.out.reset()?;
            write!(self.out, ": ")?;
            self.out.set_color(&scheme::matched())?;
            write!(self.out, "{}", m.text)?;
            self.out.reset()?;
            writeln!(self.out)?;
        }
        Ok(())
    }

    /// Write one escaped value per line.
    pub fn write_escaped(&mut self, escaped: &str) -> std::io::Result<()> {
        writeln!(self.out, "{}", escaped)
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
