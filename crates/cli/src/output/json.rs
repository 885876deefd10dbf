// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output formatter.
//!
//! JSON is buffered and written at the end (not streamed).

use std::io::Write;

use serde::Serialize;

use super::MatchReport;
use crate::pattern::{LineMatch, Matcher};

/// Compiled pattern for JSON output.
#[derive(Debug, Serialize)]
pub struct PatternOutput {
    pub source: String,
    pub flags: String,
}

/// Single match for JSON output.
#[derive(Debug, Serialize)]
pub struct MatchOutput {
    pub line: u32,
    pub offset: usize,
    pub text: String,
}

/// Results for one input.
#[derive(Debug, Serialize)]
pub struct ReportOutput {
    pub input: String,
    pub matched: bool,
    pub matches: Vec<MatchOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replaced: Option<String>,
}

/// Output of the `test` command.
#[derive(Debug, Serialize)]
pub struct TestOutput {
    #[serde(flatten)]
    pub pattern: PatternOutput,
    pub matched: bool,
    pub results: Vec<ReportOutput>,
}

/// One escaped value.
#[derive(Debug, Serialize)]
pub struct EscapeOutput {
    pub value: String,
    pub escaped: String,
}

impl From<&Matcher> for PatternOutput {
    fn from(matcher: &Matcher) -> Self {
        Self {
            source: matcher.source().to_string(),
            flags: matcher.flags(),
        }
    }
}

impl From<&LineMatch> for MatchOutput {
    fn from(m: &LineMatch) -> Self {
        Self {
            line: m.line,
            offset: m.offset,
            text: m.text.clone(),
        }
    }
}

impl From<&MatchReport> for ReportOutput {
    fn from(report: &MatchReport) -> Self {
        Self {
            input: report.input.clone(),
            matched: report.matched(),
            matches: report.matches.iter().map(Into::into).collect(),
            replaced: report.replaced.clone(),
        }
    }
}

impl TestOutput {
    pub fn new(matcher: &Matcher, reports: &[MatchReport]) -> Self {
        Self {
            pattern: matcher.into(),
            matched: reports.iter().any(MatchReport::matched),
            results: reports.iter().map(Into::into).collect(),
        }
    }
}

/// JSON output formatter.
pub struct JsonFormatter<W: Write> {
    writer: W,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write a compiled pattern.
    pub fn write_pattern(&mut self, matcher: &Matcher) -> std::io::Result<()> {
        self.write_value(&PatternOutput::from(matcher))
    }

    /// Write the results of the `test` command.
    pub fn write_test(&mut self, matcher: &Matcher, reports: &[MatchReport]) -> std::io::Result<()> {
        self.write_value(&TestOutput::new(matcher, reports))
    }

    /// Write escaped values as an array.
    pub fn write_escaped(&mut self, escaped: &[EscapeOutput]) -> std::io::Result<()> {
        self.write_value(&escaped)
    }

    fn write_value<T: Serialize + ?Sized>(&mut self, value: &T) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(value).map_err(std::io::Error::other)?;
        writeln!(self.writer, "{}", json)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
