// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for compiled patterns and match results.

pub mod json;
pub mod text;

use crate::pattern::{LineMatch, Matcher};

/// Outcome of running a matcher over one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchReport {
    /// Where the content came from (`stdin`, `text 1`, ...).
    pub input: String,
    /// Matches found, with line numbers.
    pub matches: Vec<LineMatch>,
    /// Content after replacement, when a replacement was requested.
    pub replaced: Option<String>,
}

impl MatchReport {
    /// Match `content` and optionally apply `replacement`.
    pub fn run(
        matcher: &Matcher,
        input: impl Into<String>,
        content: &str,
        replacement: Option<&str>,
    ) -> Self {
        Self {
            input: input.into(),
            matches: matcher.find_all_with_lines(content),
            replaced: replacement.map(|r| matcher.replace(content, r).into_owned()),
        }
    }

    pub fn matched(&self) -> bool {
        !self.matches.is_empty()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
