// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compiled matchers backed by the regex crate.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use regex::{Captures, Regex, RegexBuilder};

use super::dialect;
use crate::error::{Error, Result};

/// Flags visible on a compiled matcher.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchFlags {
    pub global: bool,
    pub ignore_case: bool,
    pub multiline: bool,
    pub sticky: bool,
    pub unicode: bool,
}

/// A compiled pattern together with the flags it was built with.
#[derive(Debug, Clone)]
pub struct Matcher {
    source: String,
    flags: MatchFlags,
    regex: Regex,
}

/// A match found in content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatch {
    /// Byte offset where match starts.
    pub start: usize,
    /// Byte offset where match ends.
    pub end: usize,
}

/// A match with resolved line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMatch {
    /// 1-based line number.
    pub line: u32,
    /// The matched text.
    pub text: String,
    /// Byte offset in content.
    pub offset: usize,
}

impl FromStr for MatchFlags {
    type Err = Error;

    /// Parse a flag string such as `"gi"`. Letters may appear in any order,
    /// but each at most once.
    fn from_str(s: &str) -> Result<Self> {
        let mut flags = MatchFlags::default();
        for c in s.chars() {
            let slot = match c {
                'g' => &mut flags.global,
                'i' => &mut flags.ignore_case,
                'm' => &mut flags.multiline,
                'y' => &mut flags.sticky,
                'u' => &mut flags.unicode,
                _ => return Err(Error::InvalidFlags(s.to_string())),
            };
            if *slot {
                return Err(Error::InvalidFlags(s.to_string()));
            }
            *slot = true;
        }
        Ok(flags)
    }
}

impl fmt::Display for MatchFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letters = [
            (self.global, 'g'),
            (self.ignore_case, 'i'),
            (self.multiline, 'm'),
            (self.sticky, 'y'),
            (self.unicode, 'u'),
        ];
        for (enabled, letter) in letters {
            if enabled {
                write!(f, "{letter}")?;
            }
        }
        Ok(())
    }
}

impl Matcher {
    /// Build a matcher from a pattern source and a flag string.
    ///
    /// Engine errors are returned unchanged as [`Error::Regex`].
    pub fn new(source: &str, flags: &str) -> Result<Self> {
        let flags: MatchFlags = flags.parse()?;
        let translated = dialect::translate(source, flags.unicode);
        tracing::trace!("engine pattern for /{}/{}: {}", source, flags, translated);

        let regex = RegexBuilder::new(&translated)
            .case_insensitive(flags.ignore_case)
            .multi_line(flags.multiline)
            .build()?;

        Ok(Self {
            source: source.to_string(),
            flags,
            regex,
        })
    }

    /// The pattern source, as compiled.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The flag string, in `gimyu` order.
    pub fn flags(&self) -> String {
        self.flags.to_string()
    }

    pub fn match_flags(&self) -> MatchFlags {
        self.flags
    }

    pub fn global(&self) -> bool {
        self.flags.global
    }

    pub fn ignore_case(&self) -> bool {
        self.flags.ignore_case
    }

    pub fn multiline(&self) -> bool {
        self.flags.multiline
    }

    pub fn sticky(&self) -> bool {
        self.flags.sticky
    }

    pub fn unicode(&self) -> bool {
        self.flags.unicode
    }

    /// The underlying engine regex.
    pub fn as_regex(&self) -> &Regex {
        &self.regex
    }

    /// Check if the pattern matches anywhere (at the start when sticky).
    pub fn is_match(&self, content: &str) -> bool {
        self.find(content).is_some()
    }

    /// Find the first match.
    pub fn find(&self, content: &str) -> Option<PatternMatch> {
        self.find_at(content, 0)
    }

    /// Find the first match at or after `start`.
    ///
    /// When sticky, only a match beginning exactly at `start` counts.
    pub fn find_at(&self, content: &str, start: usize) -> Option<PatternMatch> {
        if start > content.len() {
            return None;
        }
        let m = self.regex.find_at(content, start)?;
        if self.flags.sticky && m.start() != start {
            return None;
        }
        Some(PatternMatch {
            start: m.start(),
            end: m.end(),
        })
    }

    /// Find matches in content: all of them when global, else at most one.
    pub fn find_all(&self, content: &str) -> Vec<PatternMatch> {
        if !self.flags.global {
            return self.find(content).into_iter().collect();
        }

        let mut matches = Vec::new();
        let mut pos = 0;
        while let Some(m) = self.find_at(content, pos) {
            pos = next_search_start(content, &m);
            matches.push(m);
            if pos > content.len() {
                break;
            }
        }
        matches
    }

    /// Find matches with line numbers.
    pub fn find_all_with_lines(&self, content: &str) -> Vec<LineMatch> {
        self.find_all(content)
            .into_iter()
            .map(|m| LineMatch {
                line: byte_offset_to_line(content, m.start),
                text: content[m.start..m.end].to_string(),
                offset: m.start,
            })
            .collect()
    }

    /// Replace matches (all when global, else the first).
    ///
    /// `replacement` may refer to groups with `$1` or `${name}`.
    pub fn replace<'h>(&self, content: &'h str, replacement: &str) -> Cow<'h, str> {
        let mut out = String::new();
        let mut replaced = false;
        let mut last = 0;
        let mut pos = 0;

        while let Some(caps) = self.captures_at(content, pos) {
            let Some(whole) = caps.get(0) else { break };
            out.push_str(&content[last..whole.start()]);
            caps.expand(replacement, &mut out);
            last = whole.end();
            replaced = true;

            if !self.flags.global {
                break;
            }
            pos = next_search_start(
                content,
                &PatternMatch {
                    start: whole.start(),
                    end: whole.end(),
                },
            );
            if pos > content.len() {
                break;
            }
        }

        if !replaced {
            return Cow::Borrowed(content);
        }
        out.push_str(&content[last..]);
        Cow::Owned(out)
    }

    fn captures_at<'h>(&self, content: &'h str, start: usize) -> Option<Captures<'h>> {
        if start > content.len() {
            return None;
        }
        let caps = self.regex.captures_at(content, start)?;
        let whole = caps.get(0)?;
        if self.flags.sticky && whole.start() != start {
            return None;
        }
        Some(caps)
    }
}

impl fmt::Display for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.source, self.flags)
    }
}

/// Where to resume after `m`: its end, or one character further when empty.
fn next_search_start(content: &str, m: &PatternMatch) -> usize {
    if m.end > m.start {
        return m.end;
    }
    content[m.end..]
        .chars()
        .next()
        .map_or(m.end + 1, |c| m.end + c.len_utf8())
}

/// Convert byte offset to 1-based line number, saturating at `u32::MAX`.
pub fn byte_offset_to_line(content: &str, offset: usize) -> u32 {
    line_after_breaks(content[..offset].bytes().filter(|&b| b == b'\n').count())
}

/// 1-based line number following `breaks` line breaks.
fn line_after_breaks(breaks: usize) -> u32 {
    u32::try_from(breaks)
        .ok()
        .and_then(|n| n.checked_add(1))
        .unwrap_or(u32::MAX)
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
