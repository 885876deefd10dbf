// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Flag configuration for pattern compilation.
//!
//! Flags are looked up by the names callers already know from
//! ECMAScript (`ignoreCase`, `dotAll`, ...). snake_case spellings are
//! accepted too so TOML config reads naturally. Unknown names are ignored.

use serde::Deserialize;

use crate::pattern::MatchFlags;

/// Independent boolean options read by the compiler.
///
/// `dot_all` and `verbose` only shape the compiled source; the other five
/// end up on the matcher.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Flags {
    /// `g`: `find_all` and `replace` visit every match.
    pub global: bool,
    /// `i`: case-insensitive matching.
    #[serde(alias = "ignore_case")]
    pub ignore_case: bool,
    /// `m`: `^` and `$` match at line boundaries.
    pub multiline: bool,
    /// `y`: matches must start exactly at the search position.
    pub sticky: bool,
    /// `u`: unicode mode.
    pub unicode: bool,
    /// Rewrite `.` so it also matches newlines.
    #[serde(alias = "dot_all")]
    pub dot_all: bool,
    /// Strip whitespace and `#` comments from literal fragments.
    pub verbose: bool,
}

impl Flags {
    /// Build flags from `(name, value)` pairs, ignoring unknown names.
    pub fn from_pairs<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, bool)>,
        K: AsRef<str>,
    {
        let mut flags = Self::default();
        for (name, value) in pairs {
            if !flags.set(name.as_ref(), value) {
                tracing::trace!("ignoring unknown flag {}", name.as_ref());
            }
        }
        flags
    }

    /// Set a flag by name. Returns false if the name is not recognized.
    pub fn set(&mut self, name: &str, value: bool) -> bool {
        let slot = match name {
            "global" => &mut self.global,
            "ignoreCase" | "ignore_case" => &mut self.ignore_case,
            "multiline" => &mut self.multiline,
            "sticky" => &mut self.sticky,
            "unicode" => &mut self.unicode,
            "dotAll" | "dot_all" => &mut self.dot_all,
            "verbose" => &mut self.verbose,
            _ => return false,
        };
        *slot = value;
        true
    }

    /// Flags enabled in either `self` or `other`.
    pub fn union(self, other: Flags) -> Flags {
        Flags {
            global: self.global || other.global,
            ignore_case: self.ignore_case || other.ignore_case,
            multiline: self.multiline || other.multiline,
            sticky: self.sticky || other.sticky,
            unicode: self.unicode || other.unicode,
            dot_all: self.dot_all || other.dot_all,
            verbose: self.verbose || other.verbose,
        }
    }

    /// The subset of flags visible on the matcher.
    pub fn match_flags(&self) -> MatchFlags {
        MatchFlags {
            global: self.global,
            ignore_case: self.ignore_case,
            multiline: self.multiline,
            sticky: self.sticky,
            unicode: self.unicode,
        }
    }

    /// Engine flag string, always in `gimyu` order.
    pub fn flag_string(&self) -> String {
        self.match_flags().to_string()
    }
}

#[cfg(test)]
#[path = "flags_tests.rs"]
mod tests;
