// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Dot-all emulation by rewriting `.` into `[^]`.
//!
//! The empty negated class matches any single character, newlines included,
//! in every ECMAScript-style dialect, so no engine flag is needed.

/// Replacement emitted for every bare `.`.
pub const ANY_CHAR: &str = "[^]";

/// Rewrite every unescaped `.` outside a character class into `[^]`.
///
/// Escape pairs are skipped as a unit, and the first unescaped `]` after a
/// `[` closes the class. An unterminated class leaves the rest of the
/// pattern untouched.
pub fn expand_dot_all(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut in_class = false;
    let mut pending = 0;
    let mut chars = pattern.char_indices();

    while let Some((i, c)) = chars.next() {
        if c == '\\' {
            chars.next();
        } else if in_class {
            if c == ']' {
                in_class = false;
            }
        } else if c == '.' {
            out.push_str(&pattern[pending..i]);
            out.push_str(ANY_CHAR);
            pending = i + 1;
        } else if c == '[' {
            in_class = true;
        }
    }

    out.push_str(&pattern[pending..]);
    out
}

#[cfg(test)]
#[path = "dot_all_tests.rs"]
mod tests;
