// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Literal escaping for substitution values.

use std::borrow::Cow;
use std::fmt::Display;

/// Escape character inserted before every metacharacter.
const ESCAPE: char = '\\';

/// Check if `c` must be escaped to match itself literally.
///
/// Covers the ASCII ranges `!`-`/`, `[`-`^` and `{`-`}`, plus the `?`
/// quantifier which sits between them.
pub fn is_meta(c: char) -> bool {
    matches!(c, '!'..='/' | '['..='^' | '{'..='}' | '?')
}

/// Escape a string so it matches itself literally.
///
/// Borrows the input when nothing needs escaping.
pub fn escape(value: &str) -> Cow<'_, str> {
    let extra = value.chars().filter(|&c| is_meta(c)).count();
    if extra == 0 {
        return Cow::Borrowed(value);
    }

    let mut out = String::with_capacity(value.len() + extra);
    for c in value.chars() {
        if is_meta(c) {
            out.push(ESCAPE);
        }
        out.push(c);
    }
    Cow::Owned(out)
}

/// Escape any displayable value, coercing it to text first.
pub fn escape_value<T: Display + ?Sized>(value: &T) -> String {
    escape(&value.to_string()).into_owned()
}

#[cfg(test)]
#[path = "escape_tests.rs"]
mod tests;
