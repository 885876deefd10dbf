// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Verbose-mode stripping of whitespace and `#` comments.

/// Starts a comment running to the end of the line.
const COMMENT: char = '#';

/// Strip whitespace runs and `#` comments from a literal fragment.
///
/// A backslash and the character after it are kept verbatim, so `\ ` and
/// `\#` survive. Comments end at `\n`, which is then removed as whitespace.
pub fn strip_verbose(fragment: &str) -> String {
    let mut out = String::with_capacity(fragment.len());
    let mut chars = fragment.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                out.push(c);
                out.extend(chars.next());
            }
            COMMENT => {
                // `\n` is whitespace, dropping it here is equivalent.
                for next in chars.by_ref() {
                    if next == '\n' {
                        break;
                    }
                }
            }
            c if is_whitespace(c) => {}
            c => out.push(c),
        }
    }

    out
}

/// Whitespace as understood by ECMAScript `\s`: Unicode `White_Space`
/// plus the byte order mark, without NEL.
fn is_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

#[cfg(test)]
#[path = "verbose_tests.rs"]
mod tests;
