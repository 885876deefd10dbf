// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Translation from ECMAScript-style pattern syntax to `regex` crate syntax.
//!
//! Compiled sources use the ECMAScript dialect (`[^]` for any character,
//! a `.` that stops at line terminators, ASCII `\d`/`\w`, identity escapes
//! such as `\a` for a plain `a`). Only the constructs the two dialects read
//! differently are rewritten; everything else is copied verbatim.

/// `[^]`: any character including newlines.
const ANY: &str = "(?s:.)";
/// `[]`: a class that never matches.
const NOTHING: &str = r"[^\x00-\x{10FFFF}]";
/// `.`: any character except line terminators.
const DOT: &str = r"[^\n\r\x{2028}\x{2029}]";
/// Members of ECMAScript `\s`: white space and line terminators.
const SPACE: &str = r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

/// Rewrite an ECMAScript-style pattern for the `regex` crate.
///
/// Outside `unicode` mode the lenient legacy grammar applies: braces that
/// do not form a `{n}`, `{n,}` or `{n,m}` quantifier are literal, and so
/// are `\x`, `\u`, `\p` escapes without a valid body.
pub fn translate(source: &str, unicode: bool) -> String {
    let mut out = String::with_capacity(source.len() + 16);
    let mut in_class = false;
    let mut chars = source.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some((_, 'c'))
                    if chars
                        .peek()
                        .is_some_and(|&(_, n)| is_control_letter(n, in_class)) =>
                {
                    if let Some((_, letter)) = chars.next() {
                        push_control(&mut out, letter);
                    }
                }
                Some((j, escaped)) => {
                    let rest = &source[j + escaped.len_utf8()..];
                    push_escape(&mut out, escaped, rest, in_class, unicode);
                }
                None => out.push(c),
            },
            '[' if in_class => out.push_str(r"\["),
            ']' if in_class => {
                in_class = false;
                out.push(c);
            }
            '&' | '~' | '-' if in_class && chars.peek().is_some_and(|&(_, n)| n == c) => {
                chars.next();
                out.push(c);
                out.push('\\');
                out.push(c);
            }
            '[' if source[i..].starts_with("[^]") => {
                chars.next();
                chars.next();
                out.push_str(ANY);
            }
            '[' if source[i..].starts_with("[]") => {
                chars.next();
                out.push_str(NOTHING);
            }
            '[' => {
                in_class = true;
                out.push(c);
                if chars.next_if(|&(_, n)| n == '^').is_some() {
                    out.push('^');
                }
            }
            '{' if !in_class && !unicode => match quantifier_len(&source[i..]) {
                Some(len) => {
                    out.push_str(&source[i..i + len]);
                    while chars.next_if(|&(j, _)| j < i + len).is_some() {}
                }
                None => out.push_str(r"\{"),
            },
            '}' if !in_class && !unicode => out.push_str(r"\}"),
            '.' if !in_class => out.push_str(DOT),
            _ => out.push(c),
        }
    }

    out
}

/// Emit the translation of `\` followed by `escaped`; `rest` is the
/// source after `escaped`.
fn push_escape(out: &mut String, escaped: char, rest: &str, in_class: bool, unicode: bool) {
    match escaped {
        'd' => out.push_str("[0-9]"),
        'D' => out.push_str("[^0-9]"),
        'w' => out.push_str("[0-9A-Za-z_]"),
        'W' => out.push_str("[^0-9A-Za-z_]"),
        's' => {
            out.push('[');
            out.push_str(SPACE);
            out.push(']');
        }
        'S' => {
            out.push_str("[^");
            out.push_str(SPACE);
            out.push(']');
        }
        'b' if in_class => out.push_str(r"\x08"),
        'B' if in_class => out.push('B'),
        '0' if !rest.starts_with(|n: char| n.is_ascii_digit()) => out.push_str(r"\x00"),
        'x' if !starts_with_hex(rest, 2) => out.push('x'),
        'u' if !(starts_with_hex(rest, 4) || (unicode && rest.starts_with('{'))) => out.push('u'),
        'p' | 'P' if !unicode => out.push(escaped),
        // `\c` without a control letter is a literal backslash and `c`.
        'c' => out.push_str(r"\\c"),
        'b' | 'B' | 't' | 'n' | 'v' | 'f' | 'r' | 'x' | 'u' | 'p' | 'P' | '0'..='9' => {
            out.push('\\');
            out.push(escaped);
        }
        // Identity escapes. `\<` and `\>` are word boundaries to the engine.
        c if c.is_ascii_alphabetic() || c == '<' || c == '>' || !c.is_ascii() => out.push(c),
        _ => {
            out.push('\\');
            out.push(escaped);
        }
    }
}

/// Letters that may follow `\c`. Classes also accept digits and `_`.
fn is_control_letter(c: char, in_class: bool) -> bool {
    c.is_ascii_alphabetic() || (in_class && (c.is_ascii_digit() || c == '_'))
}

/// Emit `\cX` as the control character it names.
fn push_control(out: &mut String, letter: char) {
    let code = (letter as u32) & 0x1f;
    out.push_str(&format!(r"\x{{{code:02X}}}"));
}

fn starts_with_hex(s: &str, count: usize) -> bool {
    s.chars().take(count).filter(char::is_ascii_hexdigit).count() == count
}

/// Byte length of the `{n}`, `{n,}` or `{n,m}` quantifier starting `s`.
fn quantifier_len(s: &str) -> Option<usize> {
    let body = s.strip_prefix('{')?;
    let min = body.bytes().take_while(u8::is_ascii_digit).count();
    if min == 0 {
        return None;
    }
    let mut len = 1 + min;
    let mut rest = &body[min..];
    if let Some(after) = rest.strip_prefix(',') {
        let max = after.bytes().take_while(u8::is_ascii_digit).count();
        len += 1 + max;
        rest = &after[max..];
    }
    rest.starts_with('}').then_some(len + 1)
}

#[cfg(test)]
#[path = "dialect_tests.rs"]
mod tests;
