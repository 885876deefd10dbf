// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pattern compilation.
//!
//! Literal fragments are joined with escaped substitutions, optionally
//! stripped (verbose) and dot-expanded (dotAll), then handed to the regex
//! crate through a small dialect bridge:
//! - [`escape`]: substitutions to literal text
//! - [`verbose`]: whitespace and `#` comment stripping
//! - [`dot_all`]: `.` to `[^]` rewriting
//! - [`compiler`]: assembly, flag string, [`Template`] and [`RegexTag`]
//! - [`matcher`]: engine-backed [`Matcher`]

pub mod compiler;
pub mod dialect;
pub mod dot_all;
pub mod escape;
pub mod matcher;
pub mod verbose;

pub use compiler::{Pattern, RegexTag, Template, compile, compile_source};
pub use dot_all::expand_dot_all;
pub use escape::{escape, escape_value};
pub use matcher::{LineMatch, MatchFlags, Matcher, PatternMatch, byte_offset_to_line};
pub use verbose::strip_verbose;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
