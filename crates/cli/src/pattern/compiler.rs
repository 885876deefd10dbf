// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pattern assembly from literal fragments and substitutions.
//!
//! A pattern is described the way a tagged template would split it:
//! `fragments[0] subs[0] fragments[1] ... subs[n-1] fragments[n]`.
//! Fragments are pattern syntax, substitutions are always literal text.

use std::fmt::Display;

use super::dot_all::expand_dot_all;
use super::escape::escape;
use super::matcher::Matcher;
use super::verbose::strip_verbose;
use crate::error::Result;
use crate::flags::Flags;

/// Compiled pattern source and flag string, before the engine sees them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    flags: String,
}

impl Pattern {
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn flags(&self) -> &str {
        &self.flags
    }

    /// Hand the pattern to the regex engine.
    pub fn build(&self) -> Result<Matcher> {
        Matcher::new(&self.source, &self.flags)
    }
}

/// Assemble the pattern source and flag string.
///
/// Fragment and substitution counts are not checked against each other:
/// substitutions past the last fragment are dropped and fragments past the
/// last substitution are appended as-is.
pub fn compile_source<F, S>(fragments: &[F], substitutions: &[S], flags: &Flags) -> Pattern
where
    F: AsRef<str>,
    S: Display,
{
    let mut source = String::new();
    for (idx, fragment) in fragments.iter().enumerate() {
        let fragment = fragment.as_ref();
        if flags.verbose {
            source.push_str(&strip_verbose(fragment));
        } else {
            source.push_str(fragment);
        }

        if let Some(value) = substitutions.get(idx) {
            source.push_str(&escape(&value.to_string()));
        }
    }

    if flags.dot_all {
        source = expand_dot_all(&source);
    }

    let flags = flags.flag_string();
    tracing::debug!(
        "compiled {} fragments, {} substitutions: /{}/{}",
        fragments.len(),
        substitutions.len(),
        source,
        flags
    );

    Pattern { source, flags }
}

/// Compile fragments and substitutions into a matcher.
pub fn compile<F, S>(fragments: &[F], substitutions: &[S], flags: &Flags) -> Result<Matcher>
where
    F: AsRef<str>,
    S: Display,
{
    compile_source(fragments, substitutions, flags).build()
}

/// Builder for a fragment/substitution sequence.
///
/// Always holds one more fragment than substitutions. Consecutive
/// [`literal`](Template::literal) calls extend the same fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    fragments: Vec<String>,
    substitutions: Vec<String>,
}

impl Default for Template {
    fn default() -> Self {
        Self::new()
    }
}

impl Template {
    pub fn new() -> Self {
        Self {
            fragments: vec![String::new()],
            substitutions: Vec::new(),
        }
    }

    /// Build a template from alternating parts: fragment, substitution,
    /// fragment, ...
    pub fn from_parts<I, P>(parts: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        parts
            .into_iter()
            .enumerate()
            .fold(Self::new(), |template, (idx, part)| {
                if idx % 2 == 0 {
                    template.literal(part.as_ref())
                } else {
                    template.substitute(part.as_ref())
                }
            })
    }

    /// Append pattern syntax to the current fragment.
    pub fn literal(mut self, text: &str) -> Self {
        if let Some(last) = self.fragments.last_mut() {
            last.push_str(text);
        }
        self
    }

    /// Append a value to be matched literally.
    pub fn substitute(mut self, value: impl Display) -> Self {
        self.substitutions.push(value.to_string());
        self.fragments.push(String::new());
        self
    }

    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    pub fn substitutions(&self) -> &[String] {
        &self.substitutions
    }

    pub fn compile_source(&self, flags: &Flags) -> Pattern {
        compile_source(&self.fragments, &self.substitutions, flags)
    }

    pub fn compile(&self, flags: &Flags) -> Result<Matcher> {
        self.compile_source(flags).build()
    }
}

/// A flag configuration bound once and applied to every compilation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegexTag {
    flags: Flags,
}

impl RegexTag {
    pub fn new(flags: Flags) -> Self {
        Self { flags }
    }

    pub fn flags(&self) -> &Flags {
        &self.flags
    }

    pub fn compile<F, S>(&self, fragments: &[F], substitutions: &[S]) -> Result<Matcher>
    where
        F: AsRef<str>,
        S: Display,
    {
        compile(fragments, substitutions, &self.flags)
    }

    pub fn template(&self, template: &Template) -> Result<Matcher> {
        template.compile(&self.flags)
    }
}

#[cfg(test)]
#[path = "compiler_tests.rs"]
mod tests;
