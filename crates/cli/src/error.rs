// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

/// Regextag error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Pattern rejected by the regex engine
    #[error(transparent)]
    Regex(#[from] regex::Error),

    /// Flag string contains unknown or repeated letters
    #[error("invalid flags supplied to matcher: '{0}'")]
    InvalidFlags(String),

    /// Configuration file not found or invalid
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Invalid command-line arguments
    #[error("argument error: {0}")]
    Argument(String),

    /// File I/O error
    #[error("io error: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type using regextag Error
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Command succeeded
    Success = 0,
    /// `test` found no match
    NoMatch = 1,
    /// Configuration or argument error
    ConfigError = 2,
    /// Pattern or flags rejected
    PatternError = 3,
    /// Internal error
    InternalError = 4,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Config { .. } | Error::Argument(_) => ExitCode::ConfigError,
            Error::Regex(_) | Error::InvalidFlags(_) => ExitCode::PatternError,
            Error::Io { .. } => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
