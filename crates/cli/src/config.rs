// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration lookup, parsing and validation.
//!
//! The only thing a regextag.toml contributes is a set of default flags.
//! Version mismatches are errors, unknown top-level keys are warnings, and
//! unknown names inside `[flags]` are ignored silently.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::flags::Flags;

/// Config file name looked up from the working directory upward.
pub const CONFIG_FILE: &str = "regextag.toml";

/// Supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Top-level keys this version understands.
const KNOWN_KEYS: &[&str] = &["version", "flags"];

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Config with flexible parsing that captures unknown keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    version: i64,

    #[serde(default)]
    flags: Flags,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

/// Full configuration.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Default flags for every compilation.
    pub flags: Flags,
}

/// Default flags for a run.
///
/// An `explicit` path (relative to `cwd`) must exist. Otherwise the nearest
/// regextag.toml between `cwd` and its repository root is used, and no file
/// at all means no default flags.
pub fn default_flags(explicit: Option<&Path>, cwd: &Path) -> Result<Flags> {
    let path = match explicit {
        Some(path) => {
            let path = cwd.join(path);
            if !path.is_file() {
                return Err(Error::Config {
                    message: format!("config file not found: {}", path.display()),
                    path: Some(path),
                });
            }
            path
        }
        None => match nearest_config(cwd) {
            Some(path) => path,
            None => {
                tracing::debug!("no {} above {}", CONFIG_FILE, cwd.display());
                return Ok(Flags::default());
            }
        },
    };

    tracing::debug!("loading config from {}", path.display());
    Ok(load(&path)?.flags)
}

/// The first regextag.toml in `dir` or its ancestors, up to the directory
/// holding `.git`.
fn nearest_config(dir: &Path) -> Option<PathBuf> {
    for ancestor in dir.ancestors() {
        let candidate = ancestor.join(CONFIG_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }
        if ancestor.join(".git").exists() {
            break;
        }
    }
    None
}

/// Load config from a file, warning on unknown keys.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse(&content, path)
}

/// Parse config from string content.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let version_check: VersionOnly = toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })?;

    let version = version_check.version.ok_or_else(|| Error::Config {
        message: "missing required field: version".to_string(),
        path: Some(path.to_path_buf()),
    })?;

    if version != SUPPORTED_VERSION {
        return Err(Error::Config {
            message: format!(
                "unsupported config version {} (supported: {})\n  Upgrade regextag to use this config.",
                version, SUPPORTED_VERSION
            ),
            path: Some(path.to_path_buf()),
        });
    }

    let flexible: FlexibleConfig = toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })?;

    for key in flexible.unknown.keys() {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            warn_unknown_key(path, key);
        }
    }

    tracing::debug!("config flags: {}", flexible.flags.flag_string());
    Ok(Config {
        version: flexible.version,
        flags: flexible.flags,
    })
}

fn warn_unknown_key(path: &Path, key: &str) {
    tracing::warn!("{}: unrecognized field `{}`", path.display(), key);
    eprintln!(
        "regextag: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
