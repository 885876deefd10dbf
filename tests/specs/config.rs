//! Behavioral specs for regextag.toml.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// > Flags in a discovered config apply to every compilation
#[test]
fn discovered_config_sets_default_flags() {
    let temp = Project::empty();
    temp.config("[flags]\nignoreCase = true\nglobal = true\n");

    assert_stdout(
        regextag_cmd().args(["compile", "a"]).current_dir(temp.path()),
        "/a/gi/\n",
    );
}

/// > Config is discovered from a subdirectory
#[test]
fn config_discovered_from_subdirectory() {
    let temp = Project::empty();
    temp.config("[flags]\nmultiline = true\n");
    temp.file("nested/deeper/.keep", "");

    assert_stdout(
        regextag_cmd()
            .args(["compile", "a"])
            .current_dir(temp.path().join("nested/deeper")),
        "/a/m/\n",
    );
}

/// > Command-line flags add to config flags
#[test]
fn cli_flags_add_to_config() {
    let temp = Project::empty();
    temp.config("[flags]\nsticky = true\n");

    assert_stdout(
        regextag_cmd()
            .args(["compile", "-g", "a"])
            .current_dir(temp.path()),
        "/a/gy/\n",
    );
}

/// > Config flags include compile-time directives
#[test]
fn config_dot_all_expands_dots() {
    let temp = Project::empty();
    temp.config("[flags]\ndotAll = true\n");

    assert_stdout(
        regextag_cmd().args(["compile", "a.b"]).current_dir(temp.path()),
        "/a[^]b/\n",
    );
}

/// > --config selects an explicit file
#[test]
fn explicit_config_path() {
    let temp = Project::empty();
    temp.file("custom.toml", "version = 1\n[flags]\nunicode = true\n");

    assert_stdout(
        regextag_cmd()
            .args(["compile", "-C", "custom.toml", "a"])
            .current_dir(temp.path()),
        "/a/u/\n",
    );
}

/// > REGEXTAG_CONFIG selects an explicit file
#[test]
fn env_config_path() {
    let temp = Project::empty();
    temp.file("env.toml", "version = 1\n[flags]\nglobal = true\n");

    assert_stdout(
        regextag_cmd()
            .args(["compile", "a"])
            .current_dir(temp.path())
            .env("REGEXTAG_CONFIG", temp.path().join("env.toml")),
        "/a/g/\n",
    );
}

/// > A missing explicit config is a config error
#[test]
fn missing_explicit_config_exits_with_two() {
    let temp = Project::empty();

    regextag_cmd()
        .args(["compile", "-C", "nope.toml", "a"])
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("config file not found"));
}

/// > An unsupported version is a config error
#[test]
fn unsupported_version_exits_with_two() {
    let temp = Project::empty();
    temp.config("version = 2\n");

    regextag_cmd()
        .args(["compile", "a"])
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unsupported config version 2"));
}

/// > Unknown top-level keys warn but do not fail
#[test]
fn unknown_key_warns() {
    let temp = Project::empty();
    temp.config("[extras]\nthing = 1\n");

    regextag_cmd()
        .args(["compile", "a"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("/a/\n")
        .stderr(predicates::str::contains("unrecognized field `extras`"));
}

/// > Unknown flag names are ignored silently
#[test]
fn unknown_flag_names_ignored() {
    let temp = Project::empty();
    temp.config("[flags]\nglobal = true\nhasIndices = true\n");

    regextag_cmd()
        .args(["compile", "a"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("/a/g/\n")
        .stderr(predicates::str::is_empty());
}
