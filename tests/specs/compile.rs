//! Behavioral specs for `regextag compile`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// > A single fragment compiles to itself with no flags
#[test]
fn single_fragment_without_flags() {
    assert_stdout(regextag_cmd().args(["compile", "Oh, hi!"]), "/Oh, hi!/\n");
}

/// > Substitutions are spliced between fragments
#[test]
fn substitution_between_fragments() {
    assert_stdout(
        regextag_cmd().args(["compile", "foo", "test", "bar"]),
        "/footestbar/\n",
    );
}

/// > Substitution metacharacters are escaped
#[test]
fn substitution_is_escaped() {
    assert_stdout(
        regextag_cmd().args(["compile", "", r".^$*+?()[-]{\|", ""]),
        "/\\.\\^\\$\\*\\+\\?\\(\\)\\[\\-\\]\\{\\\\\\|/\n",
    );
}

/// > Flag letters render in canonical order regardless of argument order
#[test]
fn flags_render_in_canonical_order() {
    assert_stdout(
        regextag_cmd().args(["compile", "-u", "-y", "-m", "-i", "-g", "a"]),
        "/a/gimyu/\n",
    );
}

/// > dotAll and verbose leave no trace in the flag string
#[test]
fn dot_all_and_verbose_rewrite_source() {
    assert_stdout(
        regextag_cmd().args(["compile", "-s", "-x", " a . b  # tail"]),
        "/a[^]b/\n",
    );
}

/// > Parts starting with a hyphen follow `--`
#[test]
fn hyphen_parts_after_double_dash() {
    assert_stdout(
        regextag_cmd().args(["compile", "-g", "--", "-", "-x"]),
        "/-\\-x/g\n",
    );
}

/// > JSON output has source and flags
#[test]
fn json_output() {
    let json = crate::prelude::json_output(regextag_cmd().args(["compile", "-o", "json", "-im", "a", "b.c", ""]));
    assert_eq!(json["source"], r"ab\.c");
    assert_eq!(json["flags"], "im");
}

/// > Patterns the engine rejects exit with code 3
#[test]
fn engine_rejection_exits_with_pattern_error() {
    regextag_cmd()
        .args(["compile", "a("])
        .assert()
        .code(3)
        .stderr(predicates::str::starts_with("regextag: "));
}

/// > An escaped substitution cannot break the pattern
#[test]
fn escaped_substitution_never_rejected() {
    regextag_cmd()
        .args(["compile", "(", "a)(b", ")"])
        .assert()
        .success()
        .stdout("/(a\\)\\(b)/\n");
}

/// > NO_COLOR disables color output
#[test]
fn no_color_disables_color() {
    regextag_cmd()
        .args(["compile", "-g", "a"])
        .env("COLOR", "1")
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout(predicates::str::contains("\x1b[").not());
}

/// > COLOR forces color output
#[test]
fn color_forces_color() {
    regextag_cmd()
        .args(["compile", "-g", "a"])
        .env_remove("NO_COLOR")
        .env("COLOR", "1")
        .assert()
        .success()
        .stdout(predicates::str::contains("\x1b["));
}
