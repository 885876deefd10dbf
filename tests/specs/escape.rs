//! Behavioral specs for `regextag escape`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// > Each value is printed escaped on its own line
#[test]
fn escapes_each_value() {
    assert_stdout(
        regextag_cmd().args(["escape", "1+1=2", "a b", "user@example.com"]),
        "1\\+1=2\na b\nuser@example\\.com\n",
    );
}

/// > Values without metacharacters pass through
#[test]
fn plain_value_unchanged() {
    assert_stdout(regextag_cmd().args(["escape", "plain"]), "plain\n");
}

/// > JSON output pairs values with their escaped form
#[test]
fn json_output() {
    let json = crate::prelude::json_output(regextag_cmd().args(["escape", "-o", "json", "--", "-x?"]));
    assert_eq!(json[0]["value"], "-x?");
    assert_eq!(json[0]["escaped"], r"\-x\?");
}

/// > At least one value is required
#[test]
fn requires_value() {
    regextag_cmd().arg("escape").assert().code(2);
}
