//! Behavioral specs for `regextag test`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// > Matching text prints each match with its line
#[test]
fn prints_matches_with_lines() {
    assert_stdout(
        regextag_cmd().args(["test", "-g", "-t", "a1\nb22", r"\d+"]),
        "/\\d+/g\ntext 1:1: 1\ntext 1:2: 22\n",
    );
}

/// > Without the global flag only the first match is reported
#[test]
fn first_match_without_global() {
    assert_stdout(
        regextag_cmd().args(["test", "-t", "a1 b2", r"\d"]),
        "/\\d/\ntext 1:1: 1\n",
    );
}

/// > No match in any input exits with code 1
#[test]
fn no_match_exits_with_one() {
    regextag_cmd()
        .args(["test", "-t", "abc", "z"])
        .assert()
        .code(1)
        .stdout(predicates::str::contains("text 1: NO MATCH"));
}

/// > A match in any input exits successfully
#[test]
fn any_match_succeeds() {
    regextag_cmd()
        .args(["test", "-t", "abc", "-t", "xyz", "y"])
        .assert()
        .success()
        .stdout(predicates::str::contains("text 1: NO MATCH"))
        .stdout(predicates::str::contains("text 2:1: y"));
}

/// > Reads stdin when no text is given
#[test]
fn reads_stdin() {
    regextag_cmd()
        .args(["test", "-i", "hello"])
        .write_stdin("say HELLO\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("stdin:1: HELLO"));
}

/// > Substitutions match literally
#[test]
fn substitution_matches_literally() {
    regextag_cmd()
        .args(["test", "-t", "cost: $1.50 (net)", "", "$1.50 (net)", ""])
        .assert()
        .success()
        .stdout(predicates::str::contains("text 1:1: $1.50 (net)"));
}

/// > dotAll lets `.` cross line breaks
#[test]
fn dot_all_crosses_lines() {
    regextag_cmd()
        .args(["test", "-t", "a\nb", "a.b"])
        .assert()
        .code(1);

    regextag_cmd()
        .args(["test", "-s", "-t", "a\nb", "a.b"])
        .assert()
        .success();
}

/// > Sticky matching anchors at the start of input
#[test]
fn sticky_anchors_at_start() {
    regextag_cmd()
        .args(["test", "-y", "-t", "xa", "a"])
        .assert()
        .code(1);
}

/// > Replacement prints the rewritten text
#[test]
fn replacement_prints_rewritten_text() {
    assert_stdout(
        regextag_cmd().args([
            "test",
            "-g",
            "-r",
            "$2/$1",
            "-t",
            "1-2 3-4",
            r"(\d)-(\d)",
        ]),
        "/(\\d)-(\\d)/g\n2/1 4/3\n",
    );
}

/// > JSON output lists results per input
#[test]
fn json_output() {
    let mut cmd = regextag_cmd();
    cmd.args(["test", "-o", "json", "-g", "-t", "aa\na", "-t", "b", "a"]);
    let json = crate::prelude::json_output(&mut cmd);

    assert_eq!(json["source"], "a");
    assert_eq!(json["flags"], "g");
    assert_eq!(json["matched"], true);
    assert_eq!(json["results"][0]["matches"].as_array().unwrap().len(), 3);
    assert_eq!(json["results"][0]["matches"][2]["line"], 2);
    assert_eq!(json["results"][1]["input"], "text 2");
    assert_eq!(json["results"][1]["matched"], false);
}
