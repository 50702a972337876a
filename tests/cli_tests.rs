//! End-to-end tests for the foxhole binary.
//!
//! Only non-interactive paths are exercised: the PIN comes from
//! `FOXHOLE_PIN`, the store path from `FOXHOLE_STORE`, and secrets are piped
//! over stdin.

mod support;

use support::*;

#[test]
fn test_help_runs() {
    let t = Test::new();
    let output = t.cmd().arg("--help").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "credential locker");
}

#[test]
fn test_add_and_list() {
    let t = Test::new();

    assert_success(&t.add_aws("proj1", "AKIAEXAMPLE", "s3cr3t", "us-east-1"));

    let output = t.list();
    assert_success(&output);
    assert_stdout_contains(&output, "proj1 (aws)");
}

#[test]
fn test_list_empty_store() {
    let t = Test::new();
    let output = t.list();
    assert_success(&output);
    assert_stdout_contains(&output, "no credentials stored");
}

#[test]
fn test_list_json_excludes_secret() {
    let t = Test::new();
    assert_success(&t.add_git("gh-self", "me", "tok-123"));

    let output = t.list_json();
    assert_success(&output);

    let out = stdout(&output);
    assert!(out.contains("gh-self"));
    assert!(!out.contains("tok-123"), "secret leaked into list output");
    assert!(!out.contains("password"), "secret field leaked into list output");
}

#[test]
fn test_wrong_pin_fails_with_auth_error() {
    let t = Test::with_credential("gh-self");

    let output = t
        .cmd_with_pin("0000")
        .arg("list")
        .output()
        .expect("failed to run foxhole list");
    assert_failure(&output);
    assert_stderr_contains(&output, "authentication failed");
}

#[test]
fn test_empty_pin_rejected() {
    let t = Test::new();

    let output = t
        .cmd_with_pin("")
        .arg("list")
        .output()
        .expect("failed to run foxhole list");
    assert_failure(&output);
    assert_stderr_contains(&output, "PIN cannot be empty");
}

#[test]
fn test_duplicate_add_fails() {
    let t = Test::with_credential("gh-self");

    let output = t.add_git("gh-self", "me", "token");
    assert_failure(&output);
    assert_stderr_contains(&output, "already exists");
}

#[test]
fn test_rm_by_name() {
    let t = Test::with_credential("gh-self");

    let output = t.rm_name("gh-self");
    assert_success(&output);
    assert_stdout_contains(&output, "removed gh-self");

    assert_stdout_contains(&t.list(), "no credentials stored");
}

#[test]
fn test_rm_by_index_out_of_range() {
    let t = Test::with_credential("gh-self");

    let output = t.rm_index(5);
    assert_failure(&output);
    assert_stderr_contains(&output, "no credential at index 5");
}

#[test]
fn test_rm_unknown_name() {
    let t = Test::with_credential("gh-self");

    let output = t.rm_name("nope");
    assert_failure(&output);
    assert_stderr_contains(&output, "credential not found");
}

#[test]
fn test_no_command_without_terminal_errors() {
    let t = Test::new();

    let output = t.cmd().write_stdin("").output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "no command specified");
}

#[test]
fn test_completions_generate() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "bash"]).output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "foxhole");
}

#[test]
fn test_login_with_unknown_name_fails() {
    let t = Test::with_credential("gh-self");

    let output = t
        .cmd()
        .args(["login", "--name", "missing", "--action", "gh"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "credential not found");
}
