use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::{PredicateBooleanExt, predicate};

#[test]
fn prints_help() {
    let mut cmd = cargo_bin_cmd!("git-user-switch");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage").or(predicate::str::contains("USAGE")));
}

#[test]
fn rejects_unknown_arguments() {
    let mut cmd = cargo_bin_cmd!("git-user-switch");
    cmd.arg("switch").assert().failure();
}
