//! End-to-end CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn fibdev() -> Command {
    let mut cmd = Command::cargo_bin("fibdev").expect("binary not found");
    cmd.env_remove("FIBDEV_OFFSET");
    cmd
}

#[test]
fn help_flag() {
    fibdev()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fibonacci"));
}

#[test]
fn version_flag() {
    fibdev()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("fibdev"));
}

#[test]
fn default_run_reaches_limit() {
    fibdev()
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Writing to /dev/fibonacci, returned the sequence 1",
        ))
        .stdout(predicate::str::contains(
            "Reading from /dev/fibonacci at offset 100, returned the sequence 354224848179261915075.",
        ))
        .stdout(predicate::str::contains(
            "Reading from /dev/fibonacci at offset 92, returned the sequence 7540113804746346429.",
        ));
}

#[test]
fn quiet_mode() {
    fibdev()
        .args(["-o", "20", "-q", "--forward-only"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("4181\n6765\n"));
}

#[test]
fn offset_from_env() {
    fibdev()
        .env("FIBDEV_OFFSET", "10")
        .args(["-q", "--forward-only"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("34\n55\n"));
}

#[test]
fn json_mode() {
    let output = fibdev()
        .args(["-o", "94", "--json", "--forward-only"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let last: serde_json::Value = serde_json::from_str(stdout.lines().last().unwrap()).unwrap();
    assert_eq!(last["offset"], 94);
    assert_eq!(last["value"], "19740274219868223167");
}

#[test]
fn negative_offset_rejected() {
    fibdev().args(["--offset", "-3"]).assert().failure();
}

#[test]
fn json_and_quiet_conflict() {
    fibdev().args(["--json", "--quiet"]).assert().failure();
}

#[test]
fn completion_bash() {
    fibdev()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fibdev"));
}
