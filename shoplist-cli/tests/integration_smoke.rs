//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_top_level_help() {
    let mut cmd = Command::cargo_bin("shoplist").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("shoplist").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--index-window-days"))
        .stdout(predicate::str::contains("--in-memory"))
        .stdout(predicate::str::contains("--item-routes"));
}

#[test]
fn test_check_help() {
    let mut cmd = Command::cargo_bin("shoplist").unwrap();
    cmd.arg("check").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--database-url"));
}

#[test]
fn test_serve_rejects_bad_bind() {
    let mut cmd = Command::cargo_bin("shoplist").unwrap();
    cmd.arg("serve").arg("--in-memory").arg("--bind").arg("not-an-address");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
