//! Smoke tests to verify command module wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_top_level_help() {
    let mut cmd = Command::cargo_bin("cotizador").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("mortgage quotes"));
}

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("cotizador").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Address to bind to"))
        .stdout(predicate::str::contains("cors-permissive"));
}

#[test]
fn test_migrate_help() {
    let mut cmd = Command::cargo_bin("cotizador").unwrap();
    cmd.arg("migrate").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Postgres connection string"));
}

#[test]
fn test_seed_help() {
    let mut cmd = Command::cargo_bin("cotizador").unwrap();
    cmd.arg("seed").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Postgres connection string"));
}

#[test]
fn test_migrate_without_database_url_fails() {
    let mut cmd = Command::cargo_bin("cotizador").unwrap();
    cmd.arg("migrate").env_remove("DATABASE_URL");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("DATABASE_URL not set"));
}
