use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn help_lists_run_options() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--provider"))
        .stdout(predicate::str::contains("--connectionString"))
        .stdout(predicate::str::contains("--noConnection"));
}

#[test]
fn short_v_prints_version() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("-v")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn explicit_run_subcommand_accepts_version_flag() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["run", "--version"])
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_connection_mode_is_a_usage_error() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["--provider", "postgres"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--connectionString"));
}

#[test]
fn conflicting_connection_modes_are_rejected() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["-p", "postgres", "-c", "Host=db", "--noConnection", "-o", "out.sql"])
        .assert()
        .code(2);
}

#[test]
fn no_connection_without_output_is_rejected() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["-p", "sqlite", "--noConnection"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--output"));
}

#[test]
fn blank_provider_is_rejected_before_any_build() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["-p", " ", "-c", "Host=db"])
        .assert()
        .code(2)
        .stderr(predicate::str::starts_with("Error: "));
}
