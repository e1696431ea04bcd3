use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn missing_assembly_file_is_reported() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["-p", "postgres", "-c", "Host=db", "-a", "bin/Gone.dll"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Assembly not found"))
        .stderr(predicate::str::contains("Gone.dll"));
}

#[test]
fn missing_project_directory_is_reported() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["-p", "postgres", "-c", "Host=db", "-a", "NoSuchProject"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Project directory not found"));
}

#[test]
fn missing_build_tool_is_reported() {
    let ctx = TestContext::new();
    ctx.create_project("Shop.Migrations");

    ctx.cli()
        .env("PATH", ctx.bin_dir())
        .args(["-p", "postgres", "-c", "Host=db", "-a", "Shop.Migrations"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Build tool 'dotnet' not found"));
}

#[cfg(unix)]
#[test]
fn failed_build_stops_the_run() {
    let ctx = TestContext::new();
    ctx.create_project("Shop.Migrations");
    ctx.install_script("dotnet", "exit 3");

    ctx.cli()
        .args(["-p", "postgres", "-c", "Host=db", "-a", "Shop.Migrations"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("failed with exit code 3"));
}

#[cfg(unix)]
#[test]
fn build_without_artifact_is_reported() {
    let ctx = TestContext::new();
    ctx.create_project("Shop.Migrations");
    ctx.install_script("dotnet", "exit 0");

    ctx.cli()
        .args(["-p", "postgres", "-c", "Host=db", "-a", "Shop.Migrations"])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("Shop.Migrations.dll"));
}

#[cfg(unix)]
#[test]
fn slow_build_is_killed_after_timeout() {
    let ctx = TestContext::new();
    ctx.create_project("Shop.Migrations");
    ctx.install_script("dotnet", "exec sleep 30");
    ctx.write_config("[build]\ntimeout_secs = 1\n");

    ctx.cli()
        .args(["-p", "postgres", "-c", "Host=db", "-a", "Shop.Migrations"])
        .assert()
        .code(6)
        .stderr(predicate::str::contains("timed out after 1s"));
}

#[cfg(unix)]
#[test]
fn built_project_without_runner_is_not_configured() {
    let ctx = TestContext::new();
    ctx.create_project("Shop.Migrations");
    ctx.install_build_tool();

    ctx.cli()
        .args(["-p", "postgres", "-c", "Host=db", "-a", "Shop.Migrations"])
        .assert()
        .code(8)
        .stderr(predicate::str::contains("No migration runner configured"));

    assert!(ctx.work_dir().join("Shop.Migrations/bin/Debug/net8.0/Shop.Migrations.dll").is_file());
}

#[test]
fn missing_runner_leaves_existing_script_untouched() {
    let ctx = TestContext::new();
    ctx.create_assembly("Migrations.dll");
    ctx.write_file("out.sql", "PRECIOUS\n");

    ctx.cli()
        .args(["-p", "postgres", "-c", "Host=db", "-a", "Migrations.dll", "-o", "out.sql"])
        .assert()
        .code(8)
        .stderr(predicate::str::contains("No migration runner configured"));

    assert_eq!(ctx.read("out.sql"), "PRECIOUS\n");
}
