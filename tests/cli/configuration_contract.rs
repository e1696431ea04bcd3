use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn explicit_config_file_must_exist() {
    let ctx = TestContext::new();
    ctx.create_assembly("Migrations.dll");

    ctx.cli()
        .args(["-p", "postgres", "-c", "Host=db", "-a", "Migrations.dll"])
        .args(["--config", "missing.toml"])
        .assert()
        .code(9)
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn unknown_config_keys_are_rejected() {
    let ctx = TestContext::new();
    ctx.create_assembly("Migrations.dll");
    ctx.write_config("[build]\ncompiler = \"msbuild\"\n");

    ctx.cli()
        .args(["-p", "postgres", "-c", "Host=db", "-a", "Migrations.dll"])
        .assert()
        .code(9)
        .stderr(predicate::str::contains("compiler"));
}

#[test]
fn invalid_config_values_are_rejected() {
    let ctx = TestContext::new();
    ctx.create_assembly("Migrations.dll");
    ctx.write_config("[build]\nframework = \"\"\n");

    ctx.cli()
        .args(["-p", "postgres", "-c", "Host=db", "-a", "Migrations.dll"])
        .assert()
        .code(9)
        .stderr(predicate::str::contains("Invalid configuration"));
}
