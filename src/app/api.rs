//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together configuration
//! loading, context creation, and command execution.

use std::io;
use std::path::Path;

use tracing::debug;

use crate::adapters::build_tool_process::ProcessBuildTool;
use crate::adapters::migration_runner_process::ProcessMigrationRunner;
use crate::app::{AppContext, commands::run};
use crate::domain::configuration::load_config;

pub use crate::app::commands::run::{ReportingPlan, RunResult};
pub use crate::domain::{AppError, ConnectionMode, RunOptions, RunOptionsBuilder};

/// Create an `AppContext` from the configuration found for `base_dir`.
fn create_context(
    base_dir: &Path,
    config: Option<&Path>,
) -> Result<AppContext<ProcessBuildTool, ProcessMigrationRunner>, AppError> {
    let config = load_config(base_dir, config)?;
    debug!(tool = %config.build.tool, runner = ?config.runner.command, "Loaded configuration");

    let build_tool = ProcessBuildTool::new(config.build.tool.clone());
    let runner = ProcessMigrationRunner::from_settings(&config.runner);
    Ok(AppContext::new(build_tool, runner, &config))
}

/// Run migrations from the current directory.
pub fn run(options: &RunOptions, config: Option<&Path>) -> Result<RunResult, AppError> {
    run_at(&std::env::current_dir()?, options, config)
}

/// Run migrations with relative paths resolved against `base_dir`.
///
/// Progress is reported on standard output. `config` names a configuration file;
/// without it `migrun.toml` in `base_dir` is used when present.
pub fn run_at(
    base_dir: &Path,
    options: &RunOptions,
    config: Option<&Path>,
) -> Result<RunResult, AppError> {
    let ctx = create_context(base_dir, config)?;
    run::execute(&ctx, options, base_dir, io::stdout().lock())
}
