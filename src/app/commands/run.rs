//! Run command: resolve, route output, hand the context to the runner.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::app::AppContext;
use crate::app::commands::{output, resolve};
use crate::domain::{AppError, RunOptions, RunnerContext};
use crate::ports::{BuildTool, MigrationRunner};

pub use output::ReportingPlan;

/// What a completed run used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
    pub assembly: PathBuf,
    pub reporting: ReportingPlan,
}

/// Execute one migration run.
///
/// Nothing reaches the runner unless the assembly resolves and the runner is ready.
/// The output file, when one is used, is flushed and closed before this returns,
/// also on failure.
pub fn execute<B, M, W>(
    ctx: &AppContext<B, M>,
    options: &RunOptions,
    base_dir: &Path,
    console: W,
) -> Result<RunResult, AppError>
where
    B: BuildTool,
    M: MigrationRunner,
    W: Write,
{
    let assembly = resolve::resolve_assembly(ctx, options.assembly(), base_dir, options.verbose())?;
    // An existing output file is only truncated once the runner can start.
    ctx.runner().ensure_ready()?;
    let reporting = output::plan(options, ctx.providers(), base_dir);
    debug!(assembly = %assembly.display(), reporting = ?reporting, "Prepared run");

    let context = RunnerContext::new(options, assembly.clone());
    let mut announcer = output::open(&reporting, options.verbose(), console)?;

    let executed = ctx.runner().execute(&context, announcer.as_mut());
    let flushed = announcer.flush();
    drop(announcer);

    if let Err(err) = &flushed {
        if executed.is_err() {
            warn!(error = %err, "Failed to flush output after runner failure");
        }
    }
    executed?;
    flushed?;

    Ok(RunResult { assembly, reporting })
}
