//! Assembly resolution: from a user path to a compiled migrations assembly.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::app::AppContext;
use crate::domain::AppError;
use crate::domain::artifact::{expected_build_output, is_compiled_artifact, resolve_against};
use crate::ports::{BuildRequest, BuildTool, MigrationRunner};

/// Resolve `raw` (or `base_dir` when absent) to an existing assembly, building a
/// project directory first when needed.
pub fn resolve_assembly<B: BuildTool, M: MigrationRunner>(
    ctx: &AppContext<B, M>,
    raw: Option<&Path>,
    base_dir: &Path,
    verbose: bool,
) -> Result<PathBuf, AppError> {
    let path = resolve_against(base_dir, raw);
    debug!(path = %path.display(), "Resolved assembly path");

    if is_compiled_artifact(&path) {
        if !path.is_file() {
            return Err(AppError::MissingAssembly(path));
        }
        return Ok(path);
    }

    if !path.is_dir() {
        return Err(AppError::MissingProjectDirectory(path));
    }
    build_project(ctx, &path, verbose)
}

fn build_project<B: BuildTool, M: MigrationRunner>(
    ctx: &AppContext<B, M>,
    project_dir: &Path,
    verbose: bool,
) -> Result<PathBuf, AppError> {
    let settings = ctx.build_settings();
    let request = BuildRequest {
        project_dir,
        configuration: &settings.configuration,
        framework: &settings.framework,
        timeout: settings.timeout(),
        verbose,
    };

    let outcome = ctx.build_tool().build(&request)?;
    info!(
        project = %project_dir.display(),
        code = ?outcome.exit_code,
        elapsed_ms = outcome.elapsed.as_millis() as u64,
        "Build finished"
    );

    if settings.fail_on_nonzero_exit && !outcome.succeeded() {
        return Err(AppError::BuildFailed {
            project: project_dir.to_path_buf(),
            code: outcome.exit_code,
        });
    }

    let artifact = expected_build_output(project_dir, &settings.configuration, &settings.framework);
    if !artifact.is_file() {
        return Err(AppError::BuildArtifactMissing(artifact));
    }
    Ok(artifact)
}
