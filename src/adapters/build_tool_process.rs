use std::env;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::domain::AppError;
use crate::ports::{BuildOutcome, BuildRequest, BuildTool};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Builds projects by running an external executable found on the search path.
#[derive(Debug, Clone)]
pub struct ProcessBuildTool {
    tool: String,
    search_path: Option<OsString>,
}

impl ProcessBuildTool {
    /// Look `tool` up on the process `PATH`.
    pub fn new(tool: impl Into<String>) -> Self {
        Self { tool: tool.into(), search_path: env::var_os("PATH") }
    }

    /// Look `tool` up on an explicit search path instead of `PATH`.
    pub fn with_search_path(tool: impl Into<String>, search_path: impl Into<OsString>) -> Self {
        Self { tool: tool.into(), search_path: Some(search_path.into()) }
    }

    /// Resolve the tool executable.
    pub fn locate(&self, cwd: &Path) -> Result<PathBuf, AppError> {
        which::which_in(&self.tool, self.search_path.as_ref(), cwd)
            .map_err(|_| AppError::ToolNotFound(self.tool.clone()))
    }

    fn build_args(request: &BuildRequest<'_>) -> Vec<String> {
        vec![
            "build".to_string(),
            "--nologo".to_string(),
            "--verbosity".to_string(),
            "quiet".to_string(),
            "--configuration".to_string(),
            request.configuration.to_string(),
            "--framework".to_string(),
            request.framework.to_string(),
        ]
    }
}

impl BuildTool for ProcessBuildTool {
    fn build(&self, request: &BuildRequest<'_>) -> Result<BuildOutcome, AppError> {
        let tool = self.locate(request.project_dir)?;
        let args = Self::build_args(request);

        if request.verbose {
            info!(tool = %tool.display(), "Using build tool");
            info!(working_dir = %request.project_dir.display(), "Building project");
        }
        debug!(args = ?args, "Build arguments");

        let mut command = Command::new(&tool);
        command.args(&args).current_dir(request.project_dir).stdin(Stdio::null());
        if !request.verbose {
            command.stdout(Stdio::null());
        }

        let started = Instant::now();
        let mut child = command.spawn()?;
        let status = wait_bounded(&mut child, request.timeout)?;
        let elapsed = started.elapsed();

        match status {
            Some(status) => {
                debug!(code = ?status.code(), elapsed_ms = elapsed.as_millis() as u64, "Build finished");
                Ok(BuildOutcome { tool, exit_code: status.code(), elapsed })
            }
            None => Err(AppError::BuildTimedOut {
                project: request.project_dir.to_path_buf(),
                secs: request.timeout.map(|t| t.as_secs()).unwrap_or_default(),
            }),
        }
    }
}

/// Wait for `child`, killing it once `timeout` has passed. `Ok(None)` means it was killed.
fn wait_bounded(child: &mut Child, timeout: Option<Duration>) -> io::Result<Option<ExitStatus>> {
    let Some(timeout) = timeout else {
        return child.wait().map(Some);
    };

    let deadline = Instant::now() + timeout;
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        if Instant::now() >= deadline {
            // The child may exit between try_wait and kill.
            let _ = child.kill();
            child.wait()?;
            return Ok(None);
        }
        thread::sleep(POLL_INTERVAL);
    }
}
