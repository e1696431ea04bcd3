use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::domain::AppError;

/// Parameters for a single project build.
#[derive(Debug, Clone)]
pub struct BuildRequest<'a> {
    /// Absolute project directory; also the working directory of the build.
    pub project_dir: &'a Path,
    pub configuration: &'a str,
    /// Target framework moniker.
    pub framework: &'a str,
    /// Upper bound on build duration. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    /// Let build output through to the console.
    pub verbose: bool,
}

/// What happened when the build tool ran to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOutcome {
    /// Resolved path of the build executable.
    pub tool: PathBuf,
    /// Exit code, or `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
    pub elapsed: Duration,
}

impl BuildOutcome {
    pub fn succeeded(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Port for building a project directory into a migrations assembly.
pub trait BuildTool {
    /// Run the build and wait for it to finish.
    ///
    /// Fails with `ToolNotFound` when the executable is not on the search path
    /// and `BuildTimedOut` when the request's timeout expires. A non-zero exit
    /// is reported through [`BuildOutcome::exit_code`], not as an error.
    fn build(&self, request: &BuildRequest<'_>) -> Result<BuildOutcome, AppError>;
}
