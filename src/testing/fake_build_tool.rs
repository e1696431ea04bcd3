use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::domain::AppError;
use crate::domain::artifact::expected_build_output;
use crate::ports::{BuildOutcome, BuildRequest, BuildTool};

/// Build tool double that records requests and optionally writes the expected artifact.
pub struct FakeBuildTool {
    pub invocations: RefCell<Vec<PathBuf>>,
    exit_code: i32,
    writes_artifact: bool,
    missing: bool,
}

impl FakeBuildTool {
    /// Exits 0 and produces the conventional artifact.
    pub fn succeeding() -> Self {
        Self::with(0, true)
    }

    /// Exits 0 without producing anything.
    pub fn without_output() -> Self {
        Self::with(0, false)
    }

    /// Exits with `exit_code`, optionally leaving an artifact behind.
    pub fn failing(exit_code: i32, writes_artifact: bool) -> Self {
        Self::with(exit_code, writes_artifact)
    }

    /// Behaves as if the executable is absent from the search path.
    pub fn missing() -> Self {
        Self { missing: true, ..Self::with(0, false) }
    }

    fn with(exit_code: i32, writes_artifact: bool) -> Self {
        Self { invocations: RefCell::new(Vec::new()), exit_code, writes_artifact, missing: false }
    }

    pub fn invocation_count(&self) -> usize {
        self.invocations.borrow().len()
    }
}

impl BuildTool for FakeBuildTool {
    fn build(&self, request: &BuildRequest<'_>) -> Result<BuildOutcome, AppError> {
        if self.missing {
            return Err(AppError::ToolNotFound("dotnet".to_string()));
        }
        self.invocations.borrow_mut().push(request.project_dir.to_path_buf());

        if self.writes_artifact {
            let artifact =
                expected_build_output(request.project_dir, request.configuration, request.framework);
            if let Some(parent) = artifact.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&artifact, b"MZ")?;
        }

        Ok(BuildOutcome {
            tool: PathBuf::from("/usr/bin/dotnet"),
            exit_code: Some(self.exit_code),
            elapsed: Duration::from_millis(5),
        })
    }
}
