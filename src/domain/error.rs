use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for migrun operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Command-line options that do not form a valid invocation.
    #[error("{0}")]
    Usage(String),

    /// Compiled assembly path does not exist.
    #[error("Assembly not found: {}", .0.display())]
    MissingAssembly(PathBuf),

    /// Project directory to build does not exist.
    #[error("Project directory not found: {}", .0.display())]
    MissingProjectDirectory(PathBuf),

    /// Build tool is not on the search path.
    #[error("Build tool '{0}' not found on PATH")]
    ToolNotFound(String),

    /// Build tool exited unsuccessfully.
    #[error("Build of {} failed{}", .project.display(), exit_suffix(.code))]
    BuildFailed { project: PathBuf, code: Option<i32> },

    /// Build tool exceeded its time limit and was killed.
    #[error("Build of {} timed out after {secs}s", .project.display())]
    BuildTimedOut { project: PathBuf, secs: u64 },

    /// Build finished but the expected artifact is absent.
    #[error("Build output not found: {}", .0.display())]
    BuildArtifactMissing(PathBuf),

    /// No external runner command is configured.
    #[error("No migration runner configured. Set [runner] command in migrun.toml.")]
    RunnerNotConfigured,

    /// External runner could not be started or exited unsuccessfully.
    #[error("Migration runner '{command}' failed: {details}")]
    RunnerFailed { command: String, details: String },

    /// Explicitly requested configuration file is absent.
    #[error("Config file not found: {}", .0.display())]
    ConfigMissing(PathBuf),

    /// Configuration content is invalid.
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

fn exit_suffix(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!(" with exit code {code}"),
        None => " (terminated by signal)".to_string(),
    }
}

impl AppError {
    pub fn usage<S: Into<String>>(message: S) -> Self {
        AppError::Usage(message.into())
    }

    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Process exit status for this error. Every abort path is non-zero.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Io(_) => 1,
            AppError::Usage(_) => 2,
            AppError::MissingAssembly(_) | AppError::MissingProjectDirectory(_) => 3,
            AppError::ToolNotFound(_) => 4,
            AppError::BuildFailed { .. } => 5,
            AppError::BuildTimedOut { .. } => 6,
            AppError::BuildArtifactMissing(_) => 7,
            AppError::RunnerNotConfigured | AppError::RunnerFailed { .. } => 8,
            AppError::ConfigMissing(_) | AppError::Configuration(_) | AppError::TomlParse(_) => 9,
        }
    }
}
