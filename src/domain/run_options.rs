//! Immutable options for a single migration run.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Output file name that keeps reporting on the console only.
pub const DEFAULT_OUTPUT: &str = "migration.sql";

/// Task executed when none is given.
pub const DEFAULT_TASK: &str = "migrate";

/// How the runner reaches the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionMode {
    /// Apply migrations against a live database.
    Connected { connection_string: String },
    /// Generate a script only, starting from an explicit version.
    NoConnection { start_version: i64 },
}

impl ConnectionMode {
    pub fn connection_string(&self) -> Option<&str> {
        match self {
            ConnectionMode::Connected { connection_string } => Some(connection_string),
            ConnectionMode::NoConnection { .. } => None,
        }
    }

    pub fn is_no_connection(&self) -> bool {
        matches!(self, ConnectionMode::NoConnection { .. })
    }

    /// Start version; always 0 for connected runs.
    pub fn start_version(&self) -> i64 {
        match self {
            ConnectionMode::Connected { .. } => 0,
            ConnectionMode::NoConnection { start_version } => *start_version,
        }
    }
}

/// Options for the run command. Built once through [`RunOptionsBuilder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    provider: String,
    connection_mode: ConnectionMode,
    migrate_to_version: i64,
    assembly: Option<PathBuf>,
    task: String,
    output: PathBuf,
    profile: Option<String>,
    tags: BTreeSet<String>,
    application_context: Option<String>,
    verbose: bool,
}

impl RunOptions {
    pub fn builder(provider: impl Into<String>) -> RunOptionsBuilder {
        RunOptionsBuilder::new(provider)
    }

    pub fn provider(&self) -> &str {
        &self.provider
    }

    pub fn connection_mode(&self) -> &ConnectionMode {
        &self.connection_mode
    }

    /// Target version; 0 runs every pending migration.
    pub fn migrate_to_version(&self) -> i64 {
        self.migrate_to_version
    }

    /// Raw assembly or project path as given on the command line.
    pub fn assembly(&self) -> Option<&Path> {
        self.assembly.as_deref()
    }

    pub fn task(&self) -> &str {
        &self.task
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    /// True when the output path is the default, which keeps reporting console-only.
    pub fn has_default_output(&self) -> bool {
        self.output == Path::new(DEFAULT_OUTPUT)
    }

    pub fn profile(&self) -> Option<&str> {
        self.profile.as_deref()
    }

    pub fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    pub fn application_context(&self) -> Option<&str> {
        self.application_context.as_deref()
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}

/// Collects option values and validates them into a [`RunOptions`].
#[derive(Debug, Clone, Default)]
pub struct RunOptionsBuilder {
    provider: String,
    connection_string: Option<String>,
    no_connection: bool,
    start_version: Option<i64>,
    migrate_to_version: i64,
    assembly: Option<PathBuf>,
    task: Option<String>,
    output: Option<PathBuf>,
    profile: Option<String>,
    tags: BTreeSet<String>,
    application_context: Option<String>,
    verbose: bool,
}

impl RunOptionsBuilder {
    pub fn new(provider: impl Into<String>) -> Self {
        Self { provider: provider.into(), ..Self::default() }
    }

    pub fn connection_string(mut self, value: impl Into<String>) -> Self {
        self.connection_string = Some(value.into());
        self
    }

    pub fn no_connection(mut self, enabled: bool) -> Self {
        self.no_connection = enabled;
        self
    }

    pub fn start_version(mut self, version: i64) -> Self {
        self.start_version = Some(version);
        self
    }

    pub fn migrate_to_version(mut self, version: i64) -> Self {
        self.migrate_to_version = version;
        self
    }

    pub fn assembly(mut self, path: impl Into<PathBuf>) -> Self {
        self.assembly = Some(path.into());
        self
    }

    pub fn task(mut self, task: impl Into<String>) -> Self {
        self.task = Some(task.into());
        self
    }

    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }

    pub fn profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn application_context(mut self, value: impl Into<String>) -> Self {
        self.application_context = Some(value.into());
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn build(self) -> Result<RunOptions, AppError> {
        let provider = self.provider.trim().to_string();
        if provider.is_empty() {
            return Err(AppError::usage("--provider must not be empty"));
        }

        let connection_mode = match (self.connection_string, self.no_connection) {
            (Some(_), true) => {
                return Err(AppError::usage(
                    "--connectionString cannot be combined with --noConnection",
                ));
            }
            (None, false) => {
                return Err(AppError::usage(
                    "either --connectionString or --noConnection is required",
                ));
            }
            (Some(connection_string), false) => {
                if self.start_version.is_some() {
                    return Err(AppError::usage("--startVersion requires --noConnection"));
                }
                ConnectionMode::Connected { connection_string }
            }
            (None, true) => {
                if self.output.is_none() {
                    return Err(AppError::usage("--noConnection requires --output"));
                }
                ConnectionMode::NoConnection { start_version: self.start_version.unwrap_or(0) }
            }
        };

        Ok(RunOptions {
            provider,
            connection_mode,
            migrate_to_version: self.migrate_to_version,
            assembly: self.assembly,
            task: self.task.unwrap_or_else(|| DEFAULT_TASK.to_string()),
            output: self.output.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            profile: self.profile,
            tags: self.tags,
            application_context: self.application_context,
            verbose: self.verbose,
        })
    }
}
