//! Execution context handed to the external migration runner.

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::RunOptions;

/// Configuration value consumed by the migration runner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunnerContext {
    pub provider: String,
    pub connection_string: Option<String>,
    /// Assemblies containing migrations. Always a single entry from this front-end.
    pub targets: Vec<PathBuf>,
    pub preview_only: bool,
    pub task: String,
    pub no_connection: bool,
    pub start_version: i64,
    /// Version to migrate to; 0 applies everything pending.
    pub version: i64,
    pub profile: Option<String>,
    pub tags: Vec<String>,
    pub application_context: Option<String>,
}

impl RunnerContext {
    pub fn new(options: &RunOptions, artifact: PathBuf) -> Self {
        let mode = options.connection_mode();
        Self {
            provider: options.provider().to_string(),
            connection_string: mode.connection_string().map(str::to_string),
            targets: vec![artifact],
            preview_only: false,
            task: options.task().to_string(),
            no_connection: mode.is_no_connection(),
            start_version: mode.start_version(),
            version: options.migrate_to_version(),
            profile: options.profile().map(str::to_string),
            tags: options.tags().iter().cloned().collect(),
            application_context: options.application_context().map(str::to_string),
        }
    }
}
