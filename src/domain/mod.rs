pub mod artifact;
pub mod configuration;
pub mod error;
pub mod provider;
pub mod run_options;
pub mod runner_context;

pub use configuration::{BuildSettings, MigrunConfig, RunnerSettings};
pub use error::AppError;
pub use provider::{ProviderRegistry, WriterPolicy};
pub use run_options::{ConnectionMode, DEFAULT_OUTPUT, DEFAULT_TASK, RunOptions, RunOptionsBuilder};
pub use runner_context::RunnerContext;
