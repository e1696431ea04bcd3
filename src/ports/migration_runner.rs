use crate::domain::{AppError, RunnerContext};
use crate::ports::Announcer;

/// Port for the component that actually applies migrations.
pub trait MigrationRunner {
    /// Fail early when the runner cannot be started at all. Called before any
    /// output file is opened.
    fn ensure_ready(&self) -> Result<(), AppError> {
        Ok(())
    }

    /// Execute the run described by `context`, reporting progress to `announcer`.
    fn execute(
        &self,
        context: &RunnerContext,
        announcer: &mut dyn Announcer,
    ) -> Result<(), AppError>;
}
