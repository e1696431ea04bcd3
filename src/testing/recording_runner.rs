use std::cell::RefCell;

use crate::domain::{AppError, RunnerContext};
use crate::ports::{Announcement, Announcer, MigrationRunner};

/// Runner double that records contexts and replays scripted announcements.
#[derive(Default)]
pub struct RecordingRunner {
    pub contexts: RefCell<Vec<RunnerContext>>,
    script: Vec<Announcement>,
    fail_with: Option<String>,
    unconfigured: bool,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emitting(script: Vec<Announcement>) -> Self {
        Self { script, ..Self::default() }
    }

    /// Emit the script, then fail.
    pub fn failing_after(script: Vec<Announcement>, details: &str) -> Self {
        Self { script, fail_with: Some(details.to_string()), ..Self::default() }
    }

    /// Reports `RunnerNotConfigured` from `ensure_ready`.
    pub fn unconfigured() -> Self {
        Self { unconfigured: true, ..Self::default() }
    }

    pub fn last_context(&self) -> Option<RunnerContext> {
        self.contexts.borrow().last().cloned()
    }

    pub fn call_count(&self) -> usize {
        self.contexts.borrow().len()
    }
}

impl MigrationRunner for RecordingRunner {
    fn ensure_ready(&self) -> Result<(), AppError> {
        if self.unconfigured {
            return Err(AppError::RunnerNotConfigured);
        }
        Ok(())
    }

    fn execute(
        &self,
        context: &RunnerContext,
        announcer: &mut dyn Announcer,
    ) -> Result<(), AppError> {
        self.contexts.borrow_mut().push(context.clone());
        for announcement in &self.script {
            announcer.announce(announcement)?;
        }
        match &self.fail_with {
            Some(details) => Err(AppError::RunnerFailed {
                command: "recording".to_string(),
                details: details.clone(),
            }),
            None => Ok(()),
        }
    }
}
