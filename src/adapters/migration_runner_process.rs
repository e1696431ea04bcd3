use std::io::{self, BufRead, BufReader, Write};
use std::process::{Command, Stdio};
use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::domain::{AppError, RunnerContext, RunnerSettings};
use crate::ports::{Announcement, Announcer, MigrationRunner};

/// Runs migrations through an external executable.
///
/// The context is written to the child's stdin as JSON. Each stdout line is read
/// as a JSON announcement such as `{"kind":"sql","sql":"..."}`; any other line is
/// forwarded as a plain message.
#[derive(Debug, Clone)]
pub struct ProcessMigrationRunner {
    command: Option<String>,
    args: Vec<String>,
}

impl ProcessMigrationRunner {
    pub fn new(command: impl Into<String>, args: Vec<String>) -> Self {
        Self { command: Some(command.into()), args }
    }

    /// Runner from configuration. Without a command every run fails with
    /// `RunnerNotConfigured`.
    pub fn from_settings(settings: &RunnerSettings) -> Self {
        Self { command: settings.command.clone(), args: settings.args.clone() }
    }

    pub fn is_configured(&self) -> bool {
        self.command.is_some()
    }
}

fn failure(command: &str, details: impl Into<String>) -> AppError {
    AppError::RunnerFailed { command: command.to_string(), details: details.into() }
}

impl MigrationRunner for ProcessMigrationRunner {
    fn ensure_ready(&self) -> Result<(), AppError> {
        if !self.is_configured() {
            return Err(AppError::RunnerNotConfigured);
        }
        Ok(())
    }

    fn execute(
        &self,
        context: &RunnerContext,
        announcer: &mut dyn Announcer,
    ) -> Result<(), AppError> {
        let command = self.command.as_deref().ok_or(AppError::RunnerNotConfigured)?;
        let payload = serde_json::to_vec(context).map_err(|e| failure(command, e.to_string()))?;

        debug!(command, args = ?self.args, "Starting migration runner");
        let mut child = Command::new(command)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| failure(command, e.to_string()))?;

        if let Some(mut stdin) = child.stdin.take() {
            // A runner that exits without reading its input is judged by its exit status.
            match stdin.write_all(&payload) {
                Err(err) if err.kind() != io::ErrorKind::BrokenPipe => {
                    let _ = child.kill();
                    child.wait()?;
                    return Err(err.into());
                }
                _ => {}
            }
        }

        let stdout = child.stdout.take().ok_or_else(|| failure(command, "stdout not captured"))?;
        if let Err(err) = forward_output(BufReader::new(stdout), announcer) {
            warn!(error = %err, "Forwarding runner output failed; stopping migration runner");
            let _ = child.kill();
            child.wait()?;
            return Err(err);
        }

        let status = child.wait()?;
        if !status.success() {
            let details = match status.code() {
                Some(code) => format!("exited with code {code}"),
                None => "terminated by signal".to_string(),
            };
            return Err(failure(command, details));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum RunnerEvent {
    Heading { message: String },
    Say { message: String },
    Emphasize { message: String },
    Sql { sql: String },
    ElapsedTime { seconds: f64 },
    Error { message: String },
}

impl From<RunnerEvent> for Announcement {
    fn from(event: RunnerEvent) -> Self {
        match event {
            RunnerEvent::Heading { message } => Announcement::Heading(message),
            RunnerEvent::Say { message } => Announcement::Say(message),
            RunnerEvent::Emphasize { message } => Announcement::Emphasize(message),
            RunnerEvent::Sql { sql } => Announcement::Sql(sql),
            RunnerEvent::ElapsedTime { seconds } => {
                Announcement::ElapsedTime(Duration::try_from_secs_f64(seconds).unwrap_or_default())
            }
            RunnerEvent::Error { message } => Announcement::Error(message),
        }
    }
}

/// Announce each non-blank stdout line. Bytes that are not UTF-8 are replaced
/// rather than ending the stream.
fn forward_output<R: BufRead>(
    mut reader: R,
    announcer: &mut dyn Announcer,
) -> Result<(), AppError> {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(());
        }
        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end_matches(['\n', '\r']);
        if line.trim().is_empty() {
            continue;
        }
        announcer.announce(&parse_event(line))?;
    }
}

fn parse_event(line: &str) -> Announcement {
    match serde_json::from_str::<RunnerEvent>(line) {
        Ok(event) => event.into(),
        Err(_) => Announcement::Say(line.to_string()),
    }
}
