//! Output routing: which announcers receive progress and generated SQL.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::adapters::announcers::{
    AnnouncerSettings, BatchSeparatedWriterAnnouncer, CompositeAnnouncer, ConsoleAnnouncer,
    TextWriterAnnouncer,
};
use crate::domain::{AppError, ProviderRegistry, RunOptions, WriterPolicy};
use crate::ports::Announcer;

/// Where reporting goes for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportingPlan {
    ConsoleOnly,
    /// Console plus a script file written with `policy`.
    ConsoleAndFile { path: PathBuf, policy: WriterPolicy },
}

impl ReportingPlan {
    pub fn output_file(&self) -> Option<&Path> {
        match self {
            ReportingPlan::ConsoleOnly => None,
            ReportingPlan::ConsoleAndFile { path, .. } => Some(path),
        }
    }
}

/// Decide the reporting plan. The default output name keeps reporting on the console.
pub fn plan(options: &RunOptions, providers: &ProviderRegistry, base_dir: &Path) -> ReportingPlan {
    if options.has_default_output() {
        return ReportingPlan::ConsoleOnly;
    }
    ReportingPlan::ConsoleAndFile {
        path: base_dir.join(options.output()),
        policy: providers.policy_for(options.provider()),
    }
}

/// Open the announcers for `plan`. The output file is created or truncated here and
/// closed when the returned announcer is dropped.
pub fn open<'a, W: Write + 'a>(
    plan: &ReportingPlan,
    verbose: bool,
    console: W,
) -> Result<Box<dyn Announcer + 'a>, AppError> {
    let console = ConsoleAnnouncer::new(console, AnnouncerSettings::console(verbose));

    let (path, policy) = match plan {
        ReportingPlan::ConsoleOnly => return Ok(Box::new(console)),
        ReportingPlan::ConsoleAndFile { path, policy } => (path, policy),
    };

    let file = BufWriter::new(File::create(path)?);
    let file_announcer: Box<dyn Announcer + 'a> = match policy {
        WriterPolicy::Plain => {
            Box::new(TextWriterAnnouncer::new(file, AnnouncerSettings::script_file()))
        }
        WriterPolicy::BatchSeparated { separator } => Box::new(BatchSeparatedWriterAnnouncer::new(
            file,
            AnnouncerSettings::script_file(),
            separator.clone(),
        )),
    };

    Ok(Box::new(CompositeAnnouncer::new(vec![Box::new(console), file_announcer])))
}
