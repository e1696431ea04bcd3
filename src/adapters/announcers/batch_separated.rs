use std::io::Write;

use crate::adapters::announcers::{AnnouncerSettings, TextWriterAnnouncer};
use crate::domain::AppError;
use crate::ports::{Announcement, Announcer};

/// Script writer for dialects that split batches with a separator line, such as
/// `GO` for SQL Server tooling.
pub struct BatchSeparatedWriterAnnouncer<W: Write> {
    inner: TextWriterAnnouncer<W>,
    separator: String,
    show_sql: bool,
}

impl<W: Write> BatchSeparatedWriterAnnouncer<W> {
    pub fn new(out: W, settings: AnnouncerSettings, separator: impl Into<String>) -> Self {
        Self {
            inner: TextWriterAnnouncer::new(out, settings),
            separator: separator.into(),
            show_sql: settings.show_sql,
        }
    }
}

impl<W: Write> Announcer for BatchSeparatedWriterAnnouncer<W> {
    fn announce(&mut self, announcement: &Announcement) -> Result<(), AppError> {
        self.inner.announce(announcement)?;
        if let Announcement::Sql(sql) = announcement {
            if self.show_sql && !sql.trim().is_empty() {
                let separator = self.separator.clone();
                self.inner.write_line(&separator)?;
            }
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), AppError> {
        self.inner.flush()
    }
}
