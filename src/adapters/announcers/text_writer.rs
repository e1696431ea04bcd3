use std::io::Write;

use crate::adapters::announcers::AnnouncerSettings;
use crate::domain::AppError;
use crate::ports::{Announcement, Announcer};

/// Writes a runnable SQL script: statements verbatim, everything else as comments.
pub struct TextWriterAnnouncer<W: Write> {
    out: W,
    settings: AnnouncerSettings,
}

impl<W: Write> TextWriterAnnouncer<W> {
    pub fn new(out: W, settings: AnnouncerSettings) -> Self {
        Self { out, settings }
    }

    pub(crate) fn write_line(&mut self, line: &str) -> Result<(), AppError> {
        writeln!(self.out, "{line}")?;
        Ok(())
    }

    fn comment(&mut self, text: &str) -> Result<(), AppError> {
        // Keep an embedded terminator from closing the comment early.
        let text = text.replace("*/", "* /");
        self.write_line(&format!("/* {text} */"))
    }
}

impl<W: Write> Announcer for TextWriterAnnouncer<W> {
    fn announce(&mut self, announcement: &Announcement) -> Result<(), AppError> {
        match announcement {
            Announcement::Heading(message) => {
                self.write_line("")?;
                self.comment(message)?;
            }
            Announcement::Say(message) | Announcement::Emphasize(message) => {
                self.comment(message)?;
            }
            Announcement::Sql(sql) => {
                if !self.settings.show_sql {
                    return Ok(());
                }
                if sql.trim().is_empty() {
                    self.comment("No SQL statement executed.")?;
                } else {
                    self.write_line(sql.trim_end())?;
                }
            }
            Announcement::ElapsedTime(elapsed) => {
                if self.settings.show_elapsed_time {
                    self.comment(&format!("=> {:.3}s", elapsed.as_secs_f64()))?;
                }
            }
            Announcement::Error(message) => self.comment(&format!("!!! {message}"))?,
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), AppError> {
        self.out.flush()?;
        Ok(())
    }
}
