use std::io::Write;

use crate::adapters::announcers::AnnouncerSettings;
use crate::domain::AppError;
use crate::ports::{Announcement, Announcer};

const RULE_WIDTH: usize = 79;

/// Human-oriented progress output, normally on stdout.
pub struct ConsoleAnnouncer<W: Write> {
    out: W,
    settings: AnnouncerSettings,
}

impl<W: Write> ConsoleAnnouncer<W> {
    pub fn new(out: W, settings: AnnouncerSettings) -> Self {
        Self { out, settings }
    }
}

impl<W: Write> Announcer for ConsoleAnnouncer<W> {
    fn announce(&mut self, announcement: &Announcement) -> Result<(), AppError> {
        match announcement {
            Announcement::Heading(message) => {
                let title = format!("-- {message} ");
                let fill = RULE_WIDTH.saturating_sub(title.chars().count());
                writeln!(self.out, "{title}{}", "=".repeat(fill))?;
            }
            Announcement::Say(message) => writeln!(self.out, "[+] {message}")?,
            Announcement::Emphasize(message) => writeln!(self.out, "[!] {message}")?,
            Announcement::Sql(sql) => {
                if self.settings.show_sql {
                    if sql.trim().is_empty() {
                        writeln!(self.out, "No SQL statement executed.")?;
                    } else {
                        writeln!(self.out, "{}", sql.trim_end())?;
                    }
                }
            }
            Announcement::ElapsedTime(elapsed) => {
                if self.settings.show_elapsed_time {
                    writeln!(self.out, "=> {:.3}s", elapsed.as_secs_f64())?;
                }
            }
            Announcement::Error(message) => writeln!(self.out, "!!! {message}")?,
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), AppError> {
        self.out.flush()?;
        Ok(())
    }
}
