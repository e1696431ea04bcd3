use std::time::Duration;

use crate::domain::AppError;

/// A progress event emitted during a migration run.
#[derive(Debug, Clone, PartialEq)]
pub enum Announcement {
    Heading(String),
    Say(String),
    Emphasize(String),
    /// Generated or executed SQL text.
    Sql(String),
    ElapsedTime(Duration),
    Error(String),
}

/// Port for a reporting destination.
pub trait Announcer {
    fn announce(&mut self, announcement: &Announcement) -> Result<(), AppError>;

    /// Push buffered output to its destination.
    fn flush(&mut self) -> Result<(), AppError>;

    fn heading(&mut self, message: &str) -> Result<(), AppError> {
        self.announce(&Announcement::Heading(message.to_string()))
    }

    fn say(&mut self, message: &str) -> Result<(), AppError> {
        self.announce(&Announcement::Say(message.to_string()))
    }

    fn sql(&mut self, sql: &str) -> Result<(), AppError> {
        self.announce(&Announcement::Sql(sql.to_string()))
    }

    fn error(&mut self, message: &str) -> Result<(), AppError> {
        self.announce(&Announcement::Error(message.to_string()))
    }
}

impl<A: Announcer + ?Sized> Announcer for Box<A> {
    fn announce(&mut self, announcement: &Announcement) -> Result<(), AppError> {
        (**self).announce(announcement)
    }

    fn flush(&mut self) -> Result<(), AppError> {
        (**self).flush()
    }
}
