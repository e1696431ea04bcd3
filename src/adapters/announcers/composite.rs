use crate::domain::AppError;
use crate::ports::{Announcement, Announcer};

/// Dispatches every event to each inner announcer in order.
pub struct CompositeAnnouncer<'a> {
    announcers: Vec<Box<dyn Announcer + 'a>>,
}

impl<'a> CompositeAnnouncer<'a> {
    pub fn new(announcers: Vec<Box<dyn Announcer + 'a>>) -> Self {
        Self { announcers }
    }
}

impl Announcer for CompositeAnnouncer<'_> {
    fn announce(&mut self, announcement: &Announcement) -> Result<(), AppError> {
        for announcer in &mut self.announcers {
            announcer.announce(announcement)?;
        }
        Ok(())
    }

    /// Flushes every inner announcer even when an earlier one fails; the first error wins.
    fn flush(&mut self) -> Result<(), AppError> {
        let mut first_error = None;
        for announcer in &mut self.announcers {
            if let Err(err) = announcer.flush() {
                first_error.get_or_insert(err);
            }
        }
        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
