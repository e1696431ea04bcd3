use std::cell::RefCell;
use std::rc::Rc;

use crate::domain::AppError;
use crate::ports::{Announcement, Announcer};

/// Announcer that keeps events in memory. Clones share the same log.
#[derive(Clone, Default)]
pub struct MemoryAnnouncer {
    events: Rc<RefCell<Vec<Announcement>>>,
    flushes: Rc<RefCell<usize>>,
}

impl MemoryAnnouncer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Announcement> {
        self.events.borrow().clone()
    }

    pub fn flush_count(&self) -> usize {
        *self.flushes.borrow()
    }
}

impl Announcer for MemoryAnnouncer {
    fn announce(&mut self, announcement: &Announcement) -> Result<(), AppError> {
        self.events.borrow_mut().push(announcement.clone());
        Ok(())
    }

    fn flush(&mut self) -> Result<(), AppError> {
        *self.flushes.borrow_mut() += 1;
        Ok(())
    }
}
