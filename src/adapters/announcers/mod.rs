//! Reporting sinks for migration progress and generated SQL.

mod batch_separated;
mod composite;
mod console;
mod text_writer;

pub use batch_separated::BatchSeparatedWriterAnnouncer;
pub use composite::CompositeAnnouncer;
pub use console::ConsoleAnnouncer;
pub use text_writer::TextWriterAnnouncer;

/// Display toggles shared by all announcers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnnouncerSettings {
    pub show_elapsed_time: bool,
    pub show_sql: bool,
}

impl AnnouncerSettings {
    /// Console output: timing and SQL echo follow `--verbose`.
    pub fn console(verbose: bool) -> Self {
        Self { show_elapsed_time: verbose, show_sql: verbose }
    }

    /// Script files never carry timing and always carry SQL.
    pub fn script_file() -> Self {
        Self { show_elapsed_time: false, show_sql: true }
    }
}
