mod announcer;
mod build_tool;
mod migration_runner;

pub use announcer::{Announcement, Announcer};
pub use build_tool::{BuildOutcome, BuildRequest, BuildTool};
pub use migration_runner::MigrationRunner;
