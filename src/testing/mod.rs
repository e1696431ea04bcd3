mod fake_build_tool;
mod memory_announcer;
mod recording_runner;

pub use fake_build_tool::FakeBuildTool;
pub use memory_announcer::MemoryAnnouncer;
pub use recording_runner::RecordingRunner;
#[cfg(unix)]
pub use scripts::write_script;
