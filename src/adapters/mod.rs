pub mod announcers;
pub mod build_tool_process;
pub mod migration_runner_process;
