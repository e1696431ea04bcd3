//! migrun: build or locate a migrations assembly and drive an external migration runner.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    AppError, ConnectionMode, ReportingPlan, RunOptions, RunOptionsBuilder, RunResult, run, run_at,
};
