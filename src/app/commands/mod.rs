pub mod output;
pub mod resolve;
pub mod run;
