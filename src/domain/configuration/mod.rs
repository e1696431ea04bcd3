pub mod loader;
pub mod migrun_config;

pub use loader::{CONFIG_FILE_NAME, load_config, parse_config_content};
pub use migrun_config::{BuildSettings, MigrunConfig, ProviderSettings, RunnerSettings};
