//! Configuration loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::configuration::MigrunConfig;
use crate::domain::AppError;

/// File looked up in the base directory when no `--config` is given.
pub const CONFIG_FILE_NAME: &str = "migrun.toml";

/// Load configuration from `explicit`, or `<base_dir>/migrun.toml` when present.
///
/// An explicit path must exist. The implicit file is optional and defaults apply
/// when it is absent.
pub fn load_config(base_dir: &Path, explicit: Option<&Path>) -> Result<MigrunConfig, AppError> {
    let path = match explicit {
        Some(path) => {
            let path = absolutize(base_dir, path);
            if !path.is_file() {
                return Err(AppError::ConfigMissing(path));
            }
            path
        }
        None => {
            let path = base_dir.join(CONFIG_FILE_NAME);
            if !path.is_file() {
                return Ok(MigrunConfig::default());
            }
            path
        }
    };

    let content = fs::read_to_string(&path)?;
    parse_config_content(&content)
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<MigrunConfig, AppError> {
    let config: MigrunConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

fn absolutize(base_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() { path.to_path_buf() } else { base_dir.join(path) }
}
