//! Configuration models loaded from `migrun.toml`.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::provider::{ProviderRegistry, WriterPolicy};
use crate::domain::AppError;

/// Top-level configuration. Every section is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MigrunConfig {
    /// Project build settings.
    #[serde(default)]
    pub build: BuildSettings,
    /// External migration runner.
    #[serde(default)]
    pub runner: RunnerSettings,
    /// Additional provider writer policies.
    #[serde(default)]
    pub providers: Vec<ProviderSettings>,
}

impl MigrunConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.build.validate()?;
        self.runner.validate()?;
        for provider in &self.providers {
            provider.validate()?;
        }
        Ok(())
    }

    /// Default registry extended with configured providers.
    pub fn provider_registry(&self) -> ProviderRegistry {
        self.providers.iter().fold(ProviderRegistry::default(), |registry, provider| {
            registry.with_entry(&provider.prefix, provider.policy())
        })
    }
}

/// How project directories are built into an assembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildSettings {
    /// Executable looked up on the search path.
    #[serde(default = "default_tool")]
    pub tool: String,
    #[serde(default = "default_configuration")]
    pub configuration: String,
    /// Target framework moniker.
    #[serde(default = "default_framework")]
    pub framework: String,
    /// Seconds before the build is killed; 0 waits indefinitely.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Treat a non-zero exit as failure even when an artifact exists.
    #[serde(default = "default_true")]
    pub fail_on_nonzero_exit: bool,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            tool: default_tool(),
            configuration: default_configuration(),
            framework: default_framework(),
            timeout_secs: default_timeout_secs(),
            fail_on_nonzero_exit: default_true(),
        }
    }
}

impl BuildSettings {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.tool.trim().is_empty() {
            return Err(AppError::config_error("build.tool must not be empty"));
        }
        if self.configuration.trim().is_empty() {
            return Err(AppError::config_error("build.configuration must not be empty"));
        }
        if self.framework.trim().is_empty() {
            return Err(AppError::config_error("build.framework must not be empty"));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

fn default_tool() -> String {
    "dotnet".to_string()
}

fn default_configuration() -> String {
    "Debug".to_string()
}

fn default_framework() -> String {
    "net8.0".to_string()
}

fn default_timeout_secs() -> u64 {
    600
}

fn default_true() -> bool {
    true
}

/// External runner process.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunnerSettings {
    pub command: Option<String>,
    #[serde(default)]
    pub args: Vec<String>,
}

impl RunnerSettings {
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(command) = &self.command {
            if command.trim().is_empty() {
                return Err(AppError::config_error("runner.command must not be empty"));
            }
        }
        Ok(())
    }
}

/// Writer policy for providers whose name starts with `prefix`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProviderSettings {
    pub prefix: String,
    /// Line written after each SQL statement. Absent means a plain writer.
    pub batch_separator: Option<String>,
}

impl ProviderSettings {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.prefix.trim().is_empty() {
            return Err(AppError::config_error("providers.prefix must not be empty"));
        }
        Ok(())
    }

    pub fn policy(&self) -> WriterPolicy {
        match &self.batch_separator {
            Some(separator) => WriterPolicy::BatchSeparated { separator: separator.clone() },
            None => WriterPolicy::Plain,
        }
    }
}
