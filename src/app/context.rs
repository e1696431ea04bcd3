use crate::domain::{BuildSettings, MigrunConfig, ProviderRegistry};
use crate::ports::{BuildTool, MigrationRunner};

/// Application context holding dependencies for command execution.
pub struct AppContext<B: BuildTool, M: MigrationRunner> {
    build_tool: B,
    runner: M,
    build: BuildSettings,
    providers: ProviderRegistry,
}

impl<B: BuildTool, M: MigrationRunner> AppContext<B, M> {
    /// Create a new application context.
    pub fn new(build_tool: B, runner: M, config: &MigrunConfig) -> Self {
        Self {
            build_tool,
            runner,
            build: config.build.clone(),
            providers: config.provider_registry(),
        }
    }

    pub fn build_tool(&self) -> &B {
        &self.build_tool
    }

    pub fn runner(&self) -> &M {
        &self.runner
    }

    pub fn build_settings(&self) -> &BuildSettings {
        &self.build
    }

    pub fn providers(&self) -> &ProviderRegistry {
        &self.providers
    }
}
