pub mod cli;
pub mod loaders;
pub mod store;

use std::fmt;

pub use cli::Args;
pub use store::StoreConfig;

#[async_trait::async_trait]
pub trait Configs: Sized {
    async fn load() -> Result<Self, Box<dyn std::error::Error + Send + Sync>>;
}

#[derive(Debug)]
pub enum ConfigError {
    Read { path: String, source: std::io::Error },
    Parse { path: String, source: serde_yaml::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, .. } => write!(f, "Failed to read file '{}'", path),
            Self::Parse { path, .. } => write!(f, "Failed to parse file '{}'", path),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
        }
    }
}

/// Resolved settings for one invocation: command-line arguments plus the
/// remote store session settings.
#[derive(Debug, Clone)]
pub struct SsmEbConfig {
    pub args: Args,
    pub store_config: StoreConfig,
}

impl SsmEbConfig {
    pub async fn from_args(
        args: Args,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let store_config = StoreConfig::load().await?.with_overrides(&args);
        Ok(Self { args, store_config })
    }
}
