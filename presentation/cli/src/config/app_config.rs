use baseten::client::DEFAULT_BASE_URL;

use super::baseten_config::{BasetenConfig, ConfigError};

/// Everything the tool needs, built once at startup and passed down explicitly.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub baseten: BasetenConfig,
    pub base_url: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(BasetenConfig::from_env()?))
    }

    pub fn new(baseten: BasetenConfig) -> Self {
        Self {
            baseten,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}
