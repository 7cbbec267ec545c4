use business::domain::shared::value_objects::ApiKey;

pub const API_KEY_VAR: &str = "BASETEN_API_KEY";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("BASETEN_API_KEY environment variable not set")]
    MissingApiKey,
}

/// Configuration for Baseten API access.
#[derive(Debug, Clone)]
pub struct BasetenConfig {
    pub api_key: ApiKey,
}

impl BasetenConfig {
    /// Load the API key from the process environment
    ///
    /// Environment variables:
    /// - BASETEN_API_KEY: inference API key (required, non-empty)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same validation as `from_env` against an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .and_then(ApiKey::new)
            .ok_or(ConfigError::MissingApiKey)?;
        Ok(Self { api_key })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_load_api_key_when_present() {
        // Arrange
        let lookup = |name: &str| (name == API_KEY_VAR).then(|| "secret".to_string());

        // Act
        let config = BasetenConfig::from_lookup(lookup).unwrap();

        // Assert
        assert_eq!(config.api_key.expose(), "secret");
    }

    #[test]
    fn should_fail_when_api_key_is_absent() {
        let result = BasetenConfig::from_lookup(|_| None);
        assert!(matches!(result, Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn should_fail_when_api_key_is_empty() {
        let result = BasetenConfig::from_lookup(|_| Some("  ".to_string()));
        assert!(matches!(result, Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn should_name_variable_in_error_message() {
        assert_eq!(
            ConfigError::MissingApiKey.to_string(),
            "BASETEN_API_KEY environment variable not set"
        );
    }
}
