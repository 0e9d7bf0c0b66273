//! API credential configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;

/// Credential handed to the store at startup.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiConfig {
    /// API key seeded into the store's initial state
    pub key: Option<SecretString>,
}

impl ApiConfig {
    /// Key to seed the store with; empty when none is configured.
    pub fn initial_key(&self) -> &str {
        self.key.as_ref().map_or("", |k| k.expose_secret().as_str())
    }

    /// Check if a key is configured
    pub fn has_key(&self) -> bool {
        !self.initial_key().is_empty()
    }

    /// Validate API configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.key.is_some() && self.initial_key().trim().is_empty() {
            return Err(ValidationError::BlankApiKey);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_key(key: &str) -> ApiConfig {
        ApiConfig {
            key: Some(SecretString::new(key.to_string())),
        }
    }

    #[test]
    fn test_api_config_defaults() {
        let config = ApiConfig::default();
        assert!(!config.has_key());
        assert_eq!(config.initial_key(), "");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_blank_key() {
        assert!(with_key("   ").validate().is_err());
        assert!(with_key("sk-1").validate().is_ok());
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = with_key("sk-live-123");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("sk-live-123"));
        assert!(config.has_key());
        assert_eq!(config.initial_key(), "sk-live-123");
    }
}
