//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `COMPARISON_STORE` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use comparison_store::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Log filter: {}", config.telemetry.level);
//! ```

mod api;
mod error;
mod features;
mod telemetry;

pub use api::ApiConfig;
pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use telemetry::TelemetryConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable
/// configuration. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Credential seeded into the store
    #[serde(default)]
    pub api: ApiConfig,

    /// Tracing output
    #[serde(default)]
    pub telemetry: TelemetryConfig,

    /// Feature flags
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `COMPARISON_STORE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `COMPARISON_STORE__API__KEY=sk-...` -> `api.key = "sk-..."`
    /// - `COMPARISON_STORE__TELEMETRY__JSON=true` -> `telemetry.json = true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("COMPARISON_STORE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.api.validate()?;
        self.telemetry.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "COMPARISON_STORE__API__KEY",
        "COMPARISON_STORE__TELEMETRY__LEVEL",
        "COMPARISON_STORE__TELEMETRY__JSON",
        "COMPARISON_STORE__FEATURES__LOG_STATE_CHANGES",
        "COMPARISON_STORE__FEATURES__FILL_DEFAULT_PREFERENCES",
        "COMPARISON_STORE__FEATURES__DEFAULT_CATEGORIES",
    ];

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert!(!config.api.has_key());
        assert_eq!(config.telemetry.level, "info,comparison_store=debug");
        assert!(config.features.log_state_changes);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("COMPARISON_STORE__API__KEY", "sk-test");
        env::set_var("COMPARISON_STORE__TELEMETRY__JSON", "true");
        env::set_var("COMPARISON_STORE__FEATURES__FILL_DEFAULT_PREFERENCES", "true");
        env::set_var("COMPARISON_STORE__FEATURES__DEFAULT_CATEGORIES", "quality,price");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.api.initial_key(), "sk-test");
        assert!(config.telemetry.json);
        assert!(config.features.fill_default_preferences);
        assert_eq!(
            config.features.default_categories_list(),
            vec!["quality", "price"]
        );
    }

    #[test]
    fn test_validate_rejects_blank_key() {
        let config = AppConfig {
            api: ApiConfig {
                key: Some(secrecy::SecretString::new("   ".to_string())),
            },
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::BlankApiKey)
        ));
    }

    #[test]
    fn test_disable_state_logging() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("COMPARISON_STORE__FEATURES__LOG_STATE_CHANGES", "false");
        let result = AppConfig::load();
        clear_env();

        assert!(!result.unwrap().features.log_state_changes);
    }
}
