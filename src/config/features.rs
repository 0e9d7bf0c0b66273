//! Feature flags configuration

use serde::Deserialize;

/// Feature flags for enabling/disabling store behavior
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Register the logging subscriber when the store is created
    #[serde(default = "default_log_state_changes")]
    pub log_state_changes: bool,

    /// Install "Balanced" preferences on comparisons that arrive without any
    #[serde(default)]
    pub fill_default_preferences: bool,

    /// Categories for filled-in preferences (comma-separated)
    pub default_categories: Option<String>,
}

impl FeatureFlags {
    /// Get default categories as a vector
    pub fn default_categories_list(&self) -> Vec<String> {
        self.default_categories
            .as_ref()
            .map(|s| {
                s.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            log_state_changes: default_log_state_changes(),
            fill_default_preferences: false,
            default_categories: None,
        }
    }
}

fn default_log_state_changes() -> bool {
    true
}
