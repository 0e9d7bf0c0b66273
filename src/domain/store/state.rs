//! Store state snapshot and change notification payload.

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use std::sync::Arc;

use super::StoreAction;
use crate::domain::comparison::Comparison;

/// Immutable snapshot of the store.
///
/// Snapshots are shared as `Arc<ComparisonState>`; an update never touches
/// an existing snapshot, it builds a new one that reuses unchanged parts.
/// The API key is never serialized and prints as redacted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonState {
    comparison: Option<Arc<Comparison>>,
    #[serde(skip_serializing)]
    api_key: SecretString,
}

impl ComparisonState {
    /// Empty state: no comparison, empty API key.
    pub fn new() -> Self {
        Self::with_api_key(String::new())
    }

    /// State seeded with an API key and no comparison.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            comparison: None,
            api_key: SecretString::new(api_key.into()),
        }
    }

    pub fn comparison(&self) -> Option<&Arc<Comparison>> {
        self.comparison.as_ref()
    }

    pub fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }

    pub fn has_comparison(&self) -> bool {
        self.comparison.is_some()
    }

    pub(crate) fn replacing_comparison(&self, comparison: Option<Arc<Comparison>>) -> Self {
        Self {
            comparison,
            api_key: self.api_key.clone(),
        }
    }

    pub(crate) fn replacing_api_key(&self, api_key: SecretString) -> Self {
        Self {
            comparison: self.comparison.clone(),
            api_key,
        }
    }
}

impl Default for ComparisonState {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for ComparisonState {
    fn eq(&self, other: &Self) -> bool {
        self.comparison == other.comparison && self.api_key() == other.api_key()
    }
}

/// A state transition delivered to subscribers.
#[derive(Debug, Clone)]
pub struct StateChange {
    pub action: StoreAction,
    pub previous: Arc<ComparisonState>,
    pub current: Arc<ComparisonState>,
}

impl StateChange {
    /// True if the comparison was replaced, updated, or cleared.
    pub fn comparison_changed(&self) -> bool {
        match (self.previous.comparison(), self.current.comparison()) {
            (Some(a), Some(b)) => !Arc::ptr_eq(a, b),
            (None, None) => false,
            _ => true,
        }
    }

    /// True if the API key value differs between the two snapshots.
    pub fn api_key_changed(&self) -> bool {
        self.previous.api_key() != self.current.api_key()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_empty() {
        let state = ComparisonState::new();
        assert!(!state.has_comparison());
        assert_eq!(state.api_key(), "");
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let state = ComparisonState::with_api_key("sk-secret");
        let debug = format!("{:?}", state);
        assert!(!debug.contains("sk-secret"));
        assert!(debug.contains("REDACTED"));
    }

    #[test]
    fn serialized_state_omits_api_key() {
        let state = ComparisonState::with_api_key("sk-secret");
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r#"{"comparison":null}"#);
    }

    #[test]
    fn states_compare_by_key_value() {
        assert_eq!(ComparisonState::with_api_key("a"), ComparisonState::with_api_key("a"));
        assert_ne!(ComparisonState::with_api_key("a"), ComparisonState::with_api_key("b"));
    }

    #[test]
    fn change_debug_output_hides_api_key() {
        let previous = Arc::new(ComparisonState::new());
        let current = Arc::new(previous.replacing_api_key(SecretString::new("sk-secret".to_string())));
        let change = StateChange {
            action: StoreAction::SetApiKey(SecretString::new("sk-secret".to_string())),
            previous,
            current,
        };

        let debug = format!("{:?}", change);
        assert!(!debug.contains("sk-secret"), "key leaked: {debug}");
        assert!(change.api_key_changed());
    }

    #[test]
    fn replacing_comparison_keeps_api_key() {
        let state = ComparisonState::with_api_key("key");
        let next = state.replacing_comparison(Some(Arc::new(Comparison::new("c1"))));
        assert_eq!(next.api_key(), "key");
        assert!(next.has_comparison());
        assert!(!state.has_comparison());
    }

    #[test]
    fn change_detects_comparison_identity() {
        let comparison = Arc::new(Comparison::new("c1"));
        let previous = Arc::new(ComparisonState::new().replacing_comparison(Some(comparison.clone())));
        let current = Arc::new(previous.replacing_api_key(SecretString::new("k".to_string())));

        let change = StateChange {
            action: StoreAction::SetApiKey(SecretString::new("k".to_string())),
            previous,
            current,
        };
        assert!(!change.comparison_changed());
        assert!(change.api_key_changed());
    }
}
