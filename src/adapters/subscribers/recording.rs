//! Recording subscriber for tests.
//!
//! Captures every transition it sees so tests can assert on what the store
//! published and in which order.

use std::sync::{PoisonError, RwLock};

use crate::domain::store::StateChange;
use crate::ports::StateSubscriber;

/// Subscriber that stores every change it receives.
///
/// # Example
///
/// ```ignore
/// let recorder = Arc::new(RecordingSubscriber::new());
/// store.subscribe(recorder.clone());
///
/// store.reset();
///
/// assert_eq!(recorder.change_count(), 1);
/// assert!(recorder.has_change("reset"));
/// ```
#[derive(Debug, Default)]
pub struct RecordingSubscriber {
    changes: RwLock<Vec<StateChange>>,
}

impl RecordingSubscriber {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all recorded changes in delivery order.
    pub fn changes(&self) -> Vec<StateChange> {
        self.changes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns changes produced by the named action.
    pub fn changes_of(&self, action: &str) -> Vec<StateChange> {
        self.changes()
            .into_iter()
            .filter(|c| c.action.name() == action)
            .collect()
    }

    /// Names of the recorded actions in delivery order.
    pub fn action_names(&self) -> Vec<&'static str> {
        self.changes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|c| c.action.name())
            .collect()
    }

    pub fn change_count(&self) -> usize {
        self.changes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Checks if the named action produced a change.
    pub fn has_change(&self, action: &str) -> bool {
        self.changes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .any(|c| c.action.name() == action)
    }

    /// Clears recorded changes (for test isolation).
    pub fn clear(&self) {
        self.changes
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl StateSubscriber for RecordingSubscriber {
    fn on_change(&self, change: &StateChange) {
        self.changes
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(change.clone());
    }

    fn name(&self) -> &'static str {
        "RecordingSubscriber"
    }
}
