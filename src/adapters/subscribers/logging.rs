//! Subscriber that reports every state transition through `tracing`.

use tracing::info;

use crate::domain::store::StateChange;
use crate::ports::StateSubscriber;

/// Logs each transition at `info` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingSubscriber;

impl LoggingSubscriber {
    pub fn new() -> Self {
        Self
    }
}

impl StateSubscriber for LoggingSubscriber {
    fn on_change(&self, change: &StateChange) {
        let current = change.current.comparison();
        info!(
            action = change.action.name(),
            comparison_id = current.map(|c| c.id.as_str()).unwrap_or(""),
            item_count = current.map_or(0, |c| c.items.len()),
            comparison_changed = change.comparison_changed(),
            api_key_changed = change.api_key_changed(),
            "Comparison state changed"
        );
    }

    fn name(&self) -> &'static str {
        "LoggingSubscriber"
    }
}
