//! StateSubscriber port - Interface for observing store changes.
//!
//! Rendering code and other consumers register a subscriber with the store
//! and are called synchronously after every state transition.

use crate::domain::store::StateChange;

/// Observer of store state transitions.
///
/// Implementations should be:
/// - **Quick** - called on the thread that dispatched the action
/// - **Infallible** - there is no error channel back to the dispatcher
///
/// Subscribers run after the store has released its locks, so they may read
/// the store or dispatch further actions.
///
/// # Example
///
/// ```ignore
/// struct Renderer;
///
/// impl StateSubscriber for Renderer {
///     fn on_change(&self, change: &StateChange) {
///         if change.comparison_changed() {
///             // re-render from change.current
///         }
///     }
///
///     fn name(&self) -> &'static str {
///         "Renderer"
///     }
/// }
/// ```
pub trait StateSubscriber: Send + Sync {
    /// Process one transition.
    fn on_change(&self, change: &StateChange);

    /// Subscriber name for logging.
    fn name(&self) -> &'static str {
        "anonymous"
    }
}

/// Plain closures can subscribe directly.
impl<F> StateSubscriber for F
where
    F: Fn(&StateChange) + Send + Sync,
{
    fn on_change(&self, change: &StateChange) {
        self(change)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::store::{ComparisonState, StoreAction};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    // Compile-time check that trait is object-safe
    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn StateSubscriber) {}

    #[test]
    fn closure_subscriber_is_invoked() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let subscriber = move |_: &StateChange| {
            counter.fetch_add(1, Ordering::SeqCst);
        };

        let change = StateChange {
            action: StoreAction::Reset,
            previous: Arc::new(ComparisonState::new()),
            current: Arc::new(ComparisonState::new()),
        };
        subscriber.on_change(&change);

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(StateSubscriber::name(&subscriber), "anonymous");
    }
}
