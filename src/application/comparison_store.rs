//! ComparisonStore - the observable container holding the current comparison.
//!
//! The store owns the current `Arc<ComparisonState>` snapshot and a list of
//! subscribers. Every operation runs the pure reducer against the current
//! snapshot, swaps the result in, and then notifies subscribers in
//! registration order. Operations whose target is missing leave the snapshot
//! in place and notify nobody.

use secrecy::SecretString;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, trace};

use crate::adapters::{LoggingSubscriber, UuidIdGenerator};
use crate::config::AppConfig;
use crate::domain::comparison::{
    create_default_preferences_with, Comparison, ComparisonItem, PointUpdate, ScoreBoard,
    UserPreferences,
};
use crate::domain::foundation::{ItemId, PointId};
use crate::domain::store::{reduce, ComparisonState, StateChange, StoreAction};
use crate::ports::{IdGenerator, StateSubscriber};

/// Handle returned by [`ComparisonStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Registration {
    id: SubscriptionId,
    subscriber: Arc<dyn StateSubscriber>,
}

/// How comparisons without preferences are completed on `set_comparison`.
#[derive(Debug, Clone)]
enum DefaultPreferences {
    /// Leave the comparison as given.
    Off,
    /// Fill in "Balanced" preferences over these categories, or over the
    /// comparison's own point categories when empty.
    Fill(Vec<String>),
}

/// Observable copy-on-write container for the current comparison.
///
/// The store is `Sync` and may be shared through an `Arc`. Each dispatch
/// swaps its snapshot in atomically, but notifications from dispatches on
/// different threads can interleave. Subscribers that care about swap order
/// follow `StateChange::previous` / `current`, which always chain in the
/// order the snapshots were installed.
///
/// # Example
///
/// ```ignore
/// let store = ComparisonStore::new();
/// store.subscribe(Arc::new(|change: &StateChange| {
///     println!("{} applied", change.action.name());
/// }));
///
/// store.set_comparison(Comparison::new("c1"));
/// store.add_item(ComparisonItem::new("a"));
/// assert_eq!(store.get_state().comparison().unwrap().items.len(), 1);
/// ```
pub struct ComparisonStore {
    state: RwLock<Arc<ComparisonState>>,
    subscribers: RwLock<Vec<Registration>>,
    next_subscription_id: AtomicU64,
    ids: Arc<dyn IdGenerator>,
    default_preferences: DefaultPreferences,
}

impl ComparisonStore {
    /// Creates an empty store: no comparison, empty API key, no subscribers.
    pub fn new() -> Self {
        Self::with_state(ComparisonState::new())
    }

    /// Creates a store starting from `state`.
    pub fn with_state(state: ComparisonState) -> Self {
        Self {
            state: RwLock::new(Arc::new(state)),
            subscribers: RwLock::new(Vec::new()),
            next_subscription_id: AtomicU64::new(1),
            ids: Arc::new(UuidIdGenerator::new()),
            default_preferences: DefaultPreferences::Off,
        }
    }

    /// Creates a store from application configuration.
    ///
    /// Seeds the API key, registers the logging subscriber when
    /// `features.log_state_changes` is set, and enables default preferences
    /// when `features.fill_default_preferences` is set.
    pub fn from_config(config: &AppConfig) -> Self {
        let mut store = Self::with_state(ComparisonState::with_api_key(config.api.initial_key()));

        if config.features.fill_default_preferences {
            store = store.with_default_preferences(config.features.default_categories_list());
        }

        if config.features.log_state_changes {
            store.subscribe(Arc::new(LoggingSubscriber::new()));
        }

        store
    }

    /// Replaces the id generator used for locally created preferences.
    pub fn with_id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    /// Completes comparisons that arrive without preferences.
    ///
    /// With an empty `categories` list the comparison's own point categories
    /// are used.
    pub fn with_default_preferences(mut self, categories: Vec<String>) -> Self {
        self.default_preferences = DefaultPreferences::Fill(categories);
        self
    }

    // === Read access ===

    /// Returns the current snapshot.
    pub fn get_state(&self) -> Arc<ComparisonState> {
        Arc::clone(&self.state.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Returns the current comparison, if any.
    pub fn comparison(&self) -> Option<Arc<Comparison>> {
        self.get_state().comparison().cloned()
    }

    /// Returns the current API key.
    pub fn api_key(&self) -> String {
        self.get_state().api_key().to_string()
    }

    /// Scores for the current comparison, if any.
    pub fn score_board(&self) -> Option<ScoreBoard> {
        self.comparison().map(|c| ScoreBoard::compute(&c))
    }

    /// Builds "Balanced" preferences using this store's id generator.
    pub fn create_default_preferences<S: AsRef<str>>(&self, categories: &[S]) -> UserPreferences {
        create_default_preferences_with(categories, self.ids.as_ref())
    }

    // === Subscriptions ===

    /// Registers a subscriber. Subscribers are notified in registration order.
    pub fn subscribe(&self, subscriber: Arc<dyn StateSubscriber>) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription_id.fetch_add(1, Ordering::SeqCst));
        debug!(subscriber = subscriber.name(), id = id.0, "Subscribing to store");

        self.subscribers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Registration { id, subscriber });
        id
    }

    /// Removes a subscriber. Returns false if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self
            .subscribers
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let before = subscribers.len();
        subscribers.retain(|r| r.id != id);

        let removed = subscribers.len() != before;
        if removed {
            debug!(id = id.0, "Unsubscribed from store");
        }
        removed
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    // === Mutations ===

    /// Applies `action` and notifies subscribers.
    ///
    /// Returns true if a new snapshot was installed.
    pub fn dispatch(&self, action: StoreAction) -> bool {
        let action = self.complete(action);

        let change = {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            let Some(next) = reduce(&state, &action) else {
                trace!(action = action.name(), "Store action left state unchanged");
                return false;
            };

            let current = Arc::new(next);
            let previous = std::mem::replace(&mut *state, Arc::clone(&current));
            StateChange {
                action,
                previous,
                current,
            }
        };

        debug!(action = change.action.name(), "Applied store action");
        self.notify(&change);
        true
    }

    /// Replaces the comparison wholesale.
    pub fn set_comparison(&self, comparison: Comparison) {
        self.dispatch(StoreAction::SetComparison(Arc::new(comparison)));
    }

    /// Replaces the API key. No validation.
    pub fn set_api_key(&self, api_key: impl Into<String>) {
        self.dispatch(StoreAction::SetApiKey(SecretString::new(api_key.into())));
    }

    /// Replaces the comparison's preferences. No-op without a comparison.
    pub fn update_user_preferences(&self, preferences: UserPreferences) {
        self.dispatch(StoreAction::UpdateUserPreferences(Arc::new(preferences)));
    }

    /// Replaces the importance of an existing category weight.
    ///
    /// No-op without a comparison, without preferences, or when no entry has
    /// that category. Never adds an entry.
    pub fn update_category_weight(&self, category: impl Into<String>, importance: f64) {
        self.dispatch(StoreAction::UpdateCategoryWeight {
            category: category.into(),
            importance,
        });
    }

    /// Appends an item. Duplicate ids are not checked.
    pub fn add_item(&self, item: ComparisonItem) {
        self.dispatch(StoreAction::AddItem(Arc::new(item)));
    }

    /// Removes every item with the given id.
    pub fn remove_item(&self, item_id: impl Into<ItemId>) {
        self.dispatch(StoreAction::RemoveItem(item_id.into()));
    }

    /// Updates `text` and/or `weight` of one point.
    pub fn update_point(
        &self,
        item_id: impl Into<ItemId>,
        point_id: impl Into<PointId>,
        updates: PointUpdate,
    ) {
        self.dispatch(StoreAction::UpdatePoint {
            item_id: item_id.into(),
            point_id: point_id.into(),
            updates,
        });
    }

    /// Clears the comparison. The API key is kept.
    pub fn reset(&self) {
        self.dispatch(StoreAction::Reset);
    }

    // === Internals ===

    fn complete(&self, action: StoreAction) -> StoreAction {
        let DefaultPreferences::Fill(configured) = &self.default_preferences else {
            return action;
        };

        match action {
            StoreAction::SetComparison(comparison) if comparison.user_preferences.is_none() => {
                let categories = if configured.is_empty() {
                    comparison.categories()
                } else {
                    configured.clone()
                };
                debug!(
                    comparison_id = %comparison.id,
                    categories = categories.len(),
                    "Filling in default preferences"
                );
                let preferences = Arc::new(self.create_default_preferences(&categories));
                StoreAction::SetComparison(Arc::new(comparison.replacing_preferences(preferences)))
            }
            other => other,
        }
    }

    fn notify(&self, change: &StateChange) {
        // Snapshot the list so subscribers can (un)subscribe or dispatch.
        let subscribers: Vec<Arc<dyn StateSubscriber>> = self
            .subscribers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|r| Arc::clone(&r.subscriber))
            .collect();

        for subscriber in subscribers {
            trace!(subscriber = subscriber.name(), "Notifying subscriber");
            subscriber.on_change(change);
        }
    }
}

impl Default for ComparisonStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ComparisonStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComparisonStore")
            .field("state", &self.get_state())
            .field("subscribers", &self.subscriber_count())
            .field("default_preferences", &self.default_preferences)
            .finish()
    }
}
