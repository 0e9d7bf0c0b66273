//! Store actions and the pure reducer that applies them.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::ComparisonState;
use crate::domain::comparison::{Comparison, ComparisonItem, PointUpdate, UserPreferences};
use crate::domain::foundation::{ItemId, PointId};

/// One mutation request against the store.
///
/// `SetApiKey` prints as redacted and refuses to serialize.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum StoreAction {
    SetComparison(Arc<Comparison>),
    #[serde(skip_serializing)]
    SetApiKey(SecretString),
    UpdateUserPreferences(Arc<UserPreferences>),
    #[serde(rename_all = "camelCase")]
    UpdateCategoryWeight { category: String, importance: f64 },
    AddItem(Arc<ComparisonItem>),
    RemoveItem(ItemId),
    #[serde(rename_all = "camelCase")]
    UpdatePoint {
        item_id: ItemId,
        point_id: PointId,
        updates: PointUpdate,
    },
    Reset,
}

impl StoreAction {
    /// Stable action name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            StoreAction::SetComparison(_) => "set_comparison",
            StoreAction::SetApiKey(_) => "set_api_key",
            StoreAction::UpdateUserPreferences(_) => "update_user_preferences",
            StoreAction::UpdateCategoryWeight { .. } => "update_category_weight",
            StoreAction::AddItem(_) => "add_item",
            StoreAction::RemoveItem(_) => "remove_item",
            StoreAction::UpdatePoint { .. } => "update_point",
            StoreAction::Reset => "reset",
        }
    }
}

/// Applies `action` to `state`.
///
/// Returns `None` when the action leaves the state unchanged: the comparison
/// (or its preferences) is absent, or no item, point, or category matches.
/// Callers keep the previous snapshot in that case.
pub fn reduce(state: &ComparisonState, action: &StoreAction) -> Option<ComparisonState> {
    match action {
        StoreAction::SetComparison(comparison) => {
            Some(state.replacing_comparison(Some(Arc::clone(comparison))))
        }
        StoreAction::SetApiKey(api_key) => Some(state.replacing_api_key(api_key.clone())),
        StoreAction::UpdateUserPreferences(preferences) => {
            let comparison = state.comparison()?;
            let updated = comparison.replacing_preferences(Arc::clone(preferences));
            Some(state.replacing_comparison(Some(Arc::new(updated))))
        }
        StoreAction::UpdateCategoryWeight {
            category,
            importance,
        } => {
            let updated = state
                .comparison()?
                .with_category_importance(category, *importance)?;
            Some(state.replacing_comparison(Some(Arc::new(updated))))
        }
        StoreAction::AddItem(item) => {
            let updated = state.comparison()?.appending_item(Arc::clone(item));
            Some(state.replacing_comparison(Some(Arc::new(updated))))
        }
        StoreAction::RemoveItem(item_id) => {
            let updated = state.comparison()?.without_item(item_id)?;
            Some(state.replacing_comparison(Some(Arc::new(updated))))
        }
        StoreAction::UpdatePoint {
            item_id,
            point_id,
            updates,
        } => {
            let updated = state
                .comparison()?
                .with_point_update(item_id, point_id, updates)?;
            Some(state.replacing_comparison(Some(Arc::new(updated))))
        }
        StoreAction::Reset => Some(state.replacing_comparison(None)),
    }
}
