//! Comparison aggregate and its owned entities.
//!
//! A `Comparison` is never mutated in place once it is part of a snapshot.
//! The `with_*`/`without_*` methods build a new aggregate that shares every
//! untouched item and the preferences bundle with `self` through `Arc`.
//! Methods returning `Option` yield `None` when the target is missing and
//! nothing would change.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::UserPreferences;
use crate::domain::foundation::{ComparisonId, ItemId, PointId};

/// One scoring criterion or comment attached to an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Point {
    pub id: PointId,
    pub text: String,
    pub weight: f64,
    /// Category this point counts toward when scoring.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Point {
    /// Creates an uncategorised point.
    pub fn new(id: impl Into<PointId>, text: impl Into<String>, weight: f64) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            weight,
            category: None,
        }
    }

    /// Assigns the point to a category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Returns a copy with the fields present in `updates` replaced.
    pub fn apply(&self, updates: &PointUpdate) -> Self {
        Self {
            id: self.id.clone(),
            text: updates.text.clone().unwrap_or_else(|| self.text.clone()),
            weight: updates.weight.unwrap_or(self.weight),
            category: self.category.clone(),
        }
    }
}

/// Partial update for a point. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl PointUpdate {
    /// Update that only replaces the text.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            weight: None,
        }
    }

    /// Update that only replaces the weight.
    pub fn weight(weight: f64) -> Self {
        Self {
            text: None,
            weight: Some(weight),
        }
    }

    /// Adds a weight replacement to this update.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Returns true if the update carries no fields.
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.weight.is_none()
    }
}

/// One option under comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonItem {
    pub id: ItemId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub points: Vec<Point>,
}

impl ComparisonItem {
    /// Creates an item with no points.
    pub fn new(id: impl Into<ItemId>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            points: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_point(mut self, point: Point) -> Self {
        self.points.push(point);
        self
    }

    /// Returns the first point with the given id.
    pub fn point(&self, point_id: &PointId) -> Option<&Point> {
        self.points.iter().find(|p| &p.id == point_id)
    }

    /// Returns a copy with every point matching `point_id` updated, or
    /// `None` if no point matches.
    fn with_point_update(&self, point_id: &PointId, updates: &PointUpdate) -> Option<Self> {
        if !self.points.iter().any(|p| &p.id == point_id) {
            return None;
        }

        let points = self
            .points
            .iter()
            .map(|p| if &p.id == point_id { p.apply(updates) } else { p.clone() })
            .collect();

        Some(Self {
            id: self.id.clone(),
            name: self.name.clone(),
            points,
        })
    }
}

/// Root aggregate of items being compared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    pub id: ComparisonId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub items: Vec<Arc<ComparisonItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_preferences: Option<Arc<UserPreferences>>,
}

impl Comparison {
    /// Creates an empty comparison without preferences.
    pub fn new(id: impl Into<ComparisonId>) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            items: Vec::new(),
            user_preferences: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_item(mut self, item: ComparisonItem) -> Self {
        self.items.push(Arc::new(item));
        self
    }

    pub fn with_preferences(mut self, preferences: UserPreferences) -> Self {
        self.user_preferences = Some(Arc::new(preferences));
        self
    }

    /// Returns the first item with the given id.
    pub fn item(&self, item_id: &ItemId) -> Option<&ComparisonItem> {
        self.items
            .iter()
            .map(Arc::as_ref)
            .find(|item| &item.id == item_id)
    }

    /// Item ids in display order, duplicates included.
    pub fn item_ids(&self) -> Vec<&ItemId> {
        self.items.iter().map(|item| &item.id).collect()
    }

    /// Distinct point categories in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for point in self.items.iter().flat_map(|item| item.points.iter()) {
            if let Some(category) = &point.category {
                if !categories.contains(category) {
                    categories.push(category.clone());
                }
            }
        }
        categories
    }

    /// Copy with the preferences bundle replaced.
    pub fn replacing_preferences(&self, preferences: Arc<UserPreferences>) -> Self {
        Self {
            user_preferences: Some(preferences),
            ..self.clone()
        }
    }

    /// Copy with `item` appended. Duplicate ids are kept.
    pub fn appending_item(&self, item: Arc<ComparisonItem>) -> Self {
        let mut items = self.items.clone();
        items.push(item);
        Self {
            items,
            ..self.clone_without_items()
        }
    }

    /// Copy with every item matching `item_id` removed.
    pub fn without_item(&self, item_id: &ItemId) -> Option<Self> {
        if !self.items.iter().any(|item| &item.id == item_id) {
            return None;
        }

        let items = self
            .items
            .iter()
            .filter(|item| &item.id != item_id)
            .cloned()
            .collect();

        Some(Self {
            items,
            ..self.clone_without_items()
        })
    }

    /// Copy with the matching point updated inside every item matching
    /// `item_id`. Items that do not match keep their `Arc`.
    pub fn with_point_update(
        &self,
        item_id: &ItemId,
        point_id: &PointId,
        updates: &PointUpdate,
    ) -> Option<Self> {
        if updates.is_empty() {
            return None;
        }

        let mut changed = false;
        let items = self
            .items
            .iter()
            .map(|item| {
                if &item.id != item_id {
                    return Arc::clone(item);
                }
                match item.with_point_update(point_id, updates) {
                    Some(updated) => {
                        changed = true;
                        Arc::new(updated)
                    }
                    None => Arc::clone(item),
                }
            })
            .collect();

        if !changed {
            return None;
        }

        Some(Self {
            items,
            ..self.clone_without_items()
        })
    }

    /// Copy with the importance of `category` replaced. `None` if there are
    /// no preferences or no weight entry for the category.
    pub fn with_category_importance(&self, category: &str, importance: f64) -> Option<Self> {
        let preferences = self.user_preferences.as_ref()?;
        let updated = preferences.with_category_importance(category, importance)?;
        Some(self.replacing_preferences(Arc::new(updated)))
    }

    // Item vectors can be long; avoid cloning one that is about to be replaced.
    fn clone_without_items(&self) -> Self {
        Self {
            id: self.id.clone(),
            title: self.title.clone(),
            items: Vec::new(),
            user_preferences: self.user_preferences.clone(),
        }
    }
}
