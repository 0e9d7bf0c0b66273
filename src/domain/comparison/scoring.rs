//! Score board - weighted item scores, ranking, and winner detection.

use serde::{Deserialize, Serialize};

use super::{Comparison, ComparisonItem, UserPreferences, DEFAULT_IMPORTANCE};
use crate::domain::foundation::ItemId;

/// Score of one item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemScore {
    pub item_id: ItemId,
    pub score: f64,
    /// Number of points that contributed to the score.
    pub counted_points: usize,
}

/// Scores for every item of a comparison, in item order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBoard {
    scores: Vec<ItemScore>,
    sort_by_score: bool,
    hide_winner: bool,
}

impl ScoreBoard {
    /// Computes scores for `comparison`.
    ///
    /// # Algorithm
    /// For each item: score = Σ(point.weight × importance / 5)
    ///
    /// # Edge Cases
    /// - No preferences: every point counts at its raw weight
    /// - Uncategorised point, or category without a weight entry: factor 1
    /// - Category hidden or not visible: point is skipped
    pub fn compute(comparison: &Comparison) -> Self {
        let preferences = comparison.user_preferences.as_deref();

        let scores = comparison
            .items
            .iter()
            .map(|item| Self::score_item(item, preferences))
            .collect();

        Self {
            scores,
            sort_by_score: preferences.is_some_and(|p| p.sort_by_score),
            hide_winner: preferences.is_some_and(|p| p.hide_winner),
        }
    }

    fn score_item(item: &ComparisonItem, preferences: Option<&UserPreferences>) -> ItemScore {
        let mut score = 0.0;
        let mut counted_points = 0;

        for point in &item.points {
            let factor = match (preferences, point.category.as_deref()) {
                (Some(prefs), Some(category)) => {
                    if !prefs.is_category_shown(category) {
                        continue;
                    }
                    prefs
                        .category_weight(category)
                        .map_or(1.0, |cw| cw.importance / DEFAULT_IMPORTANCE)
                }
                _ => 1.0,
            };
            score += point.weight * factor;
            counted_points += 1;
        }

        ItemScore {
            item_id: item.id.clone(),
            score,
            counted_points,
        }
    }

    /// Scores in item order.
    pub fn scores(&self) -> &[ItemScore] {
        &self.scores
    }

    /// Score of the first item with the given id.
    pub fn score_for(&self, item_id: &ItemId) -> Option<f64> {
        self.scores
            .iter()
            .find(|s| &s.item_id == item_id)
            .map(|s| s.score)
    }

    /// Scores in display order: descending by score when the preferences ask
    /// for it (ties keep item order), item order otherwise.
    pub fn ranked(&self) -> Vec<&ItemScore> {
        let mut ranked: Vec<&ItemScore> = self.scores.iter().collect();
        if self.sort_by_score {
            ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        }
        ranked
    }

    /// The single best-scoring item.
    ///
    /// `None` when there are no items, when the top score is shared, or when
    /// the preferences hide the winner.
    pub fn winner(&self) -> Option<&ItemId> {
        if self.hide_winner {
            return None;
        }

        let best = self
            .scores
            .iter()
            .max_by(|a, b| a.score.total_cmp(&b.score))?;

        let tied = self
            .scores
            .iter()
            .filter(|s| s.score.total_cmp(&best.score).is_eq())
            .count();

        (tied == 1).then_some(&best.item_id)
    }
}
