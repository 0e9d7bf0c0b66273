//! User preferences - display and scoring configuration for a comparison.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{PreferencesId, ValidationError};
use crate::ports::IdGenerator;

/// Importance assigned to a category when nothing else is known.
pub const DEFAULT_IMPORTANCE: f64 = 5.0;

/// Name of the preferences bundle produced by [`create_default_preferences`].
pub const DEFAULT_PREFERENCES_NAME: &str = "Balanced";

/// Importance score for a named category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryWeight {
    pub category: String,
    #[serde(default = "default_importance")]
    pub importance: f64,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

impl CategoryWeight {
    /// Creates a visible weight with the default importance.
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            importance: DEFAULT_IMPORTANCE,
            visible: true,
        }
    }
}

fn default_importance() -> f64 {
    DEFAULT_IMPORTANCE
}

fn default_visible() -> bool {
    true
}

macro_rules! display_enum {
    (
        $(#[$meta:meta])* $name:ident, $field:literal, default = $default:ident {
            $($variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $label)] $variant),+
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl $name {
            /// Returns the wire label.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($label => Ok($name::$variant),)+
                    other => Err(ValidationError::invalid_format(
                        $field,
                        format!("unknown value '{}'", other),
                    )),
                }
            }
        }
    };
}

display_enum!(
    /// How items are laid out.
    ViewMode, "view_mode", default = Standard {
        Standard => "standard",
        Compact => "compact",
        Detailed => "detailed",
    }
);

display_enum!(
    /// How scores are rendered.
    ScoreDisplay, "score_display", default = Numeric {
        Numeric => "numeric",
        Percentage => "percentage",
        Stars => "stars",
    }
);

display_enum!(
    /// Palette used when rendering the comparison.
    ColorScheme, "color_scheme", default = Default {
        Default => "default",
        HighContrast => "high-contrast",
        Colorblind => "colorblind",
    }
);

/// A named bundle of display and scoring configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    pub id: PreferencesId,
    pub name: String,
    #[serde(default)]
    pub category_weights: Vec<CategoryWeight>,
    #[serde(default)]
    pub view_mode: ViewMode,
    #[serde(default)]
    pub score_display: ScoreDisplay,
    #[serde(default = "default_visible")]
    pub show_scores: bool,
    #[serde(default)]
    pub sort_by_score: bool,
    #[serde(default)]
    pub hide_categories: BTreeSet<String>,
    #[serde(default)]
    pub color_scheme: ColorScheme,
    #[serde(default)]
    pub hide_winner: bool,
}

impl UserPreferences {
    /// Builds the "Balanced" preset over `categories`, in input order.
    pub fn balanced<S: AsRef<str>>(id: PreferencesId, categories: &[S]) -> Self {
        Self {
            id,
            name: DEFAULT_PREFERENCES_NAME.to_string(),
            category_weights: categories
                .iter()
                .map(|c| CategoryWeight::new(c.as_ref()))
                .collect(),
            view_mode: ViewMode::default(),
            score_display: ScoreDisplay::default(),
            show_scores: true,
            sort_by_score: false,
            hide_categories: BTreeSet::new(),
            color_scheme: ColorScheme::default(),
            hide_winner: false,
        }
    }

    /// Returns the weight entry for `category`, if any.
    pub fn category_weight(&self, category: &str) -> Option<&CategoryWeight> {
        self.category_weights.iter().find(|cw| cw.category == category)
    }

    /// True if points in `category` should count and be shown.
    pub fn is_category_shown(&self, category: &str) -> bool {
        if self.hide_categories.contains(category) {
            return false;
        }
        self.category_weight(category).map_or(true, |cw| cw.visible)
    }

    /// Copy with the importance of every entry for `category` replaced.
    /// `None` if no entry matches.
    pub fn with_category_importance(&self, category: &str, importance: f64) -> Option<Self> {
        self.category_weight(category)?;

        let category_weights = self
            .category_weights
            .iter()
            .map(|cw| {
                if cw.category == category {
                    CategoryWeight {
                        importance,
                        ..cw.clone()
                    }
                } else {
                    cw.clone()
                }
            })
            .collect();

        Some(Self {
            category_weights,
            ..self.clone()
        })
    }
}

/// Creates the default "Balanced" preferences with a fresh random id.
pub fn create_default_preferences<S: AsRef<str>>(categories: &[S]) -> UserPreferences {
    UserPreferences::balanced(PreferencesId::generate(), categories)
}

/// Like [`create_default_preferences`], drawing the id from `ids`.
pub fn create_default_preferences_with<S: AsRef<str>>(
    categories: &[S],
    ids: &dyn IdGenerator,
) -> UserPreferences {
    UserPreferences::balanced(PreferencesId::new(ids.generate_id()), categories)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::SequentialIdGenerator;

    #[test]
    fn default_preferences_match_balanced_preset() {
        let prefs = create_default_preferences(&["quality", "price"]);

        assert_eq!(prefs.name, "Balanced");
        assert_eq!(prefs.category_weights.len(), 2);
        assert_eq!(prefs.category_weights[0].category, "quality");
        assert_eq!(prefs.category_weights[1].category, "price");
        assert!(prefs
            .category_weights
            .iter()
            .all(|cw| cw.importance == 5.0 && cw.visible));
        assert_eq!(prefs.view_mode, ViewMode::Standard);
        assert_eq!(prefs.score_display, ScoreDisplay::Numeric);
        assert!(prefs.show_scores);
        assert!(!prefs.sort_by_score);
        assert!(prefs.hide_categories.is_empty());
        assert_eq!(prefs.color_scheme, ColorScheme::Default);
        assert!(!prefs.hide_winner);
    }

    #[test]
    fn default_preferences_get_fresh_ids() {
        let a = create_default_preferences(&["quality"]);
        let b = create_default_preferences(&["quality"]);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn default_preferences_accept_empty_category_list() {
        let prefs = create_default_preferences::<&str>(&[]);
        assert!(prefs.category_weights.is_empty());
    }

    #[test]
    fn default_preferences_with_uses_injected_generator() {
        let ids = SequentialIdGenerator::with_prefix("prefs");
        let prefs = create_default_preferences_with(&["a"], &ids);
        assert_eq!(prefs.id, PreferencesId::new("prefs-1"));
    }

    #[test]
    fn with_category_importance_leaves_other_entries() {
        let prefs = create_default_preferences(&["quality", "price"]);
        let updated = prefs.with_category_importance("price", 8.0).unwrap();

        assert_eq!(updated.category_weight("price").unwrap().importance, 8.0);
        assert_eq!(updated.category_weight("quality").unwrap().importance, 5.0);
        assert_eq!(updated.id, prefs.id);
    }

    #[test]
    fn with_category_importance_never_adds_entries() {
        let prefs = create_default_preferences(&["quality"]);
        assert!(prefs.with_category_importance("speed", 8.0).is_none());
    }

    #[test]
    fn hidden_or_invisible_categories_are_not_shown() {
        let mut prefs = create_default_preferences(&["quality", "price"]);
        prefs.hide_categories.insert("price".to_string());
        prefs.category_weights[0].visible = false;

        assert!(!prefs.is_category_shown("quality"));
        assert!(!prefs.is_category_shown("price"));
        assert!(prefs.is_category_shown("unlisted"));
    }

    #[test]
    fn display_enums_parse_their_labels() {
        assert_eq!("compact".parse::<ViewMode>().unwrap(), ViewMode::Compact);
        assert_eq!("stars".parse::<ScoreDisplay>().unwrap(), ScoreDisplay::Stars);
        assert_eq!(
            "high-contrast".parse::<ColorScheme>().unwrap(),
            ColorScheme::HighContrast
        );
        assert!("grid".parse::<ViewMode>().is_err());
    }

    #[test]
    fn serializes_with_camel_case_and_labels() {
        let prefs = UserPreferences::balanced(PreferencesId::new("p1"), &["quality"]);
        let json = serde_json::to_value(&prefs).unwrap();

        assert_eq!(json["viewMode"], "standard");
        assert_eq!(json["scoreDisplay"], "numeric");
        assert_eq!(json["colorScheme"], "default");
        assert_eq!(json["showScores"], true);
        assert_eq!(json["hideCategories"], serde_json::json!([]));
        assert_eq!(json["categoryWeights"][0]["importance"], 5.0);
    }

    #[test]
    fn category_weight_fields_default_when_missing() {
        let cw: CategoryWeight = serde_json::from_str(r#"{"category": "price"}"#).unwrap();
        assert_eq!(cw.importance, 5.0);
        assert!(cw.visible);
    }
}
