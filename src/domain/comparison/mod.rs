//! Comparison module - the aggregate being compared and its preferences.
//!
//! - `aggregate` - `Comparison`, `ComparisonItem`, `Point` with copy-on-write updates
//! - `preferences` - `UserPreferences`, `CategoryWeight`, display modes, default preset
//! - `scoring` - weighted scores, ranking, and winner detection

mod aggregate;
mod preferences;
mod scoring;

pub use aggregate::{Comparison, ComparisonItem, Point, PointUpdate};
pub use preferences::{
    create_default_preferences, create_default_preferences_with, CategoryWeight, ColorScheme,
    ScoreDisplay, UserPreferences, ViewMode, DEFAULT_IMPORTANCE, DEFAULT_PREFERENCES_NAME,
};
pub use scoring::{ItemScore, ScoreBoard};
