//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers and error types that form the vocabulary of the
//! comparison domain.

mod errors;
mod ids;

pub use errors::ValidationError;
pub use ids::{ComparisonId, ItemId, PointId, PreferencesId};
