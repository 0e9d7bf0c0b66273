//! Strongly-typed identifier value objects.
//!
//! Comparison identifiers are opaque strings: records built from API
//! responses carry whatever ids the producer assigned, and locally created
//! records use UUID v4 strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::ValidationError;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps an id as-is, without validation.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Creates an id, returning error if empty.
            pub fn parse(id: impl Into<String>) -> Result<Self, ValidationError> {
                let id = id.into();
                if id.trim().is_empty() {
                    return Err(ValidationError::empty_field($field));
                }
                Ok(Self(id))
            }

            /// Creates a fresh random id.
            pub fn generate() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            /// Returns the inner string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

string_id!(
    /// Unique identifier for a comparison.
    ComparisonId,
    "comparison_id"
);

string_id!(
    /// Identifier of an item within a comparison.
    ItemId,
    "item_id"
);

string_id!(
    /// Identifier of a point within an item.
    PointId,
    "point_id"
);

string_id!(
    /// Identifier of a user preferences bundle.
    PreferencesId,
    "preferences_id"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_keeps_value_verbatim() {
        let id = ItemId::new("a");
        assert_eq!(id.as_str(), "a");
        assert_eq!(id, "a");
    }

    #[test]
    fn parse_rejects_empty_and_blank() {
        assert!(ItemId::parse("").is_err());
        assert!(PointId::parse("   ").is_err());
        assert!(ComparisonId::parse("c1").is_ok());
    }

    #[test]
    fn parse_error_names_the_field() {
        let err = PreferencesId::parse("").unwrap_err();
        assert_eq!(format!("{}", err), "Field 'preferences_id' cannot be empty");
    }

    #[test]
    fn generate_produces_distinct_uuids() {
        let a = PreferencesId::generate();
        let b = PreferencesId::generate();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(a.as_str()).is_ok());
    }

    #[test]
    fn display_shows_inner_value() {
        assert_eq!(format!("{}", ComparisonId::new("c1")), "c1");
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&PointId::new("p-1")).unwrap();
        assert_eq!(json, "\"p-1\"");

        let id: PointId = serde_json::from_str("\"p-2\"").unwrap();
        assert_eq!(id, PointId::new("p-2"));
    }
}
