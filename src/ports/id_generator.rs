//! IdGenerator port - Source of fresh identifiers.

/// Port for generating identifiers for locally created records.
///
/// Implementations must return values that are unique with overwhelming
/// probability across calls within the process lifetime.
pub trait IdGenerator: Send + Sync {
    /// Returns a fresh identifier.
    fn generate_id(&self) -> String;
}
