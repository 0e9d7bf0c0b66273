//! UUID-backed id generator.

use uuid::Uuid;

use crate::ports::IdGenerator;

/// Generates UUID v4 strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl UuidIdGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator for UuidIdGenerator {
    fn generate_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn generates_parseable_uuids() {
        let id = UuidIdGenerator::new().generate_id();
        assert!(Uuid::parse_str(&id).is_ok());
    }

    #[test]
    fn generated_ids_do_not_repeat() {
        let generator = UuidIdGenerator::new();
        let ids: HashSet<String> = (0..1000).map(|_| generator.generate_id()).collect();
        assert_eq!(ids.len(), 1000);
    }
}
