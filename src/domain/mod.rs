//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, errors)
//! - `comparison` - Comparison aggregate, preferences, and scoring
//! - `store` - State snapshots, actions, and the reducer

pub mod comparison;
pub mod foundation;
pub mod store;
