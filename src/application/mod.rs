//! Application layer - the store that coordinates domain operations and ports.
//!
//! `ComparisonStore` applies actions through the domain reducer, keeps the
//! current snapshot, and publishes transitions to `StateSubscriber`s.

mod comparison_store;

pub use comparison_store::{ComparisonStore, SubscriptionId};
