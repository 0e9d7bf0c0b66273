//! Store module - immutable snapshots and the pure reducer over them.

mod action;
mod state;

pub use action::{reduce, StoreAction};
pub use state::{ComparisonState, StateChange};
