//! Comparison Store - observable state for weighted item comparisons
//!
//! This crate holds the comparison a user is working on (items with weighted
//! points, under category preferences) and applies copy-on-write updates to
//! it, notifying subscribers after each change.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;

pub use application::{ComparisonStore, SubscriptionId};
pub use domain::comparison::{
    create_default_preferences, CategoryWeight, Comparison, ComparisonItem, Point, PointUpdate,
    ScoreBoard, UserPreferences,
};
pub use domain::store::{ComparisonState, StateChange, StoreAction};
