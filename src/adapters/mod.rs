//! Adapters - Implementations of port interfaces.
//!
//! - `ids` - UUID and sequential id generators
//! - `subscribers` - tracing-backed and recording state subscribers

pub mod ids;
pub mod subscribers;

pub use ids::{SequentialIdGenerator, UuidIdGenerator};
pub use subscribers::{LoggingSubscriber, RecordingSubscriber};
