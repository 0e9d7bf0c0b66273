//! State subscriber adapters.

mod logging;
mod recording;

pub use logging::LoggingSubscriber;
pub use recording::RecordingSubscriber;
