//! Id generator adapters.

mod sequential_generator;
mod uuid_generator;

pub use sequential_generator::SequentialIdGenerator;
pub use uuid_generator::UuidIdGenerator;
