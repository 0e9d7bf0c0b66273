//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `IdGenerator` - Fresh identifiers for locally created records
//! - `StateSubscriber` - Observers notified of store transitions

mod id_generator;
mod state_subscriber;

pub use id_generator::IdGenerator;
pub use state_subscriber::StateSubscriber;
