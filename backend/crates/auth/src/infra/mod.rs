//! Infrastructure Layer
//!
//! Database implementations and external service integrations.

pub mod log_notifier;
pub mod memory;
pub mod postgres;

pub use log_notifier::LogResetNotifier;
pub use memory::InMemoryAuthRepository;
pub use postgres::PgAuthRepository;
