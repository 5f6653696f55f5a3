//! Database module - MySQL implementations using SQLx
//!
//! Provides the connection pool and the repository implementations behind
//! the domain's persistence traits.

pub mod connection;
pub mod mysql;

// Re-export commonly used types
pub use connection::DatabasePool;
pub use mysql::{MySqlAccountRepository, MySqlSessionRepository, MySqlVerificationCodeRepository};
