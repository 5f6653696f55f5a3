//! # Infrastructure Layer
//!
//! Concrete implementations behind the domain's ports:
//! - **Database**: MySQL repositories using SQLx
//! - **Mail**: SMTP delivery via lettre, with a logging development mode

// Re-export core error types for convenience
pub use auction_core::errors::*;

/// Database module - MySQL implementations using SQLx
pub mod database;

/// Mail module - SMTP delivery of verification codes
pub mod mail;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// SMTP transport error
    #[error("Mail transport error: {0}")]
    Mail(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
