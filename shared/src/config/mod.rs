//! Application configuration
//!
//! Every tunable the business logic depends on (TTLs, hashing cost, SMTP
//! settings) lives in an explicit config struct constructed once at startup.
//! Business code never reads the process environment directly.

mod auth;
mod database;
mod email;
mod server;

pub use auth::AuthConfig;
pub use database::DatabaseConfig;
pub use email::EmailConfig;
pub use server::ServerConfig;

use serde::{Deserialize, Serialize};

/// Complete application configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Database connection settings
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Authentication settings (TTLs, hashing cost)
    #[serde(default)]
    pub auth: AuthConfig,

    /// Outbound mail settings
    #[serde(default)]
    pub email: EmailConfig,
}

impl AppConfig {
    /// Load the full configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            auth: AuthConfig::from_env(),
            email: EmailConfig::from_env(),
        }
    }
}
