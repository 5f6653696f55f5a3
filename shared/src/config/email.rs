//! Outbound mail (SMTP) configuration.

use serde::{Deserialize, Serialize};

/// SMTP configuration for the outbound mail collaborator
///
/// When the relay settings are absent the mailer runs in development mode
/// and logs codes instead of sending them.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct EmailConfig {
    /// SMTP relay host
    #[serde(default)]
    pub smtp_host: Option<String>,

    /// SMTP relay port
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,

    /// SMTP username
    #[serde(default)]
    pub smtp_username: Option<String>,

    /// SMTP password
    #[serde(default)]
    pub smtp_password: Option<String>,

    /// Sender address used in the `From` header
    #[serde(default)]
    pub from_address: Option<String>,
}

impl EmailConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            smtp_host: std::env::var("SMTP_HOST").ok(),
            smtp_port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_smtp_port),
            smtp_username: std::env::var("SMTP_USER").ok(),
            smtp_password: std::env::var("SMTP_PASS").ok(),
            from_address: std::env::var("SMTP_FROM").ok(),
        }
    }

    /// Whether enough settings are present to attempt real delivery
    pub fn is_configured(&self) -> bool {
        self.smtp_host.is_some() && self.smtp_username.is_some() && self.from_address.is_some()
    }
}

fn default_smtp_port() -> u16 {
    587
}
