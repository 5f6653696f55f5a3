//! Authentication configuration: code and session TTLs, password hashing cost.

use serde::{Deserialize, Serialize};

/// Authentication configuration
///
/// TTLs are deliberately configuration rather than constants so that expiry
/// behavior stays testable (tests use zero-minute TTLs to exercise the
/// expired paths without sleeping for real durations).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Verification code time-to-live in minutes
    pub code_ttl_minutes: i64,

    /// Session time-to-live in days
    pub session_ttl_days: i64,

    /// bcrypt cost factor for password hashing
    pub bcrypt_cost: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            code_ttl_minutes: 60,
            session_ttl_days: 7,
            bcrypt_cost: 10,
        }
    }
}

impl AuthConfig {
    /// Create from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            code_ttl_minutes: std::env::var("VERIFICATION_CODE_TTL_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.code_ttl_minutes),
            session_ttl_days: std::env::var("SESSION_TTL_DAYS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.session_ttl_days),
            bcrypt_cost: std::env::var("BCRYPT_COST")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.bcrypt_cost),
        }
    }

    /// Set the verification code TTL in minutes
    pub fn with_code_ttl_minutes(mut self, minutes: i64) -> Self {
        self.code_ttl_minutes = minutes;
        self
    }

    /// Set the session TTL in days
    pub fn with_session_ttl_days(mut self, days: i64) -> Self {
        self.session_ttl_days = days;
        self
    }

    /// Set the bcrypt cost factor
    pub fn with_bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = cost;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_config_default() {
        let config = AuthConfig::default();
        assert_eq!(config.code_ttl_minutes, 60);
        assert_eq!(config.session_ttl_days, 7);
        assert_eq!(config.bcrypt_cost, 10);
    }

    #[test]
    fn test_auth_config_builder() {
        let config = AuthConfig::default()
            .with_code_ttl_minutes(15)
            .with_session_ttl_days(30)
            .with_bcrypt_cost(4);

        assert_eq!(config.code_ttl_minutes, 15);
        assert_eq!(config.session_ttl_days, 30);
        assert_eq!(config.bcrypt_cost, 4);
    }
}
