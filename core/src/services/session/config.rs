//! Session service configuration.

/// Configuration for [`SessionService`](super::SessionService)
#[derive(Debug, Clone)]
pub struct SessionServiceConfig {
    /// Session time-to-live in days
    pub session_ttl_days: i64,
}

impl Default for SessionServiceConfig {
    fn default() -> Self {
        Self {
            session_ttl_days: 7,
        }
    }
}

impl SessionServiceConfig {
    /// Create a configuration with the given TTL
    pub fn new(session_ttl_days: i64) -> Self {
        Self { session_ttl_days }
    }
}
