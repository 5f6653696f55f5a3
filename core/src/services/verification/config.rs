//! Verification code service configuration.

/// Configuration for [`CodeService`](super::CodeService)
#[derive(Debug, Clone)]
pub struct CodeServiceConfig {
    /// Code time-to-live in minutes
    pub code_ttl_minutes: i64,
}

impl Default for CodeServiceConfig {
    fn default() -> Self {
        Self {
            code_ttl_minutes: 60,
        }
    }
}

impl CodeServiceConfig {
    /// Create a configuration with the given TTL
    pub fn new(code_ttl_minutes: i64) -> Self {
        Self { code_ttl_minutes }
    }
}
