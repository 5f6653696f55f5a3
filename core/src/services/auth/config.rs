//! Authentication gateway configuration.

/// Configuration for [`AuthService`](super::AuthService)
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// bcrypt cost factor for password hashing
    pub bcrypt_cost: u32,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self { bcrypt_cost: 10 }
    }
}

impl AuthServiceConfig {
    /// Set the bcrypt cost factor
    pub fn with_bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = cost;
        self
    }
}
