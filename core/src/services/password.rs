//! Password hashing built on bcrypt.

use crate::errors::{DomainError, DomainResult};

/// Password hashing and verification
///
/// Thin wrapper over bcrypt so the cost factor is injected configuration
/// rather than a constant. Verification always goes through
/// [`bcrypt::verify`]; hashes are never re-derived and compared manually.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Create a hasher with the given bcrypt cost factor
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a raw password
    pub fn hash(&self, password: &str) -> DomainResult<String> {
        bcrypt::hash(password, self.cost).map_err(|e| DomainError::Internal {
            message: format!("Password hashing failed: {}", e),
        })
    }

    /// Verify a candidate password against a stored hash
    pub fn verify(&self, candidate: &str, hash: &str) -> DomainResult<bool> {
        bcrypt::verify(candidate, hash).map_err(|e| DomainError::Internal {
            message: format!("Password verification failed: {}", e),
        })
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}
