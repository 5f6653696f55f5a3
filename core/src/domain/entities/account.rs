//! Account entity representing a registered identity keyed by email.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account entity representing a registered identity
///
/// The email is stored in normalized form (trimmed, lower-cased); at most
/// one account exists per normalized email. An unverified account may be
/// overwritten in place by a repeat registration; a verified account never
/// leaves the verified state and blocks new registrations for its email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier for the account
    pub id: Uuid,

    /// Normalized email address (trimmed, lower-cased)
    pub email: String,

    /// bcrypt hash of the password
    pub password_hash: String,

    /// Optional display name
    pub name: Option<String>,

    /// Whether the email address has been verified
    pub is_verified: bool,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the account was last updated
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Creates a new unverified account
    ///
    /// The caller is responsible for normalizing the email and hashing the
    /// password before constructing the entity.
    pub fn new(email: String, password_hash: String, name: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            password_hash,
            name,
            is_verified: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Marks the account as verified
    ///
    /// Idempotent: verifying an already verified account is a no-op apart
    /// from the updated timestamp.
    pub fn verify(&mut self) {
        self.is_verified = true;
        self.updated_at = Utc::now();
    }

    /// Replaces the credentials of a still-unverified account
    ///
    /// Used when the same email registers again before verifying: the
    /// password hash and display name are overwritten in place while the
    /// account id and creation timestamp are preserved.
    pub fn replace_credentials(&mut self, password_hash: String, name: Option<String>) {
        self.password_hash = password_hash;
        self.name = name;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_account_is_unverified() {
        let account = Account::new(
            "ann@example.com".to_string(),
            "$2b$10$hash".to_string(),
            Some("Ann".to_string()),
        );

        assert_eq!(account.email, "ann@example.com");
        assert_eq!(account.name.as_deref(), Some("Ann"));
        assert!(!account.is_verified);
        assert_eq!(account.created_at, account.updated_at);
    }

    #[test]
    fn test_verify_is_idempotent() {
        let mut account = Account::new("a@x.com".to_string(), "hash".to_string(), None);

        account.verify();
        assert!(account.is_verified);

        account.verify();
        assert!(account.is_verified);
    }

    #[test]
    fn test_replace_credentials_keeps_identity() {
        let mut account = Account::new(
            "b@x.com".to_string(),
            "old-hash".to_string(),
            Some("Old".to_string()),
        );
        let id = account.id;
        let created_at = account.created_at;

        account.replace_credentials("new-hash".to_string(), Some("New".to_string()));

        assert_eq!(account.id, id);
        assert_eq!(account.created_at, created_at);
        assert_eq!(account.password_hash, "new-hash");
        assert_eq!(account.name.as_deref(), Some("New"));
    }
}
