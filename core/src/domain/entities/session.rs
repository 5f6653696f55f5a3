//! Session entity: an opaque bearer credential bound to one account.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Session entity
///
/// Only the SHA-256 hash of the opaque token is stored; the plaintext token
/// leaves the service exactly once, in the issuance response. A session
/// authenticates exactly one account until it expires or is revoked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Unique identifier for the session row
    pub id: Uuid,

    /// Account this session authenticates
    pub account_id: Uuid,

    /// SHA-256 hex digest of the opaque token
    pub token_hash: String,

    /// Timestamp when the session was issued
    pub created_at: DateTime<Utc>,

    /// Timestamp when the session expires
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Creates a new session record
    ///
    /// # Arguments
    ///
    /// * `account_id` - The account the session authenticates
    /// * `token_hash` - SHA-256 hex digest of the issued token
    /// * `ttl_days` - Number of days until the session expires
    pub fn new(account_id: Uuid, token_hash: String, ttl_days: i64) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            account_id,
            token_hash,
            created_at: now,
            expires_at: now + Duration::days(ttl_days),
        }
    }

    /// Checks if the session has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let account_id = Uuid::new_v4();
        let session = Session::new(account_id, "hash".to_string(), 7);

        assert_eq!(session.account_id, account_id);
        assert!(!session.is_expired());
        assert_eq!(
            session.expires_at,
            session.created_at + Duration::days(7)
        );
    }

    #[test]
    fn test_zero_ttl_session_expires() {
        let session = Session::new(Uuid::new_v4(), "hash".to_string(), 0);
        std::thread::sleep(std::time::Duration::from_millis(10));

        assert!(session.is_expired());
    }
}
