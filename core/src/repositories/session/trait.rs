//! Session repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::Session;
use crate::errors::DomainError;

/// Repository trait for Session entity persistence operations
///
/// Sessions are looked up by the SHA-256 digest of the opaque token; the
/// plaintext token is never stored. Unlike verification codes, revoked and
/// expired sessions are physically deleted.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Persist a new session record
    async fn save(&self, session: Session) -> Result<Session, DomainError>;

    /// Find a session by the token digest
    ///
    /// # Returns
    /// * `Ok(Some(Session))` - Session found (possibly expired; the caller
    ///   checks expiry against the current time)
    /// * `Ok(None)` - No session for this digest
    /// * `Err(DomainError)` - Database error occurred
    async fn find_by_token_hash(&self, token_hash: &str)
        -> Result<Option<Session>, DomainError>;

    /// Delete a single session by the token digest
    ///
    /// # Returns
    /// * `Ok(true)` - A session was deleted
    /// * `Ok(false)` - No session for this digest
    async fn delete_by_token_hash(&self, token_hash: &str) -> Result<bool, DomainError>;

    /// Delete every session belonging to an account
    ///
    /// # Returns
    /// * `Ok(count)` - Number of sessions removed
    async fn delete_all_for_account(&self, account_id: Uuid) -> Result<u64, DomainError>;
}
