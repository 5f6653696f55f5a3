//! Session service: issues, resolves, and revokes opaque bearer tokens.

use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::Session;
use crate::errors::DomainResult;
use crate::repositories::SessionRepository;

use super::config::SessionServiceConfig;

/// Number of random bytes in an opaque session token (256 bits of entropy)
const TOKEN_BYTES: usize = 32;

/// A freshly issued session: the plaintext token plus the stored record
#[derive(Debug, Clone)]
pub struct IssuedSession {
    /// The opaque token handed to the client; not recoverable from the store
    pub token: String,

    /// The persisted session record
    pub session: Session,
}

/// Service managing opaque session tokens
///
/// Tokens are 32 bytes from the OS CSPRNG, hex-encoded, and stored only as
/// SHA-256 digests. Because every token is backed by a store record,
/// revocation (single and account-wide) is fully supported - the deliberate
/// trade against self-contained signed tokens.
pub struct SessionService<R: SessionRepository> {
    repository: Arc<R>,
    config: SessionServiceConfig,
}

impl<R: SessionRepository> SessionService<R> {
    /// Create a new session service
    pub fn new(repository: Arc<R>, config: SessionServiceConfig) -> Self {
        Self { repository, config }
    }

    /// Generate a fresh opaque token
    fn generate_token() -> String {
        let mut bytes = [0u8; TOKEN_BYTES];
        OsRng.fill_bytes(&mut bytes);
        hex::encode(bytes)
    }

    /// SHA-256 hex digest of a token, the form stored at rest
    pub fn hash_token(token: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(token.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// Issue a new session for an account
    pub async fn issue(&self, account_id: Uuid) -> DomainResult<IssuedSession> {
        let token = Self::generate_token();
        let session = Session::new(
            account_id,
            Self::hash_token(&token),
            self.config.session_ttl_days,
        );

        let session = self.repository.save(session).await?;

        tracing::info!(
            account_id = %account_id,
            session_id = %session.id,
            expires_at = %session.expires_at,
            event = "session_issued",
            "Issued new session"
        );

        Ok(IssuedSession { token, session })
    }

    /// Resolve a bearer token to its session
    ///
    /// Unknown, malformed, and expired tokens are all reported as `None`;
    /// the caller cannot tell them apart. An expired record is deleted as a
    /// side effect of being observed.
    pub async fn resolve(&self, token: &str) -> DomainResult<Option<Session>> {
        let token_hash = Self::hash_token(token);

        match self.repository.find_by_token_hash(&token_hash).await? {
            None => Ok(None),
            Some(session) if session.is_expired() => {
                self.repository.delete_by_token_hash(&token_hash).await?;
                tracing::debug!(
                    session_id = %session.id,
                    event = "session_expired",
                    "Deleted expired session on observation"
                );
                Ok(None)
            }
            Some(session) => Ok(Some(session)),
        }
    }

    /// Revoke a single session
    ///
    /// # Returns
    /// `true` when a session was deleted, `false` when the token was unknown.
    pub async fn revoke(&self, token: &str) -> DomainResult<bool> {
        let token_hash = Self::hash_token(token);
        self.repository.delete_by_token_hash(&token_hash).await
    }

    /// Revoke every session belonging to an account
    ///
    /// # Returns
    /// The number of sessions removed.
    pub async fn revoke_all(&self, account_id: Uuid) -> DomainResult<u64> {
        let count = self.repository.delete_all_for_account(account_id).await?;

        tracing::info!(
            account_id = %account_id,
            count = count,
            event = "sessions_revoked",
            "Revoked all sessions for account"
        );

        Ok(count)
    }
}
