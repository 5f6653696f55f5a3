//! Verification code repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::VerificationCode;
use crate::errors::DomainError;

/// Repository trait for VerificationCode entity persistence operations
///
/// Code rows are never physically deleted; superseded and consumed codes
/// stay in the store with `is_used = true`. Expiry is the caller's concern
/// and is evaluated at read time.
#[async_trait]
pub trait VerificationCodeRepository: Send + Sync {
    /// Store a new code, invalidating every prior live code for its account
    ///
    /// The invalidate-then-insert sequence runs as a single transaction so
    /// that no crash point can leave two simultaneously live codes for one
    /// account.
    ///
    /// # Returns
    /// * `Ok(VerificationCode)` - The stored code
    /// * `Err(DomainError)` - Database error occurred
    async fn replace_active(
        &self,
        code: VerificationCode,
    ) -> Result<VerificationCode, DomainError>;

    /// Find the most recent unused code for an account matching `code`
    ///
    /// Returns the row even when it is past expiry; the caller decides how
    /// to report expiry. If multiple rows match (tolerated but not expected
    /// given the replace-on-issue invariant) the most recently created one
    /// wins.
    async fn find_latest_active(
        &self,
        account_id: Uuid,
        code: &str,
    ) -> Result<Option<VerificationCode>, DomainError>;

    /// Mark a code row as used
    ///
    /// Guarded: returns `Ok(false)` when the row was already used, so that
    /// two concurrent consume attempts cannot both succeed.
    async fn mark_used(&self, id: Uuid) -> Result<bool, DomainError>;
}
