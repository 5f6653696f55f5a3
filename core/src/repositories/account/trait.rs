//! Account repository trait defining the interface for account persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::Account;
use crate::errors::DomainError;

/// Repository trait for Account entity persistence operations
///
/// The store-level uniqueness constraint on the normalized email is the
/// authority for registration races: implementations must guarantee that
/// two concurrent `create_or_replace_unverified` calls for the same email
/// can never both insert a row.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find an account by its normalized email address
    ///
    /// Callers must pass the trimmed, lower-cased form; the repository does
    /// not normalize on its own.
    ///
    /// # Returns
    /// * `Ok(Some(Account))` - Account found
    /// * `Ok(None)` - No account holds this email
    /// * `Err(DomainError)` - Database error occurred
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError>;

    /// Find an account by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError>;

    /// Create an unverified account, or overwrite an existing unverified one
    ///
    /// The check-then-act sequence is a single transaction:
    /// * no account for the email - insert `account` as given
    /// * unverified account exists - overwrite its password hash and name
    ///   in place, keeping the stored id and creation timestamp
    /// * verified account exists - refuse with
    ///   [`AuthError::EmailAlreadyRegistered`](crate::errors::AuthError)
    ///
    /// # Returns
    /// * `Ok(Account)` - The stored account (with the surviving id)
    /// * `Err(DomainError)` - Refused or database error
    async fn create_or_replace_unverified(
        &self,
        account: Account,
    ) -> Result<Account, DomainError>;

    /// Flip the verification flag for an account
    ///
    /// Idempotent: marking an already verified account is a no-op.
    async fn mark_verified(&self, id: Uuid) -> Result<(), DomainError>;
}
