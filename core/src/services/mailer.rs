//! Outbound mail collaborator interface.

use async_trait::async_trait;
use thiserror::Error;

/// Errors from the mail transport
#[derive(Error, Debug)]
pub enum MailerError {
    #[error("Mail transport error: {message}")]
    Transport { message: String },
}

/// Outbound mail collaborator
///
/// The gateway treats delivery as a side effect that happens strictly after
/// the corresponding store writes have committed: a failure here is surfaced
/// to the caller but never rolls back account or code state.
///
/// Implementations include the SMTP mailer in the infrastructure crate and
/// a recording mock for tests.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Deliver a verification code to an email address
    ///
    /// # Arguments
    ///
    /// * `to` - Destination address
    /// * `code` - The 6-digit verification code to deliver
    async fn send_verification_code(&self, to: &str, code: &str) -> Result<(), MailerError>;
}
