//! Authentication and validation error types.
//!
//! These enums carry machine-distinguishable failure reasons; the API layer
//! owns the mapping to HTTP status codes and response bodies.

use thiserror::Error;

/// Authentication-flow errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// A verified account already holds this email address
    #[error("An account with this email already exists")]
    EmailAlreadyRegistered,

    /// No account exists for the given email
    #[error("Account not found")]
    AccountNotFound,

    /// The account has not completed email verification
    #[error("Email is not verified")]
    AccountNotVerified,

    /// The account is already verified; the requested step is meaningless
    #[error("Email is already verified")]
    AccountAlreadyVerified,

    /// No live code matches the submitted value
    #[error("Invalid verification code")]
    InvalidVerificationCode,

    /// A matching code exists but is past its expiry
    #[error("Verification code has expired")]
    VerificationCodeExpired,

    /// Unknown email or wrong password; deliberately a single variant so
    /// the two cases are externally indistinguishable
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Missing, unknown, or expired session token on a protected operation
    #[error("Unauthorized")]
    Unauthorized,

    /// The mail collaborator failed; account and code state stay committed
    /// and resend is the recovery path
    #[error("Failed to deliver verification email")]
    MailDeliveryFailed,
}

/// Input validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid format: {field}")]
    InvalidFormat { field: String },

    #[error("Invalid email format")]
    InvalidEmail,
}
