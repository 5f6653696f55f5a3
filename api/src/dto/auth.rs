use serde::{Deserialize, Serialize};
use validator::Validate;

use auction_core::domain::value_objects::AccountPublic;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Email address; normalized (trimmed, lower-cased) by the service
    #[validate(email)]
    pub email: String,

    /// Plaintext password; hashed with bcrypt, never stored or echoed
    #[validate(length(min = 1, max = 128))]
    pub password: String,

    /// Optional display name
    #[validate(length(max = 255))]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyRequest {
    #[validate(email)]
    pub email: String,

    /// 6-digit verification code
    #[validate(length(equal = 6))]
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1, max = 128))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ResendCodeRequest {
    #[validate(email)]
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CheckCodeRequest {
    #[validate(email)]
    pub email: String,

    /// Candidate code; malformed input is reported, not rejected
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Response for verify and login: an opaque session token plus the public
/// account fields. The password hash never appears here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub message: String,
    pub token: String,
    pub account: AccountPublic,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountResponse {
    pub account: AccountPublic,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckCodeResponse {
    pub valid: bool,

    /// `malformed`, `not_found`, or `expired` when invalid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionsClearedResponse {
    pub message: String,
    pub sessions_cleared: u64,
}
