//! Authentication response value objects.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::Account;

/// Public view of an account, safe to return to clients
///
/// Constructed from an [`Account`] at the service boundary; the password
/// hash never crosses it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountPublic {
    /// Account identifier
    pub id: Uuid,

    /// Normalized email address
    pub email: String,

    /// Optional display name
    pub name: Option<String>,

    /// Whether the email has been verified
    pub is_verified: bool,

    /// When the account was created
    pub created_at: DateTime<Utc>,
}

impl From<&Account> for AccountPublic {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            email: account.email.clone(),
            name: account.name.clone(),
            is_verified: account.is_verified,
            created_at: account.created_at,
        }
    }
}

/// Result of a successful verify or login: a bearer token plus the account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Opaque session token; presented as a bearer credential on
    /// subsequent requests
    pub token: String,

    /// Public fields of the authenticated account
    pub account: AccountPublic,
}
