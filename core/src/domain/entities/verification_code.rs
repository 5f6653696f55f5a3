//! Verification code entity for email-based account verification.

use chrono::{DateTime, Duration, Utc};
use rand::rngs::OsRng;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Verification code entity
///
/// A short-lived, single-use numeric proof that the registrant controls the
/// claimed email address. Codes are scoped to an account; the same value may
/// exist for different accounts. Expiry is evaluated at read time, never by
/// a background sweep, and consumed codes are kept with `is_used = true`
/// rather than deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationCode {
    /// Unique identifier for the code row
    pub id: Uuid,

    /// Account this code was issued for
    pub account_id: Uuid,

    /// The 6-digit code, zero-padded
    pub code: String,

    /// Whether the code has been consumed or superseded
    pub is_used: bool,

    /// Timestamp when the code was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the code expires
    pub expires_at: DateTime<Utc>,
}

impl VerificationCode {
    /// Creates a new verification code with a random 6-digit value
    ///
    /// # Arguments
    ///
    /// * `account_id` - The account the code belongs to
    /// * `ttl_minutes` - Number of minutes until the code expires
    pub fn new(account_id: Uuid, ttl_minutes: i64) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            account_id,
            code: Self::generate_code(),
            is_used: false,
            created_at: now,
            expires_at: now + Duration::minutes(ttl_minutes),
        }
    }

    /// Generates a uniformly random 6-digit code from the OS CSPRNG
    ///
    /// Leading zeros are preserved: the result is always exactly 6 characters.
    pub fn generate_code() -> String {
        let value: u32 = OsRng.gen_range(0..1_000_000);
        format!("{:06}", value)
    }

    /// Checks if the code has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Checks if the code is live: unused and unexpired at this moment
    pub fn is_live(&self) -> bool {
        !self.is_used && !self.is_expired()
    }

    /// Marks the code as used
    pub fn mark_used(&mut self) {
        self.is_used = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use auction_shared::utils::validation::CODE_LENGTH;

    #[test]
    fn test_new_code_is_live() {
        let account_id = Uuid::new_v4();
        let code = VerificationCode::new(account_id, 60);

        assert_eq!(code.account_id, account_id);
        assert_eq!(code.code.len(), CODE_LENGTH);
        assert!(!code.is_used);
        assert!(!code.is_expired());
        assert!(code.is_live());
    }

    #[test]
    fn test_generate_code_format() {
        for _ in 0..200 {
            let code = VerificationCode::generate_code();
            assert_eq!(code.len(), CODE_LENGTH);
            assert!(code.chars().all(|c| c.is_ascii_digit()));

            let value: u32 = code.parse().expect("code should parse as a number");
            assert!(value < 1_000_000);
        }
    }

    #[test]
    fn test_codes_vary() {
        let codes: std::collections::HashSet<String> = (0..100)
            .map(|_| VerificationCode::generate_code())
            .collect();
        assert!(codes.len() > 1);
    }

    #[test]
    fn test_zero_ttl_code_expires() {
        let code = VerificationCode::new(Uuid::new_v4(), 0);
        std::thread::sleep(std::time::Duration::from_millis(10));

        assert!(code.is_expired());
        assert!(!code.is_live());
    }

    #[test]
    fn test_used_code_is_not_live() {
        let mut code = VerificationCode::new(Uuid::new_v4(), 60);
        code.mark_used();

        assert!(!code.is_live());
        assert!(!code.is_expired());
    }
}
