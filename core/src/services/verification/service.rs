//! Verification code service: issues, checks, and consumes codes.

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::VerificationCode;
use crate::errors::DomainResult;
use crate::repositories::VerificationCodeRepository;

use super::config::CodeServiceConfig;

/// Outcome of matching a submitted code against the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeStatus {
    /// A live code matched
    Valid,
    /// No unused code matches the submitted value
    NotFound,
    /// A matching unused code exists but is past its expiry
    Expired,
}

/// Service managing verification codes for accounts
///
/// Owns the code lifecycle exclusively: issuing (which supersedes all prior
/// live codes for the account), side-effect-free checking, and one-time
/// consumption.
pub struct CodeService<R: VerificationCodeRepository> {
    repository: Arc<R>,
    config: CodeServiceConfig,
}

impl<R: VerificationCodeRepository> CodeService<R> {
    /// Create a new code service
    pub fn new(repository: Arc<R>, config: CodeServiceConfig) -> Self {
        Self { repository, config }
    }

    /// Issue a new code for an account
    ///
    /// Every previously live code for the account is invalidated in the same
    /// transaction that stores the new one, so at most one code is live at a
    /// time. Returns the stored entity; the plaintext code is in its `code`
    /// field, ready for delivery by the caller.
    pub async fn issue(&self, account_id: Uuid) -> DomainResult<VerificationCode> {
        let code = VerificationCode::new(account_id, self.config.code_ttl_minutes);

        tracing::info!(
            account_id = %account_id,
            code_id = %code.id,
            expires_at = %code.expires_at,
            event = "verification_code_issued",
            "Issued new verification code"
        );

        self.repository.replace_active(code).await
    }

    /// Check a submitted code without consuming it
    ///
    /// Exists for optimistic client-side feedback: calling this never
    /// changes whether a subsequent [`consume`](Self::consume) of the same
    /// code succeeds.
    pub async fn check(&self, account_id: Uuid, code: &str) -> DomainResult<CodeStatus> {
        match self.repository.find_latest_active(account_id, code).await? {
            None => Ok(CodeStatus::NotFound),
            Some(found) if found.is_expired() => Ok(CodeStatus::Expired),
            Some(_) => Ok(CodeStatus::Valid),
        }
    }

    /// Consume a submitted code
    ///
    /// On `Valid` the matched row has been atomically marked used. Expired
    /// codes are reported but not consumed. A row grabbed by a concurrent
    /// consume in the window between lookup and update reports `NotFound`.
    pub async fn consume(&self, account_id: Uuid, code: &str) -> DomainResult<CodeStatus> {
        let found = match self.repository.find_latest_active(account_id, code).await? {
            None => return Ok(CodeStatus::NotFound),
            Some(found) if found.is_expired() => return Ok(CodeStatus::Expired),
            Some(found) => found,
        };

        if self.repository.mark_used(found.id).await? {
            tracing::info!(
                account_id = %account_id,
                code_id = %found.id,
                event = "verification_code_consumed",
                "Verification code consumed"
            );
            Ok(CodeStatus::Valid)
        } else {
            Ok(CodeStatus::NotFound)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MockVerificationCodeRepository;

    fn service_with_ttl(
        ttl_minutes: i64,
    ) -> (
        CodeService<MockVerificationCodeRepository>,
        Arc<MockVerificationCodeRepository>,
    ) {
        let repository = Arc::new(MockVerificationCodeRepository::new());
        let service = CodeService::new(
            Arc::clone(&repository),
            CodeServiceConfig::new(ttl_minutes),
        );
        (service, repository)
    }

    #[tokio::test]
    async fn test_issue_then_consume() {
        let (service, _) = service_with_ttl(60);
        let account_id = Uuid::new_v4();

        let issued = service.issue(account_id).await.unwrap();

        assert_eq!(
            service.consume(account_id, &issued.code).await.unwrap(),
            CodeStatus::Valid
        );
        // A consumed code cannot be consumed twice
        assert_eq!(
            service.consume(account_id, &issued.code).await.unwrap(),
            CodeStatus::NotFound
        );
    }

    #[tokio::test]
    async fn test_issue_invalidates_prior_codes() {
        let (service, _) = service_with_ttl(60);
        let account_id = Uuid::new_v4();

        let first = service.issue(account_id).await.unwrap();
        let second = service.issue(account_id).await.unwrap();

        assert_eq!(
            service.consume(account_id, &first.code).await.unwrap(),
            CodeStatus::NotFound
        );
        assert_eq!(
            service.consume(account_id, &second.code).await.unwrap(),
            CodeStatus::Valid
        );
    }

    #[tokio::test]
    async fn test_check_has_no_side_effect() {
        let (service, _) = service_with_ttl(60);
        let account_id = Uuid::new_v4();

        let issued = service.issue(account_id).await.unwrap();

        for _ in 0..3 {
            assert_eq!(
                service.check(account_id, &issued.code).await.unwrap(),
                CodeStatus::Valid
            );
        }
        assert_eq!(
            service.consume(account_id, &issued.code).await.unwrap(),
            CodeStatus::Valid
        );
    }

    #[tokio::test]
    async fn test_expired_code_is_reported_not_consumed() {
        let (service, repository) = service_with_ttl(0);
        let account_id = Uuid::new_v4();

        let issued = service.issue(account_id).await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;

        assert_eq!(
            service.check(account_id, &issued.code).await.unwrap(),
            CodeStatus::Expired
        );
        assert_eq!(
            service.consume(account_id, &issued.code).await.unwrap(),
            CodeStatus::Expired
        );

        // The row stays unused in the store
        let rows = repository.rows_for_account(account_id).await;
        assert!(!rows[0].is_used);
    }

    #[tokio::test]
    async fn test_unknown_code_not_found() {
        let (service, _) = service_with_ttl(60);
        let account_id = Uuid::new_v4();

        service.issue(account_id).await.unwrap();

        assert_eq!(
            service.check(account_id, "no-such").await.unwrap(),
            CodeStatus::NotFound
        );
    }

    #[tokio::test]
    async fn test_codes_are_scoped_by_account() {
        let (service, _) = service_with_ttl(60);
        let ann = Uuid::new_v4();
        let bob = Uuid::new_v4();

        let issued = service.issue(ann).await.unwrap();

        assert_eq!(
            service.check(bob, &issued.code).await.unwrap(),
            CodeStatus::NotFound
        );
    }
}
