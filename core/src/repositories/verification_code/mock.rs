//! Mock implementation of VerificationCodeRepository for testing

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::VerificationCode;
use crate::errors::DomainError;

use super::r#trait::VerificationCodeRepository;

/// Mock verification code repository for testing
///
/// Keeps every row ever written, like the real table: superseded and
/// consumed codes stay with `is_used = true`.
#[derive(Clone)]
pub struct MockVerificationCodeRepository {
    codes: Arc<RwLock<Vec<VerificationCode>>>,
}

impl MockVerificationCodeRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            codes: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// All rows for an account, newest first (test helper)
    pub async fn rows_for_account(&self, account_id: Uuid) -> Vec<VerificationCode> {
        let codes = self.codes.read().await;
        let mut rows: Vec<VerificationCode> = codes
            .iter()
            .filter(|c| c.account_id == account_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        rows
    }
}

impl Default for MockVerificationCodeRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VerificationCodeRepository for MockVerificationCodeRepository {
    async fn replace_active(
        &self,
        code: VerificationCode,
    ) -> Result<VerificationCode, DomainError> {
        let mut codes = self.codes.write().await;

        for existing in codes.iter_mut() {
            if existing.account_id == code.account_id && !existing.is_used {
                existing.mark_used();
            }
        }
        codes.push(code.clone());
        Ok(code)
    }

    async fn find_latest_active(
        &self,
        account_id: Uuid,
        code: &str,
    ) -> Result<Option<VerificationCode>, DomainError> {
        let codes = self.codes.read().await;
        Ok(codes
            .iter()
            .filter(|c| c.account_id == account_id && c.code == code && !c.is_used)
            .max_by_key(|c| c.created_at)
            .cloned())
    }

    async fn mark_used(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut codes = self.codes.write().await;

        match codes.iter_mut().find(|c| c.id == id && !c.is_used) {
            Some(code) => {
                code.mark_used();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
