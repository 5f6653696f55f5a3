//! Mock implementation of AccountRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::Account;
use crate::errors::{AuthError, DomainError};

use super::r#trait::AccountRepository;

/// Mock account repository for testing
///
/// Keyed by normalized email, mirroring the unique index of the MySQL
/// implementation.
#[derive(Clone)]
pub struct MockAccountRepository {
    accounts: Arc<RwLock<HashMap<String, Account>>>,
}

impl MockAccountRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored accounts (test helper)
    pub async fn count(&self) -> usize {
        self.accounts.read().await.len()
    }
}

impl Default for MockAccountRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountRepository for MockAccountRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.values().find(|a| a.id == id).cloned())
    }

    async fn create_or_replace_unverified(
        &self,
        account: Account,
    ) -> Result<Account, DomainError> {
        let mut accounts = self.accounts.write().await;

        match accounts.get_mut(&account.email) {
            Some(existing) if existing.is_verified => {
                Err(DomainError::Auth(AuthError::EmailAlreadyRegistered))
            }
            Some(existing) => {
                existing.replace_credentials(account.password_hash, account.name);
                Ok(existing.clone())
            }
            None => {
                accounts.insert(account.email.clone(), account.clone());
                Ok(account)
            }
        }
    }

    async fn mark_verified(&self, id: Uuid) -> Result<(), DomainError> {
        let mut accounts = self.accounts.write().await;

        if let Some(account) = accounts.values_mut().find(|a| a.id == id) {
            account.verify();
        }
        Ok(())
    }
}
