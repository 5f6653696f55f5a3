//! Mock implementation of SessionRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::Session;
use crate::errors::DomainError;

use super::r#trait::SessionRepository;

/// Mock session repository for testing
#[derive(Clone)]
pub struct MockSessionRepository {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
}

impl MockSessionRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored sessions (test helper)
    pub async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

impl Default for MockSessionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionRepository for MockSessionRepository {
    async fn save(&self, session: Session) -> Result<Session, DomainError> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.token_hash.clone(), session.clone());
        Ok(session)
    }

    async fn find_by_token_hash(
        &self,
        token_hash: &str,
    ) -> Result<Option<Session>, DomainError> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(token_hash).cloned())
    }

    async fn delete_by_token_hash(&self, token_hash: &str) -> Result<bool, DomainError> {
        let mut sessions = self.sessions.write().await;
        Ok(sessions.remove(token_hash).is_some())
    }

    async fn delete_all_for_account(&self, account_id: Uuid) -> Result<u64, DomainError> {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| s.account_id != account_id);
        Ok((before - sessions.len()) as u64)
    }
}
