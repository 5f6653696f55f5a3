//! MySQL implementation of the SessionRepository trait.
//!
//! Sessions are addressed by the SHA-256 digest of the opaque token;
//! revoked and expired rows are physically deleted.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use auction_core::domain::entities::Session;
use auction_core::errors::DomainError;
use auction_core::repositories::SessionRepository;

/// MySQL implementation of SessionRepository
pub struct MySqlSessionRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlSessionRepository {
    /// Create a new MySQL session repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a Session entity
    fn row_to_session(row: &sqlx::mysql::MySqlRow) -> Result<Session, DomainError> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Database {
            message: format!("Failed to get id: {}", e),
        })?;

        let account_id: String = row
            .try_get("account_id")
            .map_err(|e| DomainError::Database {
                message: format!("Failed to get account_id: {}", e),
            })?;

        Ok(Session {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Internal {
                message: format!("Invalid session UUID: {}", e),
            })?,
            account_id: Uuid::parse_str(&account_id).map_err(|e| DomainError::Internal {
                message: format!("Invalid account UUID: {}", e),
            })?,
            token_hash: row
                .try_get("token_hash")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get token_hash: {}", e),
                })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get created_at: {}", e),
                })?,
            expires_at: row
                .try_get::<DateTime<Utc>, _>("expires_at")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get expires_at: {}", e),
                })?,
        })
    }
}

#[async_trait]
impl SessionRepository for MySqlSessionRepository {
    async fn save(&self, session: Session) -> Result<Session, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO sessions (
                id, account_id, token_hash, created_at, expires_at
            ) VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(session.id.to_string())
        .bind(session.account_id.to_string())
        .bind(&session.token_hash)
        .bind(session.created_at)
        .bind(session.expires_at)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::Database {
            message: format!("Failed to save session: {}", e),
        })?;

        Ok(session)
    }

    async fn find_by_token_hash(
        &self,
        token_hash: &str,
    ) -> Result<Option<Session>, DomainError> {
        let query = r#"
            SELECT id, account_id, token_hash, created_at, expires_at
            FROM sessions
            WHERE token_hash = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(token_hash)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to find session: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_session(&row)?)),
            None => Ok(None),
        }
    }

    async fn delete_by_token_hash(&self, token_hash: &str) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM sessions WHERE token_hash = ?")
            .bind(token_hash)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to delete session: {}", e),
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_all_for_account(&self, account_id: Uuid) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM sessions WHERE account_id = ?")
            .bind(account_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to delete account sessions: {}", e),
            })?;

        Ok(result.rows_affected())
    }
}
