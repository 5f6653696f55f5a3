//! MySQL implementation of the VerificationCodeRepository trait.
//!
//! Code rows are never deleted; superseded and consumed rows keep
//! `is_used = TRUE` as an audit trail.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use auction_core::domain::entities::VerificationCode;
use auction_core::errors::DomainError;
use auction_core::repositories::VerificationCodeRepository;

/// MySQL implementation of VerificationCodeRepository
pub struct MySqlVerificationCodeRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlVerificationCodeRepository {
    /// Create a new MySQL verification code repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a VerificationCode entity
    fn row_to_code(row: &sqlx::mysql::MySqlRow) -> Result<VerificationCode, DomainError> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Database {
            message: format!("Failed to get id: {}", e),
        })?;

        let account_id: String = row
            .try_get("account_id")
            .map_err(|e| DomainError::Database {
                message: format!("Failed to get account_id: {}", e),
            })?;

        Ok(VerificationCode {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Internal {
                message: format!("Invalid code UUID: {}", e),
            })?,
            account_id: Uuid::parse_str(&account_id).map_err(|e| DomainError::Internal {
                message: format!("Invalid account UUID: {}", e),
            })?,
            code: row.try_get("code").map_err(|e| DomainError::Database {
                message: format!("Failed to get code: {}", e),
            })?,
            is_used: row.try_get("is_used").map_err(|e| DomainError::Database {
                message: format!("Failed to get is_used: {}", e),
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
impl VerificationCodeRepository for MySqlVerificationCodeRepository {
    async fn replace_active(
        &self,
        code: VerificationCode,
    ) -> Result<VerificationCode, DomainError> {
        let mut tx = self.pool.begin().await.map_err(|e| DomainError::Database {
            message: format!("Failed to begin transaction: {}", e),
        })?;

        // Retire every live code for the account, then insert the new one;
        // a single transaction so no crash point leaves two live codes
        sqlx::query(
            "UPDATE email_verification_codes SET is_used = TRUE WHERE account_id = ? AND is_used = FALSE",
        )
        .bind(code.account_id.to_string())
        .execute(&mut *tx)
        .await
        .map_err(|e| DomainError::Database {
            message: format!("Failed to retire prior codes: {}", e),
        })?;

        sqlx::query(
            r#"
            INSERT INTO email_verification_codes (
                id, account_id, code, is_used, created_at, expires_at
            ) VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(code.id.to_string())
        .bind(code.account_id.to_string())
        .bind(&code.code)
        .bind(code.is_used)
        .bind(code.created_at)
        .bind(code.expires_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| DomainError::Database {
            message: format!("Failed to insert verification code: {}", e),
        })?;

        tx.commit().await.map_err(|e| DomainError::Database {
            message: format!("Failed to commit code transaction: {}", e),
        })?;

        Ok(code)
    }

    async fn find_latest_active(
        &self,
        account_id: Uuid,
        code: &str,
    ) -> Result<Option<VerificationCode>, DomainError> {
        let query = r#"
            SELECT id, account_id, code, is_used, created_at, expires_at
            FROM email_verification_codes
            WHERE account_id = ? AND code = ? AND is_used = FALSE
            ORDER BY created_at DESC
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(account_id.to_string())
            .bind(code)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to find verification code: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_code(&row)?)),
            None => Ok(None),
        }
    }

    async fn mark_used(&self, id: Uuid) -> Result<bool, DomainError> {
        // Guarded by is_used so concurrent consume attempts cannot both win
        let result = sqlx::query(
            "UPDATE email_verification_codes SET is_used = TRUE WHERE id = ? AND is_used = FALSE",
        )
        .bind(id.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::Database {
            message: format!("Failed to mark code used: {}", e),
        })?;

        Ok(result.rows_affected() > 0)
    }
}
