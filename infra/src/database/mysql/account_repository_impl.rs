//! MySQL implementation of the AccountRepository trait.
//!
//! Accounts are keyed by a unique index on the normalized email column,
//! which is the authority for concurrent registration races.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use auction_core::domain::entities::Account;
use auction_core::errors::{AuthError, DomainError};
use auction_core::repositories::AccountRepository;

/// MySQL implementation of AccountRepository
pub struct MySqlAccountRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlAccountRepository {
    /// Create a new MySQL account repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to an Account entity
    fn row_to_account(row: &sqlx::mysql::MySqlRow) -> Result<Account, DomainError> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Database {
            message: format!("Failed to get id: {}", e),
        })?;

        Ok(Account {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Internal {
                message: format!("Invalid account UUID: {}", e),
            })?,
            email: row.try_get("email").map_err(|e| DomainError::Database {
                message: format!("Failed to get email: {}", e),
            })?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get password_hash: {}", e),
                })?,
            name: row.try_get("name").map_err(|e| DomainError::Database {
                message: format!("Failed to get name: {}", e),
            })?,
            is_verified: row
                .try_get("is_verified")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get is_verified: {}", e),
                })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get created_at: {}", e),
                })?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get updated_at: {}", e),
                })?,
        })
    }

    /// Whether an SQLx error is a unique key violation
    fn is_duplicate_key(error: &sqlx::Error) -> bool {
        matches!(
            error,
            sqlx::Error::Database(db) if db.code().as_deref() == Some("23000")
        )
    }
}

const SELECT_COLUMNS: &str =
    "id, email, password_hash, name, is_verified, created_at, updated_at";

#[async_trait]
impl AccountRepository for MySqlAccountRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        let query = format!(
            "SELECT {} FROM accounts WHERE email = ? LIMIT 1",
            SELECT_COLUMNS
        );

        let result = sqlx::query(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to find account by email: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_account(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError> {
        let query = format!(
            "SELECT {} FROM accounts WHERE id = ? LIMIT 1",
            SELECT_COLUMNS
        );

        let result = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to find account by id: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_account(&row)?)),
            None => Ok(None),
        }
    }

    async fn create_or_replace_unverified(
        &self,
        account: Account,
    ) -> Result<Account, DomainError> {
        let mut tx = self.pool.begin().await.map_err(|e| DomainError::Database {
            message: format!("Failed to begin transaction: {}", e),
        })?;

        // Lock the email row for the duration of the check-then-act sequence
        let query = format!(
            "SELECT {} FROM accounts WHERE email = ? FOR UPDATE",
            SELECT_COLUMNS
        );
        let existing = sqlx::query(&query)
            .bind(&account.email)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to lock account row: {}", e),
            })?;

        let stored = match existing {
            Some(row) => {
                let mut current = Self::row_to_account(&row)?;
                if current.is_verified {
                    return Err(AuthError::EmailAlreadyRegistered.into());
                }

                // Overwrite the pending registration in place, keeping the
                // stored id and creation timestamp
                current.replace_credentials(account.password_hash, account.name);

                sqlx::query(
                    "UPDATE accounts SET password_hash = ?, name = ?, updated_at = ? WHERE id = ?",
                )
                .bind(&current.password_hash)
                .bind(&current.name)
                .bind(current.updated_at)
                .bind(current.id.to_string())
                .execute(&mut *tx)
                .await
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to overwrite unverified account: {}", e),
                })?;

                current
            }
            None => {
                let insert = sqlx::query(
                    r#"
                    INSERT INTO accounts (
                        id, email, password_hash, name, is_verified, created_at, updated_at
                    ) VALUES (?, ?, ?, ?, ?, ?, ?)
                    "#,
                )
                .bind(account.id.to_string())
                .bind(&account.email)
                .bind(&account.password_hash)
                .bind(&account.name)
                .bind(account.is_verified)
                .bind(account.created_at)
                .bind(account.updated_at)
                .execute(&mut *tx)
                .await;

                if let Err(e) = insert {
                    // A concurrent registration won the unique email index
                    if Self::is_duplicate_key(&e) {
                        return Err(AuthError::EmailAlreadyRegistered.into());
                    }
                    return Err(DomainError::Database {
                        message: format!("Failed to insert account: {}", e),
                    });
                }

                account
            }
        };

        tx.commit().await.map_err(|e| DomainError::Database {
            message: format!("Failed to commit account transaction: {}", e),
        })?;

        Ok(stored)
    }

    async fn mark_verified(&self, id: Uuid) -> Result<(), DomainError> {
        sqlx::query("UPDATE accounts SET is_verified = TRUE, updated_at = ? WHERE id = ?")
            .bind(Utc::now())
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to mark account verified: {}", e),
            })?;

        Ok(())
    }
}
