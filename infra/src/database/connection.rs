//! MySQL connection pool management.

use std::time::Duration;

use sqlx::mysql::{MySqlPool, MySqlPoolOptions};

use auction_shared::config::DatabaseConfig;

use crate::InfrastructureError;

/// Wrapper around the SQLx MySQL pool
///
/// Built from [`DatabaseConfig`] and cloned freely; the inner pool is
/// reference counted.
#[derive(Clone)]
pub struct DatabasePool {
    pool: MySqlPool,
}

impl DatabasePool {
    /// Connect to MySQL with the configured limits
    pub async fn new(config: DatabaseConfig) -> Result<Self, InfrastructureError> {
        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .connect(&config.url)
            .await?;

        tracing::info!(
            max_connections = config.max_connections,
            event = "database_pool_created",
            "Connected to MySQL"
        );

        Ok(Self { pool })
    }

    /// Access the inner pool for repository construction
    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }

    /// Run a trivial query to confirm the connection is alive
    pub async fn health_check(&self) -> Result<bool, InfrastructureError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(true)
    }
}
