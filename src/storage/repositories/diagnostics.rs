//! Repository update diagnostics

use crate::errors::{AdminError, Result};
use crate::storage::DbPool;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tracing::instrument;

/// Update bookkeeping for one source repository
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct RepositoryUpdateDiagnostics {
    pub name: String,
    pub title: String,
    pub num_packages: i64,
    pub last_fetched: Option<DateTime<Utc>>,
    pub last_parsed: Option<DateTime<Utc>>,
    pub last_updated: Option<DateTime<Utc>>,
    pub last_failed: Option<DateTime<Utc>>,
    pub fetch_duration_ms: Option<i64>,
    pub parse_duration_ms: Option<i64>,
    pub update_errors: i64,
}

#[async_trait]
pub trait RepositoryDiagnosticsRepository: Send + Sync {
    /// All repositories ordered by name
    async fn get_repositories_update_diagnostics(&self) -> Result<Vec<RepositoryUpdateDiagnostics>>;
}

#[derive(Debug, Clone)]
pub struct SqlxRepositoryDiagnosticsRepository {
    pool: DbPool,
}

impl SqlxRepositoryDiagnosticsRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RepositoryDiagnosticsRepository for SqlxRepositoryDiagnosticsRepository {
    #[instrument(skip(self), name = "db_get_repositories_update_diagnostics")]
    async fn get_repositories_update_diagnostics(&self) -> Result<Vec<RepositoryUpdateDiagnostics>> {
        sqlx::query_as::<_, RepositoryUpdateDiagnostics>(
            "SELECT name, title, num_packages, last_fetched, last_parsed, last_updated, \
             last_failed, fetch_duration_ms, parse_duration_ms, update_errors \
             FROM repositories ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AdminError::database(e, "Failed to fetch repository update diagnostics"))
    }
}
