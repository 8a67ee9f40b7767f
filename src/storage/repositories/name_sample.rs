//! Name samples captured during ingestion for normalization review

use crate::errors::{AdminError, Result};
use crate::storage::DbPool;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tracing::instrument;

/// A raw package name as seen in a repository, with the project it mapped to
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct NameSampleData {
    pub repo: String,
    pub name: String,
    pub effname: String,
}

#[async_trait]
pub trait NameSampleRepository: Send + Sync {
    /// Up to `limit` samples in capture order
    async fn get_name_samples(&self, limit: i64) -> Result<Vec<NameSampleData>>;
}

#[derive(Debug, Clone)]
pub struct SqlxNameSampleRepository {
    pool: DbPool,
}

impl SqlxNameSampleRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NameSampleRepository for SqlxNameSampleRepository {
    #[instrument(skip(self), name = "db_get_name_samples")]
    async fn get_name_samples(&self, limit: i64) -> Result<Vec<NameSampleData>> {
        sqlx::query_as::<_, NameSampleData>(
            "SELECT repo, name, effname FROM name_samples ORDER BY id LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AdminError::database(e, "Failed to fetch name samples"))
    }
}
