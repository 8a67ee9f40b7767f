//! Project redirect repository
//!
//! Two generations of redirect data exist side by side:
//! - `project_redirects` (v1) is edited by admins through this service,
//! - `project_redirects2` (v2) is written by repository ingestion and only
//!   read here.

use crate::errors::{AdminError, Result};
use crate::storage::DbPool;
use async_trait::async_trait;
use tracing::instrument;

#[async_trait]
pub trait RedirectRepository: Send + Sync {
    /// Add or update a v1 redirect
    async fn add_project_redirect(&self, oldname: &str, newname: &str, is_actual: bool)
        -> Result<()>;

    /// Remove exactly one v1 `oldname -> newname` mapping
    async fn remove_project_redirect(&self, oldname: &str, newname: &str) -> Result<()>;

    /// Actual v1 redirect targets for `oldname`, sorted by name
    async fn get_project_redirects(&self, oldname: &str) -> Result<Vec<String>>;

    /// Actual v2 redirect targets for `oldname`, sorted by name
    async fn get_project_redirects2(&self, oldname: &str) -> Result<Vec<String>>;
}

#[derive(Debug, Clone)]
pub struct SqlxRedirectRepository {
    pool: DbPool,
}

impl SqlxRedirectRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RedirectRepository for SqlxRedirectRepository {
    #[instrument(skip(self), name = "db_add_project_redirect")]
    async fn add_project_redirect(
        &self,
        oldname: &str,
        newname: &str,
        is_actual: bool,
    ) -> Result<()> {
        sqlx::query(
            "INSERT INTO project_redirects (oldname, newname, is_actual) VALUES ($1, $2, $3) \
             ON CONFLICT (oldname, newname) DO UPDATE SET is_actual = excluded.is_actual",
        )
        .bind(oldname)
        .bind(newname)
        .bind(is_actual)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AdminError::database(e, format!("Failed to add redirect {} -> {}", oldname, newname))
        })?;

        Ok(())
    }

    #[instrument(skip(self), name = "db_remove_project_redirect")]
    async fn remove_project_redirect(&self, oldname: &str, newname: &str) -> Result<()> {
        let result = sqlx::query("DELETE FROM project_redirects WHERE oldname = $1 AND newname = $2")
            .bind(oldname)
            .bind(newname)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AdminError::database(
                    e,
                    format!("Failed to remove redirect {} -> {}", oldname, newname),
                )
            })?;

        tracing::debug!(rows = result.rows_affected(), "Redirect removed");
        Ok(())
    }

    #[instrument(skip(self), name = "db_get_project_redirects")]
    async fn get_project_redirects(&self, oldname: &str) -> Result<Vec<String>> {
        sqlx::query_scalar::<_, String>(
            "SELECT newname FROM project_redirects WHERE oldname = $1 AND is_actual \
             ORDER BY newname",
        )
        .bind(oldname)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AdminError::database(e, format!("Failed to resolve redirects for {}", oldname)))
    }

    #[instrument(skip(self), name = "db_get_project_redirects2")]
    async fn get_project_redirects2(&self, oldname: &str) -> Result<Vec<String>> {
        sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT newname FROM project_redirects2 WHERE oldname = $1 AND is_actual \
             ORDER BY newname",
        )
        .bind(oldname)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AdminError::database(e, format!("Failed to resolve v2 redirects for {}", oldname))
        })
    }
}
