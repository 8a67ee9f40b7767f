//! # Database Migration Management
//!
//! SQL migrations under `migrations/` are embedded into the binary and applied
//! on startup when `auto_migrate` is enabled, or via `repology-admin database
//! migrate`.

use crate::errors::{AdminError, Result};
use crate::storage::DbPool;
use serde::{Deserialize, Serialize};
use sqlx::migrate::Migrator;
use tracing::{error, info};

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Migration information structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MigrationInfo {
    pub version: i64,
    pub description: String,
    pub applied: bool,
}

/// Run all pending database migrations
pub async fn run_migrations(pool: &DbPool) -> Result<()> {
    info!(available = MIGRATOR.iter().count(), "Starting database migration process");

    MIGRATOR.run(pool).await.map_err(|e| {
        error!(error = %e, "Database migration failed");
        AdminError::Migration { source: e, context: "Failed to apply migrations".to_string() }
    })?;

    info!("Database migrations completed");
    Ok(())
}

/// List every embedded migration and whether it has been applied
pub async fn list_migrations(pool: &DbPool) -> Result<Vec<MigrationInfo>> {
    let applied: Vec<i64> = match sqlx::query_scalar::<_, i64>(
        "SELECT version FROM _sqlx_migrations WHERE success = TRUE ORDER BY version",
    )
    .fetch_all(pool)
    .await
    {
        Ok(versions) => versions,
        // Fresh database without the bookkeeping table
        Err(sqlx::Error::Database(e)) if e.message().contains("no such table") => Vec::new(),
        Err(e) => return Err(AdminError::database(e, "Failed to read applied migrations")),
    };

    Ok(MIGRATOR
        .iter()
        .map(|m| MigrationInfo {
            version: m.version,
            description: m.description.to_string(),
            applied: applied.contains(&m.version),
        })
        .collect())
}
