//! # Storage and Persistence
//!
//! The database gateway for the admin pages: connection pool, embedded
//! migrations and one repository per resource.

pub mod migrations;
pub mod pool;
pub mod repositories;

pub use crate::config::DatabaseConfig;

pub use migrations::{list_migrations, run_migrations, MigrationInfo};
pub use pool::{create_memory_pool, create_pool, DbPool};
pub use repositories::{
    MetapackageData, MetapackageRepository, NameSampleData, NameSampleRepository, NewReport,
    PackageDataSummarizable, RedirectRepository, ReportData, ReportId, ReportRepository,
    RepositoryDiagnosticsRepository, RepositoryUpdateDiagnostics, SqlxMetapackageRepository,
    SqlxNameSampleRepository, SqlxRedirectRepository, SqlxReportRepository,
    SqlxRepositoryDiagnosticsRepository,
};

use crate::errors::{AdminError, Result};
use tracing::Instrument;

/// Check database connectivity
pub async fn check_connection(pool: &DbPool) -> Result<()> {
    sqlx::query("SELECT 1")
        .fetch_one(pool)
        .instrument(crate::db_span!("check_connection"))
        .await
        .map_err(|e| AdminError::database(e, "Database connectivity check failed"))?;

    Ok(())
}
