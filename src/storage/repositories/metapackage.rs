//! Read-only metapackage and package queries used for redirect previews

use crate::errors::{AdminError, Result};
use crate::storage::DbPool;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, QueryBuilder, Sqlite};
use tracing::instrument;

/// Aggregated view of all packages sharing a project name
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct MetapackageData {
    pub effname: String,
    pub num_repos: i64,
    pub num_families: i64,
    pub num_repos_newest: i64,
    pub num_families_newest: i64,
    pub orphaned_at: Option<DateTime<Utc>>,
}

/// Package projection carrying only what summaries need
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct PackageDataSummarizable {
    pub effname: String,
    pub repo: String,
    pub family: String,
    pub version: String,
    /// Status code assigned by the version comparison pass
    pub versionclass: i64,
}

#[async_trait]
pub trait MetapackageRepository: Send + Sync {
    /// Metapackages for the given project names, ordered by name
    async fn get_metapackages(&self, effnames: &[String]) -> Result<Vec<MetapackageData>>;

    /// Summarizable packages of the given projects, grouped by project
    async fn get_metapackages_packages(
        &self,
        effnames: &[String],
    ) -> Result<Vec<PackageDataSummarizable>>;
}

#[derive(Debug, Clone)]
pub struct SqlxMetapackageRepository {
    pool: DbPool,
}

impl SqlxMetapackageRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn push_name_list<'a>(builder: &mut QueryBuilder<'a, Sqlite>, effnames: &'a [String]) {
    builder.push(" WHERE effname IN (");
    let mut separated = builder.separated(", ");
    for name in effnames {
        separated.push_bind(name);
    }
    separated.push_unseparated(")");
}

#[async_trait]
impl MetapackageRepository for SqlxMetapackageRepository {
    #[instrument(skip(self), fields(count = effnames.len()), name = "db_get_metapackages")]
    async fn get_metapackages(&self, effnames: &[String]) -> Result<Vec<MetapackageData>> {
        if effnames.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder = QueryBuilder::<Sqlite>::new(
            "SELECT effname, num_repos, num_families, num_repos_newest, num_families_newest, \
             orphaned_at FROM metapackages",
        );
        push_name_list(&mut builder, effnames);
        builder.push(" ORDER BY effname");

        builder
            .build_query_as::<MetapackageData>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AdminError::database(e, "Failed to fetch metapackages"))
    }

    #[instrument(skip(self), fields(count = effnames.len()), name = "db_get_metapackages_packages")]
    async fn get_metapackages_packages(
        &self,
        effnames: &[String],
    ) -> Result<Vec<PackageDataSummarizable>> {
        if effnames.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder = QueryBuilder::<Sqlite>::new(
            "SELECT effname, repo, family, version, versionclass FROM packages",
        );
        push_name_list(&mut builder, effnames);
        builder.push(" ORDER BY effname, id");

        builder
            .build_query_as::<PackageDataSummarizable>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AdminError::database(e, "Failed to fetch metapackage packages"))
    }
}
