//! Report repository for admin triage of user-submitted reports

use crate::errors::{AdminError, Result};
use crate::storage::DbPool;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tracing::instrument;

/// Report identifier as stored in the database
pub type ReportId = i64;

/// A user-submitted report
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct ReportData {
    pub id: ReportId,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    pub effname: String,
    pub need_verignore: bool,
    pub need_split: bool,
    pub need_merge: bool,
    pub need_vuln: bool,
    pub comment: Option<String>,
    pub reply: Option<String>,
    /// `None` while the report is unprocessed
    pub accepted: Option<bool>,
}

/// Fields of a report as submitted from the public site
#[derive(Debug, Clone, Default)]
pub struct NewReport {
    pub effname: String,
    pub need_verignore: bool,
    pub need_split: bool,
    pub need_merge: bool,
    pub need_vuln: bool,
    pub comment: Option<String>,
}

const REPORT_COLUMNS: &str = "id, created, updated, effname, need_verignore, need_split, \
     need_merge, need_vuln, comment, reply, accepted";

#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// Delete a report. Deleting a missing report is not an error.
    async fn delete_report(&self, id: ReportId) -> Result<()>;

    /// Store the admin reply and outcome, refreshing `updated`
    async fn update_report(&self, id: ReportId, reply: &str, accepted: Option<bool>)
        -> Result<()>;

    /// Reports nobody has accepted or rejected yet, newest first
    async fn get_unprocessed_reports(&self, limit: i64) -> Result<Vec<ReportData>>;

    /// Reports ordered by last modification, most recent first
    async fn get_recently_updated_reports(&self, limit: i64) -> Result<Vec<ReportData>>;
}

#[derive(Debug, Clone)]
pub struct SqlxReportRepository {
    pool: DbPool,
}

impl SqlxReportRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Insert a report the way the public report form does
    #[instrument(skip(self, report), fields(effname = %report.effname), name = "db_add_report")]
    pub async fn add_report(&self, report: NewReport) -> Result<ReportData> {
        let now = Utc::now();
        let query = format!(
            "INSERT INTO reports (created, updated, effname, need_verignore, need_split, \
             need_merge, need_vuln, comment) VALUES ($1, $1, $2, $3, $4, $5, $6, $7) \
             RETURNING {REPORT_COLUMNS}"
        );

        sqlx::query_as::<_, ReportData>(&query)
            .bind(now)
            .bind(&report.effname)
            .bind(report.need_verignore)
            .bind(report.need_split)
            .bind(report.need_merge)
            .bind(report.need_vuln)
            .bind(&report.comment)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AdminError::database(e, "Failed to add report"))
    }

    /// Fetch a single report
    #[instrument(skip(self), name = "db_get_report")]
    pub async fn get_report(&self, id: ReportId) -> Result<ReportData> {
        let query = format!("SELECT {REPORT_COLUMNS} FROM reports WHERE id = $1");

        sqlx::query_as::<_, ReportData>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AdminError::database(e, format!("Failed to get report {}", id)))?
            .ok_or_else(|| AdminError::not_found("report", id.to_string()))
    }
}

#[async_trait]
impl ReportRepository for SqlxReportRepository {
    #[instrument(skip(self), name = "db_delete_report")]
    async fn delete_report(&self, id: ReportId) -> Result<()> {
        let result = sqlx::query("DELETE FROM reports WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AdminError::database(e, format!("Failed to delete report {}", id)))?;

        tracing::debug!(report_id = id, rows = result.rows_affected(), "Report deleted");
        Ok(())
    }

    #[instrument(skip(self, reply), fields(reply_len = reply.len()), name = "db_update_report")]
    async fn update_report(
        &self,
        id: ReportId,
        reply: &str,
        accepted: Option<bool>,
    ) -> Result<()> {
        let result =
            sqlx::query("UPDATE reports SET reply = $1, accepted = $2, updated = $3 WHERE id = $4")
                .bind(reply)
                .bind(accepted)
                .bind(Utc::now())
                .bind(id)
                .execute(&self.pool)
                .await
                .map_err(|e| AdminError::database(e, format!("Failed to update report {}", id)))?;

        tracing::debug!(report_id = id, rows = result.rows_affected(), "Report updated");
        Ok(())
    }

    #[instrument(skip(self), name = "db_get_unprocessed_reports")]
    async fn get_unprocessed_reports(&self, limit: i64) -> Result<Vec<ReportData>> {
        let query = format!(
            "SELECT {REPORT_COLUMNS} FROM reports WHERE accepted IS NULL \
             ORDER BY created DESC, id DESC LIMIT $1"
        );

        sqlx::query_as::<_, ReportData>(&query)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AdminError::database(e, "Failed to list unprocessed reports"))
    }

    #[instrument(skip(self), name = "db_get_recently_updated_reports")]
    async fn get_recently_updated_reports(&self, limit: i64) -> Result<Vec<ReportData>> {
        let query = format!(
            "SELECT {REPORT_COLUMNS} FROM reports ORDER BY updated DESC, id DESC LIMIT $1"
        );

        sqlx::query_as::<_, ReportData>(&query)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AdminError::database(e, "Failed to list recently updated reports"))
    }
}
