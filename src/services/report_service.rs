//! Report triage business logic
//!
//! Listing and acting on user-submitted reports, separated from HTTP
//! concerns.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::{
    auth::AdminGrant,
    domain::{Flash, ReportAction},
    errors::Result,
    storage::{ReportData, ReportId, ReportRepository},
};

/// The two report listings offered by the admin pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportListing {
    /// Reports with no outcome yet, newest first
    Unprocessed,
    /// All reports, most recently modified first
    Recent,
}

impl ReportListing {
    /// Path the listing is served from
    pub fn path(self) -> &'static str {
        match self {
            ReportListing::Unprocessed => "/admin/reports/unprocessed/",
            ReportListing::Recent => "/admin/reports/recent/",
        }
    }
}

/// Service for report triage
pub struct ReportService {
    repository: Arc<dyn ReportRepository>,
}

impl ReportService {
    pub fn new(repository: Arc<dyn ReportRepository>) -> Self {
        Self { repository }
    }

    /// Fetch one page of a listing
    #[instrument(skip(self, _grant), name = "list_reports")]
    pub async fn list(
        &self,
        _grant: &AdminGrant,
        listing: ReportListing,
        limit: i64,
    ) -> Result<Vec<ReportData>> {
        match listing {
            ReportListing::Unprocessed => self.repository.get_unprocessed_reports(limit).await,
            ReportListing::Recent => self.repository.get_recently_updated_reports(limit).await,
        }
    }

    /// Apply an admin action to a report.
    ///
    /// Without a report id nothing happens and no flash is produced.
    #[instrument(skip(self, _grant, reply), name = "apply_report_action")]
    pub async fn apply_action(
        &self,
        _grant: &AdminGrant,
        id: Option<ReportId>,
        reply: &str,
        action: ReportAction,
    ) -> Result<Option<Flash>> {
        let Some(id) = id else {
            return Ok(None);
        };

        if action == ReportAction::Delete {
            self.repository.delete_report(id).await?;
            info!(report_id = id, "Report removed");
            return Ok(Some(Flash::success("Report removed successfully")));
        }

        self.repository.update_report(id, reply, action.outcome()).await?;
        info!(report_id = id, ?action, "Report updated");
        Ok(Some(Flash::success("Report updated successfully")))
    }
}
