//! Project redirect business logic
//!
//! Admins maintain first-generation redirects by hand. Second-generation
//! redirects are produced by ingestion and are only read here. Lookups always
//! consult both generations independently.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::{
    auth::AdminGrant,
    domain::{packages_to_summary_items, Flash, ProjectSummary, RedirectAction},
    errors::Result,
    storage::{MetapackageData, MetapackageRepository, RedirectRepository},
};

/// Targets of one redirect generation with their display data
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RedirectTargets {
    pub targets: Vec<String>,
    pub metapackages: Vec<MetapackageData>,
    pub summaries: Vec<ProjectSummary>,
}

/// Lookup result across both redirect generations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RedirectLookup {
    pub v1: RedirectTargets,
    pub v2: RedirectTargets,
}

/// Service for managing project redirects
pub struct RedirectService {
    redirects: Arc<dyn RedirectRepository>,
    metapackages: Arc<dyn MetapackageRepository>,
}

impl RedirectService {
    pub fn new(
        redirects: Arc<dyn RedirectRepository>,
        metapackages: Arc<dyn MetapackageRepository>,
    ) -> Self {
        Self { redirects, metapackages }
    }

    /// Add or remove a first-generation redirect.
    ///
    /// Both names must be non-empty, otherwise nothing happens.
    #[instrument(skip(self, _grant), name = "submit_redirect")]
    pub async fn submit(
        &self,
        _grant: &AdminGrant,
        oldname: &str,
        newname: &str,
        action: RedirectAction,
    ) -> Result<Option<Flash>> {
        if oldname.is_empty() || newname.is_empty() {
            return Ok(None);
        }

        match action {
            RedirectAction::Remove => {
                self.redirects.remove_project_redirect(oldname, newname).await?;
                info!(oldname, newname, "Project redirect removed");
                Ok(Some(Flash::success("Redirect removed successfully")))
            }
            RedirectAction::Add => {
                self.redirects.add_project_redirect(oldname, newname, true).await?;
                info!(oldname, newname, "Project redirect added");
                Ok(Some(Flash::success("Redirect added successfully")))
            }
        }
    }

    /// Resolve a project name through both redirect generations
    #[instrument(skip(self, _grant), name = "lookup_redirects")]
    pub async fn lookup(&self, _grant: &AdminGrant, oldname: &str) -> Result<RedirectLookup> {
        if oldname.is_empty() {
            return Ok(RedirectLookup::default());
        }

        let v1 = self.redirects.get_project_redirects(oldname).await?;
        let v2 = self.redirects.get_project_redirects2(oldname).await?;

        Ok(RedirectLookup { v1: self.describe(v1).await?, v2: self.describe(v2).await? })
    }

    async fn describe(&self, targets: Vec<String>) -> Result<RedirectTargets> {
        let metapackages = self.metapackages.get_metapackages(&targets).await?;
        let packages = self.metapackages.get_metapackages_packages(&targets).await?;

        Ok(RedirectTargets { targets, metapackages, summaries: packages_to_summary_items(packages) })
    }
}
