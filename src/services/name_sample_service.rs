//! Name sample browsing

use std::sync::Arc;
use tracing::instrument;

use crate::{
    auth::AdminGrant,
    domain::{group_by_repository, RepositorySamples},
    errors::Result,
    storage::NameSampleRepository,
};

/// Number of samples shown per page load
pub const NAME_SAMPLES_BATCH: i64 = 10;

pub struct NameSampleService {
    repository: Arc<dyn NameSampleRepository>,
}

impl NameSampleService {
    pub fn new(repository: Arc<dyn NameSampleRepository>) -> Self {
        Self { repository }
    }

    /// One batch of samples grouped by repository
    #[instrument(skip(self, _grant), name = "grouped_name_samples")]
    pub async fn grouped(&self, _grant: &AdminGrant) -> Result<Vec<RepositorySamples>> {
        let samples = self.repository.get_name_samples(NAME_SAMPLES_BATCH).await?;
        Ok(group_by_repository(samples))
    }
}
