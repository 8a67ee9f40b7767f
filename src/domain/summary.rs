//! Display summaries of a project's packages
//!
//! The redirect page previews every target project with the versions its
//! packages carry. Package status codes are computed upstream during version
//! comparison; here they are only bucketed.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::storage::PackageDataSummarizable;

/// Package status as stored in `packages.versionclass`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageStatus {
    Newest,
    Outdated,
    Ignored,
    Unique,
    Devel,
    Legacy,
    Incorrect,
    Untrusted,
    NoScheme,
    Rolling,
    Unknown,
}

impl PackageStatus {
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => PackageStatus::Newest,
            2 => PackageStatus::Outdated,
            3 => PackageStatus::Ignored,
            4 => PackageStatus::Unique,
            5 => PackageStatus::Devel,
            6 => PackageStatus::Legacy,
            7 => PackageStatus::Incorrect,
            8 => PackageStatus::Untrusted,
            9 => PackageStatus::NoScheme,
            10 => PackageStatus::Rolling,
            _ => PackageStatus::Unknown,
        }
    }

    fn bucket(self) -> SummaryBucket {
        match self {
            PackageStatus::Newest | PackageStatus::Unique | PackageStatus::Devel => {
                SummaryBucket::Newest
            }
            PackageStatus::Outdated | PackageStatus::Legacy => SummaryBucket::Outdated,
            _ => SummaryBucket::Ignored,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SummaryBucket {
    Newest,
    Outdated,
    Ignored,
}

/// One distinct version of a project together with where it was seen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryItem {
    pub version: String,
    pub status: PackageStatus,
    /// Distinct repository families, first seen first
    pub families: Vec<String>,
    /// Number of distinct families carrying this version
    pub spread: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryBuckets {
    pub newest: Vec<SummaryItem>,
    pub outdated: Vec<SummaryItem>,
    pub ignored: Vec<SummaryItem>,
}

impl SummaryBuckets {
    fn items_mut(&mut self, bucket: SummaryBucket) -> &mut Vec<SummaryItem> {
        match bucket {
            SummaryBucket::Newest => &mut self.newest,
            SummaryBucket::Outdated => &mut self.outdated,
            SummaryBucket::Ignored => &mut self.ignored,
        }
    }

    fn add(&mut self, package: &PackageDataSummarizable) {
        let status = PackageStatus::from_code(package.versionclass);
        let items = self.items_mut(status.bucket());

        let position = items
            .iter()
            .position(|item| item.version == package.version && item.status == status);

        let item = match position {
            Some(index) => &mut items[index],
            None => {
                items.push(SummaryItem {
                    version: package.version.clone(),
                    status,
                    families: Vec::new(),
                    spread: 0,
                });
                let last = items.len() - 1;
                &mut items[last]
            }
        };

        if !item.families.contains(&package.family) {
            item.families.push(package.family.clone());
            item.spread = item.families.len();
        }
    }
}

/// Summaries for one project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub effname: String,
    #[serde(flatten)]
    pub buckets: SummaryBuckets,
}

/// Group packages by project, then bucket their versions by status.
///
/// Projects appear in the order their first package was seen, as do items
/// within a bucket.
pub fn packages_to_summary_items<I>(packages: I) -> Vec<ProjectSummary>
where
    I: IntoIterator<Item = PackageDataSummarizable>,
{
    let mut summaries: Vec<ProjectSummary> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for package in packages {
        let slot = *index.entry(package.effname.clone()).or_insert_with(|| {
            summaries.push(ProjectSummary {
                effname: package.effname.clone(),
                buckets: SummaryBuckets::default(),
            });
            summaries.len() - 1
        });
        summaries[slot].buckets.add(&package);
    }

    summaries
}
