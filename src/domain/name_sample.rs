//! Grouping of name samples by repository

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::storage::NameSampleData;

/// Samples sharing a repository, in retrieval order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySamples {
    pub repo: String,
    pub samples: Vec<NameSampleData>,
}

/// Group samples by repository. Groups are ordered by the first appearance of
/// their repository.
pub fn group_by_repository<I>(samples: I) -> Vec<RepositorySamples>
where
    I: IntoIterator<Item = NameSampleData>,
{
    let mut groups: Vec<RepositorySamples> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for sample in samples {
        let slot = match index.get(&sample.repo) {
            Some(&slot) => slot,
            None => {
                groups.push(RepositorySamples { repo: sample.repo.clone(), samples: Vec::new() });
                index.insert(sample.repo.clone(), groups.len() - 1);
                groups.len() - 1
            }
        };
        groups[slot].samples.push(sample);
    }

    groups
}
