//! Domain layer
//!
//! Pure types and logic shared by the services and the HTTP layer. Nothing
//! here touches the database or HTTP.
//!
//! ## Module Organization
//!
//! - `id`: Session identifiers
//! - `action`: Closed sets of admin form actions
//! - `flash`: One-shot user notifications
//! - `summary`: Per-project package summaries for the redirect page
//! - `name_sample`: Grouping of name samples by repository

pub mod action;
pub mod flash;
pub mod id;
pub mod name_sample;
pub mod summary;

pub use action::{RedirectAction, ReportAction};
pub use flash::{Flash, FlashLevel};
pub use id::SessionId;
pub use name_sample::{group_by_repository, RepositorySamples};
pub use summary::{
    packages_to_summary_items, PackageStatus, ProjectSummary, SummaryBuckets, SummaryItem,
};
