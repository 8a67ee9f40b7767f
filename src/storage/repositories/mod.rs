//! Repository modules for data access
//!
//! Each repository exposes an async trait (the seam handlers and services
//! depend on) plus its SQLx implementation.

pub mod diagnostics;
pub mod metapackage;
pub mod name_sample;
pub mod redirect;
pub mod report;

pub use diagnostics::{
    RepositoryDiagnosticsRepository, RepositoryUpdateDiagnostics,
    SqlxRepositoryDiagnosticsRepository,
};
pub use metapackage::{
    MetapackageData, MetapackageRepository, PackageDataSummarizable, SqlxMetapackageRepository,
};
pub use name_sample::{NameSampleData, NameSampleRepository, SqlxNameSampleRepository};
pub use redirect::{RedirectRepository, SqlxRedirectRepository};
pub use report::{NewReport, ReportData, ReportId, ReportRepository, SqlxReportRepository};
