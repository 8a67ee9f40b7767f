//! Business logic services
//!
//! This module contains service layer components that encapsulate
//! business logic, separated from HTTP concerns. Every admin operation takes
//! an [`AdminGrant`](crate::auth::AdminGrant).

pub mod name_sample_service;
pub mod redirect_service;
pub mod report_service;

pub use name_sample_service::{NameSampleService, NAME_SAMPLES_BATCH};
pub use redirect_service::{RedirectLookup, RedirectService, RedirectTargets};
pub use report_service::{ReportListing, ReportService};
