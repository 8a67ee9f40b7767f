//! HTTP handlers for the admin pages
//!
//! Views are returned as JSON view models carrying the page data and the
//! flash messages pending for the session.

pub mod admin;
pub mod health;
pub mod name_samples;
pub mod redirects;
pub mod reports;
pub mod updates;

pub use admin::{admin_login_handler, admin_page_handler, LoginForm, LoginView};
pub use health::{health_handler, HealthResponse};
pub use name_samples::{name_samples_handler, NameSamplesView};
pub use redirects::{redirects_get_handler, redirects_post_handler, RedirectForm, RedirectsView};
pub use reports::{
    recent_reports_action_handler, recent_reports_handler, unprocessed_reports_action_handler,
    unprocessed_reports_handler, ReportForm, ReportsView,
};
pub use updates::{updates_handler, UpdatesView};
