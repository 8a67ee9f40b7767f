use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::trace::TraceLayer;

use crate::auth::SessionStore;
use crate::config::AppConfig;
use crate::request_span;
use crate::services::{NameSampleService, RedirectService, ReportService};
use crate::storage::{
    DbPool, MetapackageRepository, NameSampleRepository, RedirectRepository, ReportRepository,
    RepositoryDiagnosticsRepository, SqlxMetapackageRepository, SqlxNameSampleRepository,
    SqlxRedirectRepository, SqlxReportRepository, SqlxRepositoryDiagnosticsRepository,
};

use super::handlers::{
    admin_login_handler, admin_page_handler, health_handler, name_samples_handler,
    recent_reports_action_handler, recent_reports_handler, redirects_get_handler,
    redirects_post_handler, unprocessed_reports_action_handler, unprocessed_reports_handler,
    updates_handler,
};

/// Login page path; unauthorized requests are sent here
pub const ADMIN_PATH: &str = "/admin";

/// Database gateway used by the handlers
#[derive(Clone)]
pub struct Repositories {
    pub reports: Arc<dyn ReportRepository>,
    pub redirects: Arc<dyn RedirectRepository>,
    pub metapackages: Arc<dyn MetapackageRepository>,
    pub diagnostics: Arc<dyn RepositoryDiagnosticsRepository>,
    pub name_samples: Arc<dyn NameSampleRepository>,
}

impl Repositories {
    /// SQLx-backed repositories sharing one pool
    pub fn sqlx(pool: DbPool) -> Self {
        Self {
            reports: Arc::new(SqlxReportRepository::new(pool.clone())),
            redirects: Arc::new(SqlxRedirectRepository::new(pool.clone())),
            metapackages: Arc::new(SqlxMetapackageRepository::new(pool.clone())),
            diagnostics: Arc::new(SqlxRepositoryDiagnosticsRepository::new(pool.clone())),
            name_samples: Arc::new(SqlxNameSampleRepository::new(pool)),
        }
    }
}

#[derive(Clone)]
pub struct ApiState {
    pub config: Arc<AppConfig>,
    pub sessions: Arc<SessionStore>,
    pub repositories: Repositories,
    /// Present when backed by a real database; used by the health check
    pub pool: Option<DbPool>,
}

impl ApiState {
    pub fn new(config: AppConfig, repositories: Repositories) -> Self {
        let sessions = Arc::new(SessionStore::new(&config.session));
        Self { config: Arc::new(config), sessions, repositories, pool: None }
    }

    pub fn with_database(config: AppConfig, pool: DbPool) -> Self {
        let mut state = Self::new(config, Repositories::sqlx(pool.clone()));
        state.pool = Some(pool);
        state
    }

    pub fn report_service(&self) -> ReportService {
        ReportService::new(self.repositories.reports.clone())
    }

    pub fn redirect_service(&self) -> RedirectService {
        RedirectService::new(
            self.repositories.redirects.clone(),
            self.repositories.metapackages.clone(),
        )
    }

    pub fn name_sample_service(&self) -> NameSampleService {
        NameSampleService::new(self.repositories.name_samples.clone())
    }
}

/// 302 to `path`
pub fn redirect_to(path: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, path)]).into_response()
}

pub fn build_router(state: ApiState) -> Router {
    Router::new()
        .route(ADMIN_PATH, get(admin_page_handler).post(admin_login_handler))
        .route(
            "/admin/reports/unprocessed/",
            get(unprocessed_reports_handler).post(unprocessed_reports_action_handler),
        )
        .route(
            "/admin/reports/recent/",
            get(recent_reports_handler).post(recent_reports_action_handler),
        )
        .route("/admin/updates", get(updates_handler))
        .route("/admin/redirects", get(redirects_get_handler).post(redirects_post_handler))
        .route("/admin/name_samples", get(name_samples_handler))
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
            request_span!(request.method(), request.uri().path())
        }))
}
