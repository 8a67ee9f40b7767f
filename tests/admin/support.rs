#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, Response, StatusCode},
    Router,
};
use repology_admin::{
    api::{build_router, ApiState, Repositories},
    config::AppConfig,
    errors::Result,
    storage::{
        create_memory_pool, DbPool, MetapackageData, MetapackageRepository, NameSampleData,
        NameSampleRepository, NewReport, PackageDataSummarizable, RedirectRepository, ReportData,
        ReportId, ReportRepository, RepositoryDiagnosticsRepository, RepositoryUpdateDiagnostics,
        SqlxReportRepository,
    },
};
use serde::de::DeserializeOwned;
use tower::ServiceExt;

pub const ADMIN_PASSWORD: &str = "hunter2";

pub struct TestApp {
    pub state: ApiState,
    pub pool: Option<DbPool>,
}

impl TestApp {
    pub fn router(&self) -> Router {
        build_router(self.state.clone())
    }

    pub fn pool(&self) -> &DbPool {
        self.pool.as_ref().expect("test app has a database")
    }

    pub async fn add_report(&self, effname: &str) -> ReportId {
        SqlxReportRepository::new(self.pool().clone())
            .add_report(NewReport { effname: effname.to_string(), ..Default::default() })
            .await
            .expect("add report")
            .id
    }

    /// Log in and return the session cookie
    pub async fn login(&self) -> String {
        let response =
            send_form(self, "/admin", None, &format!("password={}", ADMIN_PASSWORD)).await;
        assert_eq!(response.status(), StatusCode::FOUND);
        session_cookie(&response).expect("login sets a session cookie")
    }
}

fn config(password: Option<&str>) -> AppConfig {
    let mut config = AppConfig::default();
    config.admin.password = password.map(str::to_string);
    config
}

/// App backed by an in-memory database
pub async fn setup_test_app() -> TestApp {
    setup_test_app_with(config(Some(ADMIN_PASSWORD))).await
}

pub async fn setup_test_app_with(config: AppConfig) -> TestApp {
    let pool = create_memory_pool().await.expect("create sqlite pool");
    let state = ApiState::with_database(config, pool.clone());
    TestApp { state, pool: Some(pool) }
}

/// App backed by a gateway that records every call
pub fn setup_recording_app() -> (TestApp, Arc<RecordingGateway>) {
    let gateway = Arc::new(RecordingGateway::default());
    let repositories = Repositories {
        reports: gateway.clone(),
        redirects: gateway.clone(),
        metapackages: gateway.clone(),
        diagnostics: gateway.clone(),
        name_samples: gateway.clone(),
    };
    let state = ApiState::new(config(Some(ADMIN_PASSWORD)), repositories);
    (TestApp { state, pool: None }, gateway)
}

pub async fn send(
    app: &TestApp,
    method: Method,
    path: &str,
    cookie: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }

    let request = builder.body(Body::empty()).expect("build request");
    app.router().oneshot(request).await.expect("request")
}

pub async fn send_form(
    app: &TestApp,
    path: &str,
    cookie: Option<&str>,
    form: &str,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(path)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }

    let request = builder.body(Body::from(form.to_string())).expect("build request");
    app.router().oneshot(request).await.expect("request")
}

pub async fn read_json<T: DeserializeOwned>(response: Response<Body>) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("read body");
    serde_json::from_slice(&bytes).expect("parse json")
}

/// `name=value` part of the Set-Cookie header
pub fn session_cookie(response: &Response<Body>) -> Option<String> {
    let header = response.headers().get(header::SET_COOKIE)?.to_str().ok()?;
    header.split(';').next().map(|pair| pair.trim().to_string())
}

pub fn location(response: &Response<Body>) -> Option<&str> {
    response.headers().get(header::LOCATION)?.to_str().ok()
}

pub fn flash_messages(view: &serde_json::Value) -> Vec<String> {
    view["flashes"]
        .as_array()
        .map(|flashes| {
            flashes
                .iter()
                .filter_map(|flash| flash["message"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

/// Gateway double that records the name of every method invoked
#[derive(Default)]
pub struct RecordingGateway {
    calls: Mutex<Vec<&'static str>>,
}

impl RecordingGateway {
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: &'static str) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl ReportRepository for RecordingGateway {
    async fn delete_report(&self, _id: ReportId) -> Result<()> {
        self.record("delete_report");
        Ok(())
    }

    async fn update_report(&self, _id: ReportId, _reply: &str, _accepted: Option<bool>) -> Result<()> {
        self.record("update_report");
        Ok(())
    }

    async fn get_unprocessed_reports(&self, _limit: i64) -> Result<Vec<ReportData>> {
        self.record("get_unprocessed_reports");
        Ok(Vec::new())
    }

    async fn get_recently_updated_reports(&self, _limit: i64) -> Result<Vec<ReportData>> {
        self.record("get_recently_updated_reports");
        Ok(Vec::new())
    }
}

#[async_trait]
impl RedirectRepository for RecordingGateway {
    async fn add_project_redirect(&self, _old: &str, _new: &str, _is_actual: bool) -> Result<()> {
        self.record("add_project_redirect");
        Ok(())
    }

    async fn remove_project_redirect(&self, _old: &str, _new: &str) -> Result<()> {
        self.record("remove_project_redirect");
        Ok(())
    }

    async fn get_project_redirects(&self, _old: &str) -> Result<Vec<String>> {
        self.record("get_project_redirects");
        Ok(Vec::new())
    }

    async fn get_project_redirects2(&self, _old: &str) -> Result<Vec<String>> {
        self.record("get_project_redirects2");
        Ok(Vec::new())
    }
}

#[async_trait]
impl MetapackageRepository for RecordingGateway {
    async fn get_metapackages(&self, _effnames: &[String]) -> Result<Vec<MetapackageData>> {
        self.record("get_metapackages");
        Ok(Vec::new())
    }

    async fn get_metapackages_packages(
        &self,
        _effnames: &[String],
    ) -> Result<Vec<PackageDataSummarizable>> {
        self.record("get_metapackages_packages");
        Ok(Vec::new())
    }
}

#[async_trait]
impl RepositoryDiagnosticsRepository for RecordingGateway {
    async fn get_repositories_update_diagnostics(&self) -> Result<Vec<RepositoryUpdateDiagnostics>> {
        self.record("get_repositories_update_diagnostics");
        Ok(Vec::new())
    }
}

#[async_trait]
impl NameSampleRepository for RecordingGateway {
    async fn get_name_samples(&self, _limit: i64) -> Result<Vec<NameSampleData>> {
        self.record("get_name_samples");
        Ok(Vec::new())
    }
}
