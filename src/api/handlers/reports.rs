//! Report triage pages

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Form, Json,
};
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::extract::AdminSession;
use crate::api::routes::{redirect_to, ApiState};
use crate::domain::{Flash, ReportAction};
use crate::services::ReportListing;
use crate::storage::{ReportData, ReportId};

#[derive(Debug, Default, Deserialize)]
pub struct ReportForm {
    pub id: Option<String>,
    pub reply: Option<String>,
    pub action: Option<String>,
}

impl ReportForm {
    /// Report id, if present and numeric
    pub fn report_id(&self) -> Option<ReportId> {
        self.id.as_deref().and_then(|id| id.trim().parse().ok())
    }
}

#[derive(Debug, Serialize)]
pub struct ReportsView {
    pub listing: ReportListing,
    pub reports: Vec<ReportData>,
    pub flashes: Vec<Flash>,
}

async fn render(
    state: ApiState,
    session: AdminSession,
    listing: ReportListing,
) -> Result<Json<ReportsView>, ApiError> {
    let reports = state
        .report_service()
        .list(&session.grant, listing, state.config.admin.reports_per_page)
        .await?;

    Ok(Json(ReportsView { listing, reports, flashes: state.sessions.take_flashes(session.id) }))
}

async fn act(
    state: ApiState,
    session: AdminSession,
    listing: ReportListing,
    form: ReportForm,
) -> Result<Response, ApiError> {
    let action = ReportAction::parse(form.action.as_deref());
    let reply = form.reply.as_deref().unwrap_or_default();

    let flash = state
        .report_service()
        .apply_action(&session.grant, form.report_id(), reply, action)
        .await?;
    if let Some(flash) = flash {
        state.sessions.push_flash(session.id, flash);
    }

    Ok(redirect_to(listing.path()))
}

pub async fn unprocessed_reports_handler(
    State(state): State<ApiState>,
    session: AdminSession,
) -> Result<Json<ReportsView>, ApiError> {
    render(state, session, ReportListing::Unprocessed).await
}

pub async fn recent_reports_handler(
    State(state): State<ApiState>,
    session: AdminSession,
) -> Result<Json<ReportsView>, ApiError> {
    render(state, session, ReportListing::Recent).await
}

pub async fn unprocessed_reports_action_handler(
    State(state): State<ApiState>,
    session: AdminSession,
    Form(form): Form<ReportForm>,
) -> Result<Response, ApiError> {
    act(state, session, ReportListing::Unprocessed, form).await
}

pub async fn recent_reports_action_handler(
    State(state): State<ApiState>,
    session: AdminSession,
    Form(form): Form<ReportForm>,
) -> Result<Response, ApiError> {
    act(state, session, ReportListing::Recent, form).await
}
