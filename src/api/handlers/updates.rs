//! Repository update diagnostics page

use axum::{extract::State, Json};
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::extract::AdminSession;
use crate::api::routes::ApiState;
use crate::domain::Flash;
use crate::storage::RepositoryUpdateDiagnostics;

#[derive(Debug, Serialize)]
pub struct UpdatesView {
    pub repositories: Vec<RepositoryUpdateDiagnostics>,
    pub flashes: Vec<Flash>,
}

pub async fn updates_handler(
    State(state): State<ApiState>,
    session: AdminSession,
) -> Result<Json<UpdatesView>, ApiError> {
    let repositories = state.repositories.diagnostics.get_repositories_update_diagnostics().await?;

    Ok(Json(UpdatesView { repositories, flashes: state.sessions.take_flashes(session.id) }))
}
