//! Name samples page

use axum::{extract::State, Json};
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::extract::AdminSession;
use crate::api::routes::ApiState;
use crate::domain::{Flash, RepositorySamples};

#[derive(Debug, Serialize)]
pub struct NameSamplesView {
    pub samples_by_repo: Vec<RepositorySamples>,
    pub flashes: Vec<Flash>,
}

pub async fn name_samples_handler(
    State(state): State<ApiState>,
    session: AdminSession,
) -> Result<Json<NameSamplesView>, ApiError> {
    let samples_by_repo = state.name_sample_service().grouped(&session.grant).await?;

    Ok(Json(NameSamplesView { samples_by_repo, flashes: state.sessions.take_flashes(session.id) }))
}
