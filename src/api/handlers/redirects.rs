//! Project redirect management page
//!
//! POST submissions render the page directly instead of redirecting, so the
//! lookup for the submitted `oldname` is shown right away.

use axum::{
    extract::{Query, State},
    Form, Json,
};
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::extract::AdminSession;
use crate::api::routes::ApiState;
use crate::domain::{Flash, RedirectAction};
use crate::services::RedirectLookup;

#[derive(Debug, Default, Deserialize)]
pub struct RedirectQuery {
    pub oldname: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RedirectForm {
    pub oldname: Option<String>,
    pub newname: Option<String>,
    pub action: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RedirectsView {
    pub oldname: String,
    #[serde(flatten)]
    pub lookup: RedirectLookup,
    pub flashes: Vec<Flash>,
}

async fn render(
    state: &ApiState,
    session: AdminSession,
    oldname: String,
) -> Result<Json<RedirectsView>, ApiError> {
    let lookup = state.redirect_service().lookup(&session.grant, &oldname).await?;

    Ok(Json(RedirectsView { oldname, lookup, flashes: state.sessions.take_flashes(session.id) }))
}

pub async fn redirects_get_handler(
    State(state): State<ApiState>,
    session: AdminSession,
    Query(query): Query<RedirectQuery>,
) -> Result<Json<RedirectsView>, ApiError> {
    render(&state, session, query.oldname.unwrap_or_default()).await
}

pub async fn redirects_post_handler(
    State(state): State<ApiState>,
    session: AdminSession,
    Form(form): Form<RedirectForm>,
) -> Result<Json<RedirectsView>, ApiError> {
    let oldname = form.oldname.unwrap_or_default();
    let newname = form.newname.unwrap_or_default();
    let action = RedirectAction::parse(form.action.as_deref());

    let flash = state.redirect_service().submit(&session.grant, &oldname, &newname, action).await?;
    if let Some(flash) = flash {
        state.sessions.push_flash(session.id, flash);
    }

    render(&state, session, oldname).await
}
