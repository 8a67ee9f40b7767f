//! Request extractors for admin pages

use axum::{extract::FromRequestParts, http::request::Parts, response::Response};
use axum_extra::extract::cookie::CookieJar;
use tracing::debug;

use crate::auth::{authorize, AdminGrant};
use crate::domain::SessionId;

use super::routes::{redirect_to, ApiState, ADMIN_PATH};

/// An authenticated admin session.
///
/// Extraction fails with a 302 to the login page when the request has no
/// live session or the session is not logged in. Handlers taking this
/// extractor never run for unauthorized requests.
#[derive(Debug, Clone, Copy)]
pub struct AdminSession {
    pub id: SessionId,
    pub grant: AdminGrant,
}

impl FromRequestParts<ApiState> for AdminSession {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ApiState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);

        let session = state
            .sessions
            .resolve(&jar)
            .and_then(|id| state.sessions.snapshot(id).map(|data| (id, data)));

        match session.and_then(|(id, data)| authorize(&data).map(|grant| (id, grant))) {
            Some((id, grant)) => Ok(AdminSession { id, grant }),
            None => {
                debug!(path = %parts.uri.path(), "Unauthorized admin request");
                Err(redirect_to(ADMIN_PATH))
            }
        }
    }
}
