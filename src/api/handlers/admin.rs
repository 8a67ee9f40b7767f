//! Admin login page

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Form, Json,
};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};

use crate::api::routes::{redirect_to, ApiState, ADMIN_PATH};
use crate::auth::attempt_login;
use crate::domain::Flash;
use crate::services::ReportListing;

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    /// Absent when the logout button is pressed
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LoginView {
    pub admin: bool,
    pub flashes: Vec<Flash>,
}

/// Logged-in admins go straight to the unprocessed reports; everyone else
/// gets the login view with any pending messages.
pub async fn admin_page_handler(State(state): State<ApiState>, jar: CookieJar) -> Response {
    let Some(id) = state.sessions.resolve(&jar) else {
        return Json(LoginView { admin: false, flashes: Vec::new() }).into_response();
    };

    if state.sessions.is_admin(id) {
        return redirect_to(ReportListing::Unprocessed.path());
    }

    Json(LoginView { admin: false, flashes: state.sessions.take_flashes(id) }).into_response()
}

/// Successful logins always move to a fresh session id; the id the browser
/// presented before authenticating is retired.
pub async fn admin_login_handler(
    State(state): State<ApiState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Response {
    let outcome = attempt_login(&state.config.admin, form.password.as_deref());

    let (id, jar) = if outcome.admin == Some(true) {
        let id = state.sessions.rotate(state.sessions.resolve(&jar), true);
        (id, jar.add(state.sessions.session_cookie(id)))
    } else {
        let (id, jar) = state.sessions.ensure(jar);
        if let Some(admin) = outcome.admin {
            state.sessions.set_admin(id, admin);
        }
        (id, jar)
    };
    state.sessions.push_flash(id, outcome.flash);

    (jar, redirect_to(ADMIN_PATH)).into_response()
}
