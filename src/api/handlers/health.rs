//! Health check endpoint for monitoring and readiness probes

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::api::routes::ApiState;
use crate::storage::check_connection;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// "ok" or "unavailable"
    pub status: String,
    /// Database connectivity, omitted when the service runs without a pool
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
}

/// Returns 200 OK when the service and its database are reachable, 503 when
/// the database check fails. Unauthenticated.
pub async fn health_handler(State(state): State<ApiState>) -> (StatusCode, Json<HealthResponse>) {
    let Some(pool) = state.pool.as_ref() else {
        return (StatusCode::OK, Json(HealthResponse { status: "ok".to_string(), database: None }));
    };

    match check_connection(pool).await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse { status: "ok".to_string(), database: Some("ok".to_string()) }),
        ),
        Err(e) => {
            warn!(error = %e, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unavailable".to_string(),
                    database: Some("error".to_string()),
                }),
            )
        }
    }
}
