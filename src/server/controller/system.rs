use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use migration::{Migrator, MigratorTrait};

use crate::{
    model::api::HealthDto,
    server::{error::AppError, state::AppState},
};

/// Tag for grouping utility endpoints in OpenAPI documentation
pub static SYSTEM_TAG: &str = "system";

/// Liveness check.
#[utoipa::path(
    get,
    path = "/health",
    tag = SYSTEM_TAG,
    responses(
        (status = 200, description = "Service is up", body = HealthDto)
    ),
)]
pub async fn health() -> impl IntoResponse {
    Json(HealthDto {
        status: "ok".to_string(),
    })
}

/// Applies any pending schema migrations.
///
/// Migrations also run at startup; this endpoint exists for deployments that swap the
/// database file underneath a running server.
///
/// # Returns
/// - `200 OK` - Plain-text confirmation
/// - `500 Internal Server Error` - Migration failed
#[utoipa::path(
    get,
    path = "/init-db",
    tag = SYSTEM_TAG,
    responses(
        (status = 200, description = "Schema is up to date", body = String, content_type = "text/plain"),
        (status = 500, description = "Migration failed", body = String, content_type = "text/plain")
    ),
)]
pub async fn init_db(State(state): State<AppState>) -> Response {
    match Migrator::up(&state.db, None).await {
        Ok(()) => {
            tracing::info!("Database schema initialized");
            (StatusCode::OK, "Database initialized").into_response()
        }
        Err(e) => AppError::from(e).into_plain_response(),
    }
}

/// Fallback for unmatched routes.
pub async fn not_found() -> Response {
    AppError::NotFound("Not found".to_string()).into_response()
}
