use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
    pub message: String,
}

/// Always 200; the `database` field distinguishes `connected`,
/// `fallback_mode` and `error`.
pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let database = state.audio_service.database_status().await;

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            database: database.as_str().to_string(),
            message: "API is running successfully".to_string(),
        }),
    )
}
