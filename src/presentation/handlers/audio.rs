use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::application::services::AudioServiceError;
use crate::domain::AudioUpdate;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct CreateAudioRequest {
    pub language: String,
    pub audio_url: String,
    pub text_content: String,
}

/// PUT body. Clients may echo the language field; the path parameter is
/// authoritative and the body value is ignored.
#[derive(Deserialize)]
pub struct UpdateAudioRequest {
    #[serde(default)]
    #[allow(dead_code)]
    pub language: Option<String>,
    pub audio_url: String,
    pub text_content: String,
}

#[derive(Serialize)]
pub struct DeleteResponse {
    pub message: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state))]
pub async fn list_audio_handler(State(state): State<AppState>) -> Response {
    match state.audio_service.list().await {
        Ok(records) => (StatusCode::OK, Json(records)).into_response(),
        Err(e) => error_response(e),
    }
}

#[tracing::instrument(skip(state))]
pub async fn get_audio_handler(
    State(state): State<AppState>,
    Path(language): Path<String>,
) -> Response {
    match state.audio_service.get(&language).await {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(e) => error_response(e),
    }
}

#[tracing::instrument(skip(state, request), fields(language = %request.language))]
pub async fn create_audio_handler(
    State(state): State<AppState>,
    Json(request): Json<CreateAudioRequest>,
) -> Response {
    match state
        .audio_service
        .create(request.language, request.audio_url, request.text_content)
        .await
    {
        Ok(record) => {
            tracing::info!(language = %record.language, "Audio record created");
            (StatusCode::OK, Json(record)).into_response()
        }
        Err(e) => error_response(e),
    }
}

#[tracing::instrument(skip(state, request))]
pub async fn update_audio_handler(
    State(state): State<AppState>,
    Path(language): Path<String>,
    Json(request): Json<UpdateAudioRequest>,
) -> Response {
    let update = AudioUpdate {
        audio_url: request.audio_url,
        text_content: request.text_content,
    };

    match state.audio_service.update(&language, update).await {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(e) => error_response(e),
    }
}

#[tracing::instrument(skip(state))]
pub async fn delete_audio_handler(
    State(state): State<AppState>,
    Path(language): Path<String>,
) -> Response {
    match state.audio_service.delete(&language).await {
        Ok(()) => {
            tracing::info!(language = %language, "Audio record deleted");
            (
                StatusCode::OK,
                Json(DeleteResponse {
                    message: format!(
                        "Audio file for language '{}' deleted successfully",
                        language
                    ),
                }),
            )
                .into_response()
        }
        Err(e) => error_response(e),
    }
}

/// Domain outcomes map to client errors; anything else is a 500 with the
/// detail kept server-side.
fn error_response(err: AudioServiceError) -> Response {
    let (status, message) = match &err {
        AudioServiceError::NotFound(language) => (
            StatusCode::NOT_FOUND,
            format!("Audio file not found for language: {}", language),
        ),
        AudioServiceError::AlreadyExists(language) => (
            StatusCode::BAD_REQUEST,
            format!("Audio file for language '{}' already exists", language),
        ),
        AudioServiceError::Store(e) => {
            tracing::error!(error = %e, "Audio store operation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            )
        }
    };

    (status, Json(ErrorResponse { error: message })).into_response()
}
