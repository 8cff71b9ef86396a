use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::{ExtractionError, GatewayError};
use crate::domain::SessionError;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
}

pub fn error_response(status: StatusCode, error: &str, details: Option<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
            details,
            status_code: None,
        }),
    )
        .into_response()
}

pub fn extraction_failure(error: &str, cause: &ExtractionError) -> Response {
    tracing::error!(error = %cause, "{}", error);
    error_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        error,
        Some(cause.to_string()),
    )
}

pub fn session_failure(cause: &SessionError) -> Response {
    let status = match cause {
        SessionError::Busy => StatusCode::CONFLICT,
        SessionError::EmptyMessage
        | SessionError::EmptyModel
        | SessionError::IndexOutOfRange { .. } => StatusCode::BAD_REQUEST,
    };
    tracing::warn!(error = %cause, "Chat request rejected");
    error_response(status, &cause.to_string(), None)
}

pub fn gateway_failure(cause: &GatewayError) -> Response {
    tracing::error!(error = %cause, status = ?cause.status_code(), "Inference backend call failed");
    (
        StatusCode::BAD_GATEWAY,
        Json(ErrorResponse {
            error: "Inference backend request failed".to_string(),
            details: Some(cause.to_string()),
            status_code: cause.status_code(),
        }),
    )
        .into_response()
}
