use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::{DateTime, Utc};
use serde::Serialize;

pub const SERVICE_NAME: &str = "chatbridge";

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub service: String,
}

#[derive(Serialize)]
pub struct VersionResponse {
    pub version: String,
    pub status: String,
}

#[derive(Serialize)]
pub struct ServiceIndexResponse {
    pub status: String,
    pub endpoints: Vec<&'static str>,
}

pub async fn health_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            service: SERVICE_NAME.to_string(),
        }),
    )
}

pub async fn version_handler() -> impl IntoResponse {
    Json(VersionResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
        status: "running".to_string(),
    })
}

pub async fn index_handler() -> impl IntoResponse {
    Json(ServiceIndexResponse {
        status: format!("{} running", SERVICE_NAME),
        endpoints: vec![
            "/health",
            "/api/version",
            "/api/models",
            "/api/models/status",
            "/api/upload-pdf",
            "/api/websearch",
            "/api/chat",
            "/api/chat/messages",
            "/api/chat/regenerate",
            "/api/chat/model",
            "/api/chat/pdf",
            "/api/chat/web",
        ],
    })
}
