use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::{GatewayError, InferenceGateway, PdfExtractor, WebScraper};
use crate::presentation::state::AppState;

use super::error_response::gateway_failure;

#[derive(Serialize)]
pub struct ModelsResponse {
    pub models: Vec<String>,
    pub current: String,
}

#[derive(Serialize)]
pub struct ModelStatusResponse {
    pub model: String,
    pub available: bool,
    pub connected: bool,
}

#[tracing::instrument(skip(state))]
pub async fn models_handler<G, P, W>(State(state): State<AppState<G, P, W>>) -> Response
where
    G: InferenceGateway + 'static,
    P: PdfExtractor + 'static,
    W: WebScraper + 'static,
{
    let current = state.chat_service.current_model().await;

    match state.gateway.list_models().await {
        Ok(models) => {
            tracing::debug!(count = models.len(), "Listed backend models");
            Json(ModelsResponse { models, current }).into_response()
        }
        Err(e) => gateway_failure(&e),
    }
}

/// Whether the session's current model is installed on the backend.
#[tracing::instrument(skip(state))]
pub async fn model_status_handler<G, P, W>(State(state): State<AppState<G, P, W>>) -> Response
where
    G: InferenceGateway + 'static,
    P: PdfExtractor + 'static,
    W: WebScraper + 'static,
{
    let model = state.chat_service.current_model().await;

    match state.gateway.is_model_available(&model).await {
        Ok(available) => Json(ModelStatusResponse {
            model,
            available,
            connected: true,
        })
        .into_response(),
        Err(e @ GatewayError::Unreachable { .. }) => {
            tracing::warn!(error = %e, "Backend unreachable during model check");
            Json(ModelStatusResponse {
                model,
                available: false,
                connected: false,
            })
            .into_response()
        }
        Err(e) => gateway_failure(&e),
    }
}
