use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::ports::{InferenceGateway, PdfExtractor, WebScraper};
use crate::domain::{ChatSession, ExtractionResult, Message, SessionError};
use crate::presentation::state::AppState;

use super::error_response::session_failure;
use super::extraction::{extract_pdf, parse_http_url, read_pdf_upload, scrape_url};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub role: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_time_ms: Option<u64>,
}

#[derive(Serialize)]
pub struct ChatSessionResponse {
    pub model: String,
    pub status: String,
    pub busy: bool,
    pub messages: Vec<MessageResponse>,
}

#[derive(Deserialize)]
pub struct SendMessageRequest {
    pub content: String,
}

#[derive(Deserialize)]
pub struct RegenerateRequest {
    pub index: usize,
}

#[derive(Deserialize)]
pub struct SetModelRequest {
    pub model: String,
}

#[derive(Deserialize)]
pub struct IngestUrlRequest {
    #[serde(default)]
    pub url: Option<String>,
}

impl From<&Message> for MessageResponse {
    fn from(message: &Message) -> Self {
        Self {
            role: message.role.as_str().to_string(),
            content: message.content.clone(),
            timestamp: message.created_at,
            processing_time_ms: message.processing_time.map(|d| d.as_millis() as u64),
        }
    }
}

impl From<&ChatSession> for ChatSessionResponse {
    fn from(session: &ChatSession) -> Self {
        Self {
            model: session.current_model().to_string(),
            status: session.status().as_str().to_string(),
            busy: session.is_busy(),
            messages: session.messages().iter().map(MessageResponse::from).collect(),
        }
    }
}

async fn session_response<G, P, W>(state: &AppState<G, P, W>) -> Response
where
    G: InferenceGateway + 'static,
    P: PdfExtractor + 'static,
    W: WebScraper + 'static,
{
    let session = state.chat_service.snapshot().await;
    (StatusCode::OK, Json(ChatSessionResponse::from(&session))).into_response()
}

async fn after_turn<G, P, W>(
    state: &AppState<G, P, W>,
    outcome: Result<(), SessionError>,
) -> Response
where
    G: InferenceGateway + 'static,
    P: PdfExtractor + 'static,
    W: WebScraper + 'static,
{
    match outcome {
        Ok(()) => session_response(state).await,
        Err(e) => session_failure(&e),
    }
}

pub async fn get_chat_handler<G, P, W>(State(state): State<AppState<G, P, W>>) -> Response
where
    G: InferenceGateway + 'static,
    P: PdfExtractor + 'static,
    W: WebScraper + 'static,
{
    session_response(&state).await
}

#[tracing::instrument(skip(state, request))]
pub async fn send_message_handler<G, P, W>(
    State(state): State<AppState<G, P, W>>,
    Json(request): Json<SendMessageRequest>,
) -> Response
where
    G: InferenceGateway + 'static,
    P: PdfExtractor + 'static,
    W: WebScraper + 'static,
{
    let outcome = state.chat_service.send_message(request.content).await;
    after_turn(&state, outcome).await
}

#[tracing::instrument(skip(state, request), fields(index = request.index))]
pub async fn regenerate_handler<G, P, W>(
    State(state): State<AppState<G, P, W>>,
    Json(request): Json<RegenerateRequest>,
) -> Response
where
    G: InferenceGateway + 'static,
    P: PdfExtractor + 'static,
    W: WebScraper + 'static,
{
    let outcome = state
        .chat_service
        .regenerate(request.index)
        .await
        .map(|_| ());
    after_turn(&state, outcome).await
}

#[tracing::instrument(skip(state, request), fields(model = %request.model))]
pub async fn set_model_handler<G, P, W>(
    State(state): State<AppState<G, P, W>>,
    Json(request): Json<SetModelRequest>,
) -> Response
where
    G: InferenceGateway + 'static,
    P: PdfExtractor + 'static,
    W: WebScraper + 'static,
{
    let outcome = state.chat_service.set_model(&request.model).await;
    after_turn(&state, outcome).await
}

/// Extracts an uploaded PDF and sends it as a user turn. Extraction
/// failures are returned directly and leave the conversation untouched.
#[tracing::instrument(skip(state, multipart))]
pub async fn chat_pdf_handler<G, P, W>(
    State(state): State<AppState<G, P, W>>,
    mut multipart: Multipart,
) -> Response
where
    G: InferenceGateway + 'static,
    P: PdfExtractor + 'static,
    W: WebScraper + 'static,
{
    if state.chat_service.is_busy().await {
        return session_failure(&SessionError::Busy);
    }

    let upload = match read_pdf_upload(&mut multipart).await {
        Ok(upload) => upload,
        Err(response) => return response,
    };

    let extracted = match extract_pdf(state.pdf_extractor.as_ref(), &upload).await {
        Ok(extracted) => extracted,
        Err(response) => return response,
    };

    let result =
        ExtractionResult::from_pdf(extracted.text, &upload.filename, upload.data.len() as u64);
    let outcome = state.chat_service.ingest(&result).await;
    after_turn(&state, outcome).await
}

#[tracing::instrument(skip(state, request))]
pub async fn chat_web_handler<G, P, W>(
    State(state): State<AppState<G, P, W>>,
    Json(request): Json<IngestUrlRequest>,
) -> Response
where
    G: InferenceGateway + 'static,
    P: PdfExtractor + 'static,
    W: WebScraper + 'static,
{
    let url = match parse_http_url(request.url.as_deref()) {
        Ok(url) => url,
        Err(response) => return response,
    };

    if state.chat_service.is_busy().await {
        return session_failure(&SessionError::Busy);
    }

    let content = match scrape_url(state.web_scraper.as_ref(), &url).await {
        Ok(content) => content,
        Err(response) => return response,
    };

    let result = ExtractionResult::from_web(content, url.as_str());
    let outcome = state.chat_service.ingest(&result).await;
    after_turn(&state, outcome).await
}
