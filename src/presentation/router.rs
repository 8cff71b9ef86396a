use axum::Router;
use axum::body::Body;
use axum::extract::DefaultBodyLimit;
use axum::http::HeaderValue;
use axum::routing::{get, post, put};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{InferenceGateway, PdfExtractor, WebScraper};
use crate::infrastructure::observability::{
    make_request_span, propagate_request_id_layer, set_request_id_layer,
};
use crate::presentation::handlers::{
    chat_pdf_handler, chat_web_handler, get_chat_handler, health_handler, index_handler,
    model_status_handler, models_handler, regenerate_handler, send_message_handler,
    set_model_handler, upload_pdf_handler, version_handler, websearch_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<G, P, W>(state: AppState<G, P, W>) -> Router
where
    G: InferenceGateway + 'static,
    P: PdfExtractor + 'static,
    W: WebScraper + 'static,
{
    let upload_limit = DefaultBodyLimit::max(state.settings.extraction.max_pdf_size_bytes());
    let cors = cors_layer(&state.settings.server.allowed_origins);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(make_request_span::<Body>)
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/api/version", get(version_handler))
        .route("/api/models", get(models_handler::<G, P, W>))
        .route("/api/models/status", get(model_status_handler::<G, P, W>))
        .route(
            "/api/upload-pdf",
            post(upload_pdf_handler::<G, P, W>).layer(upload_limit.clone()),
        )
        .route("/api/websearch", post(websearch_handler::<G, P, W>))
        .route("/api/chat", get(get_chat_handler::<G, P, W>))
        .route("/api/chat/messages", post(send_message_handler::<G, P, W>))
        .route("/api/chat/regenerate", post(regenerate_handler::<G, P, W>))
        .route("/api/chat/model", put(set_model_handler::<G, P, W>))
        .route(
            "/api/chat/pdf",
            post(chat_pdf_handler::<G, P, W>).layer(upload_limit),
        )
        .route("/api/chat/web", post(chat_web_handler::<G, P, W>))
        .layer(trace_layer)
        .layer(propagate_request_id_layer())
        .layer(set_request_id_layer())
        .layer(cors)
        .with_state(state)
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(origin = %origin, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}
