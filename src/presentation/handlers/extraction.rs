use axum::Json;
use axum::body::Bytes;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::application::ports::{InferenceGateway, PdfExtractor, PdfText, WebScraper};
use crate::presentation::state::AppState;

use super::error_response::{error_response, extraction_failure};

pub const PDF_FIELD: &str = "pdf";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadPdfResponse {
    pub text: String,
    pub pages: usize,
    pub filename: String,
    pub size_bytes: u64,
}

#[derive(Deserialize)]
pub struct WebSearchRequest {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Serialize)]
pub struct WebSearchResponse {
    pub content: String,
    pub url: String,
}

pub struct PdfUpload {
    pub filename: String,
    pub data: Bytes,
}

/// Pulls the `pdf` field out of a multipart body; other fields are skipped.
pub async fn read_pdf_upload(multipart: &mut Multipart) -> Result<PdfUpload, Response> {
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => {
                tracing::warn!("Upload request with no file");
                return Err(error_response(
                    StatusCode::BAD_REQUEST,
                    "No file uploaded",
                    None,
                ));
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return Err(error_response(
                    e.status(),
                    "Failed to read upload",
                    Some(e.body_text()),
                ));
            }
        };

        if field.name() != Some(PDF_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or("upload.pdf").to_string();
        let data = field.bytes().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to read file bytes");
            error_response(e.status(), "Failed to read upload", Some(e.body_text()))
        })?;

        tracing::debug!(filename = %filename, bytes = data.len(), "PDF upload received");
        return Ok(PdfUpload { filename, data });
    }
}

/// Accepts only absolute `http`/`https` URLs.
pub fn parse_http_url(raw: Option<&str>) -> Result<Url, Response> {
    let raw = raw.map(str::trim).unwrap_or_default();
    if raw.is_empty() {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            "URL is required",
            None,
        ));
    }

    let url = Url::parse(raw).map_err(|e| {
        error_response(StatusCode::BAD_REQUEST, "Invalid URL", Some(e.to_string()))
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(error_response(
            StatusCode::BAD_REQUEST,
            "Invalid URL",
            Some(format!("unsupported scheme '{}', expected http or https", other)),
        )),
    }
}

pub async fn extract_pdf<P: PdfExtractor>(
    extractor: &P,
    upload: &PdfUpload,
) -> Result<PdfText, Response> {
    extractor
        .extract_text(&upload.data)
        .await
        .map_err(|e| extraction_failure("PDF parse error", &e))
}

pub async fn scrape_url<W: WebScraper>(scraper: &W, url: &Url) -> Result<String, Response> {
    scraper
        .scrape(url)
        .await
        .map_err(|e| extraction_failure("Failed to fetch webpage", &e))
}

#[tracing::instrument(skip(state, multipart))]
pub async fn upload_pdf_handler<G, P, W>(
    State(state): State<AppState<G, P, W>>,
    mut multipart: Multipart,
) -> Response
where
    G: InferenceGateway + 'static,
    P: PdfExtractor + 'static,
    W: WebScraper + 'static,
{
    let upload = match read_pdf_upload(&mut multipart).await {
        Ok(upload) => upload,
        Err(response) => return response,
    };

    let extracted = match extract_pdf(state.pdf_extractor.as_ref(), &upload).await {
        Ok(extracted) => extracted,
        Err(response) => return response,
    };

    tracing::info!(
        filename = %upload.filename,
        pages = extracted.pages,
        chars = extracted.text.len(),
        "PDF parsed"
    );

    (
        StatusCode::OK,
        Json(UploadPdfResponse {
            text: extracted.text,
            pages: extracted.pages,
            filename: upload.filename,
            size_bytes: upload.data.len() as u64,
        }),
    )
        .into_response()
}

#[tracing::instrument(skip(state, request))]
pub async fn websearch_handler<G, P, W>(
    State(state): State<AppState<G, P, W>>,
    Json(request): Json<WebSearchRequest>,
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

    match scrape_url(state.web_scraper.as_ref(), &url).await {
        Ok(content) => (
            StatusCode::OK,
            Json(WebSearchResponse {
                content,
                url: url.to_string(),
            }),
        )
            .into_response(),
        Err(response) => response,
    }
}
