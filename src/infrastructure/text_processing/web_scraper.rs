use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::application::ports::{ExtractionError, WebScraper};

use super::html_text::html_to_text;
use super::text_sanitizer::collapse_whitespace;

const USER_AGENT: &str = concat!("chatbridge/", env!("CARGO_PKG_VERSION"));

pub struct HtmlScraper {
    client: Client,
}

impl HtmlScraper {
    pub fn new(timeout: Duration) -> Result<Self, ExtractionError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ExtractionError::Fetch {
                url: String::new(),
                reason: e.to_string(),
            })?;

        Ok(Self { client })
    }
}

/// Servers often omit the header, so a missing type is treated as HTML.
fn looks_like_html(content_type: Option<&str>) -> bool {
    content_type.is_none_or(|ct| ct.to_ascii_lowercase().contains("html"))
}

#[async_trait]
impl WebScraper for HtmlScraper {
    #[tracing::instrument(skip(self), fields(url = %url))]
    async fn scrape(&self, url: &Url) -> Result<String, ExtractionError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| ExtractionError::Fetch {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(ExtractionError::HttpStatus {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ExtractionError::Fetch {
                url: url.to_string(),
                reason: e.to_string(),
            })?;
        let body = String::from_utf8_lossy(&bytes);

        let text = if looks_like_html(content_type.as_deref()) {
            html_to_text(&body)
        } else {
            tracing::debug!(content_type = ?content_type, "Treating non-HTML body as raw text");
            collapse_whitespace(&body)
        };

        tracing::info!(chars = text.len(), "Web page text extracted");
        Ok(text)
    }
}
