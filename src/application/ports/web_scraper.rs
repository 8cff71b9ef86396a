use async_trait::async_trait;
use url::Url;

use super::ExtractionError;

/// Fetches a page and reduces it to whitespace-normalized text.
/// Callers must only pass `http`/`https` URLs.
#[async_trait]
pub trait WebScraper: Send + Sync {
    async fn scrape(&self, url: &Url) -> Result<String, ExtractionError>;
}
