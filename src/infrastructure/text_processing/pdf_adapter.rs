use std::time::Duration;

use async_trait::async_trait;
use lopdf::Document;

use crate::application::ports::{ExtractionError, PdfExtractor, PdfText};

use super::text_sanitizer::join_text_runs;

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);
const ENCRYPT_KEY: &[u8] = b"/Encrypt";

#[derive(Default)]
pub struct PdfAdapter;

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }

    fn extract_pages(data: &[u8]) -> Result<Vec<String>, ExtractionError> {
        let doc = Document::load_mem(data).map_err(|e| {
            if declares_encryption(data) {
                tracing::warn!(error = %e, "Encrypted PDF could not be loaded");
                ExtractionError::Encrypted
            } else {
                ExtractionError::Parse(e.to_string())
            }
        })?;

        if doc.is_encrypted() {
            return Err(ExtractionError::Encrypted);
        }

        let pages = doc.get_pages();
        let mut texts = Vec::with_capacity(pages.len());

        for (index, page_number) in pages.keys().enumerate() {
            let raw = doc
                .extract_text(&[*page_number])
                .map_err(|e| ExtractionError::Page {
                    index,
                    reason: e.to_string(),
                })?;
            texts.push(join_text_runs(&raw));
        }

        Ok(texts)
    }
}

/// Loading may fail before the trailer is inspected, so the raw bytes are
/// checked for an `/Encrypt` entry as well.
fn declares_encryption(data: &[u8]) -> bool {
    data.windows(ENCRYPT_KEY.len()).any(|w| w == ENCRYPT_KEY)
}

#[async_trait]
impl PdfExtractor for PdfAdapter {
    #[tracing::instrument(skip(self, data), fields(bytes = data.len()))]
    async fn extract_text(&self, data: &[u8]) -> Result<PdfText, ExtractionError> {
        let owned = data.to_vec();

        let pages = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || Self::extract_pages(&owned)),
        )
        .await
        .map_err(|_| ExtractionError::Timeout)?
        .map_err(|e| ExtractionError::Parse(format!("task join error: {e}")))??;

        let page_count = pages.len();
        tracing::info!(page_count, "PDF text extraction complete");

        Ok(PdfText {
            text: pages.join("\n"),
            pages: page_count,
        })
    }
}
