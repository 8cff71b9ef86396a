use async_trait::async_trait;

use super::ExtractionError;

#[async_trait]
pub trait PdfExtractor: Send + Sync {
    async fn extract_text(&self, data: &[u8]) -> Result<PdfText, ExtractionError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct PdfText {
    /// One line per page, in page order. A page without text is an empty line.
    pub text: String,
    pub pages: usize,
}
