#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("failed to parse PDF: {0}")]
    Parse(String),
    #[error("PDF is encrypted and cannot be read")]
    Encrypted,
    #[error("failed to extract text from page {index}: {reason}")]
    Page { index: usize, reason: String },
    #[error("PDF extraction timed out")]
    Timeout,
    #[error("failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },
    #[error("{url} responded with HTTP {status}")]
    HttpStatus { url: String, status: u16 },
}
