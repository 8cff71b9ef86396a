/// Where extracted text came from. Selects the ingestion template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    Pdf,
    Web,
}

/// Plain text produced by an extractor, tagged with its provenance.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionResult {
    pub text: String,
    pub source_label: String,
    pub kind: SourceKind,
}

impl ExtractionResult {
    /// Labels the text with the uploaded file name and a human readable size.
    pub fn from_pdf(text: String, filename: &str, size_bytes: u64) -> Self {
        Self {
            text,
            source_label: format!("{}, {}", filename, format_size(size_bytes)),
            kind: SourceKind::Pdf,
        }
    }

    pub fn from_web(text: String, url: &str) -> Self {
        Self {
            text,
            source_label: url.to_string(),
            kind: SourceKind::Web,
        }
    }
}

fn format_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;

    let bytes_f = bytes as f64;
    if bytes_f >= MB {
        format!("{:.1} MB", bytes_f / MB)
    } else if bytes_f >= KB {
        format!("{:.1} KB", bytes_f / KB)
    } else {
        format!("{} B", bytes)
    }
}
