use crate::domain::{ExtractionResult, SourceKind};

/// Wraps extracted text in the instruction template for its source kind.
/// The text is forwarded in full; no truncation happens here.
pub fn format_ingested(result: &ExtractionResult) -> String {
    match result.kind {
        SourceKind::Pdf => format!(
            "Please analyse the following text from my PDF file ({}):\n\n{}",
            result.source_label, result.text
        ),
        SourceKind::Web => format!(
            "Please analyse the following content from the webpage {}:\n\n{}",
            result.source_label, result.text
        ),
    }
}
