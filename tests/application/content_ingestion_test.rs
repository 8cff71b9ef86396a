use chatbridge::application::services::format_ingested;
use chatbridge::domain::{ExtractionResult, SourceKind};

#[test]
fn given_pdf_result_when_formatting_then_includes_text_and_pdf_attribution() {
    let result = ExtractionResult {
        text: "hello".to_string(),
        source_label: "doc.pdf".to_string(),
        kind: SourceKind::Pdf,
    };

    let prompt = format_ingested(&result);

    assert!(prompt.contains("hello"));
    assert!(prompt.contains("from my PDF file (doc.pdf)"));
}

#[test]
fn given_web_result_when_formatting_then_references_webpage_url() {
    let result = ExtractionResult::from_web("Some article".to_string(), "https://example.com/a");

    let prompt = format_ingested(&result);

    assert_eq!(
        prompt,
        "Please analyse the following content from the webpage https://example.com/a:\n\nSome article"
    );
}

#[test]
fn given_large_text_when_formatting_then_content_is_not_truncated() {
    let text = "word ".repeat(50_000);
    let result = ExtractionResult::from_pdf(text.clone(), "big.pdf", 5 * 1024 * 1024);

    let prompt = format_ingested(&result);

    assert!(prompt.ends_with(&text));
}

#[test]
fn given_pdf_sizes_when_building_result_then_label_uses_human_readable_size() {
    assert_eq!(
        ExtractionResult::from_pdf(String::new(), "a.pdf", 512).source_label,
        "a.pdf, 512 B"
    );
    assert_eq!(
        ExtractionResult::from_pdf(String::new(), "b.pdf", 2048).source_label,
        "b.pdf, 2.0 KB"
    );
    assert_eq!(
        ExtractionResult::from_pdf(String::new(), "c.pdf", 3 * 1024 * 1024 + 512 * 1024).source_label,
        "c.pdf, 3.5 MB"
    );
}
