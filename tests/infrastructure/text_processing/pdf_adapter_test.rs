use chatbridge::application::ports::{ExtractionError, PdfExtractor};
use chatbridge::infrastructure::text_processing::PdfAdapter;
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, ObjectId, Stream, dictionary};

/// Builds an in-memory PDF with one `Tj` run per line on each page.
fn build_pdf(pages: &[&[&str]]) -> Vec<u8> {
    let (mut doc, _) = build_document(pages);
    save(&mut doc)
}

fn build_document(pages: &[&[&str]]) -> (Document, Vec<ObjectId>) {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    let mut page_ids = Vec::new();
    for lines in pages {
        let mut operations = Vec::new();
        for (i, line) in lines.iter().enumerate() {
            operations.push(Operation::new("BT", vec![]));
            operations.push(Operation::new("Tf", vec!["F1".into(), 12.into()]));
            operations.push(Operation::new(
                "Td",
                vec![72.into(), (700 - 20 * i as i64).into()],
            ));
            operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
            operations.push(Operation::new("ET", vec![]));
        }

        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        });
        kids.push(page_id.into());
        page_ids.push(page_id);
    }

    let page_tree = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => pages.len() as i64,
    };
    doc.objects.insert(pages_id, Object::Dictionary(page_tree));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    (doc, page_ids)
}

fn save(doc: &mut Document) -> Vec<u8> {
    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}

/// Gives `page_id` a font without a usable `ToUnicode` map and a `Tf`
/// operator whose font operand is not a name.
fn break_page(doc: &mut Document, page_id: ObjectId) {
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
        "ToUnicode" => 7,
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let content = Content {
        operations: vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec![7.into(), 12.into()]),
            Operation::new("Tj", vec![Object::string_literal("unreadable")]),
            Operation::new("ET", vec![]),
        ],
    };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));

    let page = doc
        .get_object_mut(page_id)
        .and_then(Object::as_dict_mut)
        .unwrap();
    page.set("Contents", content_id);
    page.set("Resources", resources_id);
}

#[tokio::test]
async fn given_single_page_pdf_when_extracting_then_joins_runs_with_spaces() {
    let adapter = PdfAdapter::new();
    let pdf = build_pdf(&[&["Hello", "World"]]);

    let result = adapter.extract_text(&pdf).await.unwrap();

    assert_eq!(result.text, "Hello World");
    assert_eq!(result.pages, 1);
}

#[tokio::test]
async fn given_multi_page_pdf_when_extracting_then_returns_one_line_per_page() {
    let adapter = PdfAdapter::new();
    let pdf = build_pdf(&[&["Page one"], &["Page two", "continued"], &["Page three"]]);

    let result = adapter.extract_text(&pdf).await.unwrap();

    let segments: Vec<&str> = result.text.split('\n').collect();
    assert_eq!(segments, vec!["Page one", "Page two continued", "Page three"]);
    assert_eq!(result.pages, 3);
}

#[tokio::test]
async fn given_pdf_with_blank_pages_when_extracting_then_blank_pages_keep_their_segment() {
    let adapter = PdfAdapter::new();
    let pdf = build_pdf(&[&["Intro"], &[], &["Body"], &[]]);

    let result = adapter.extract_text(&pdf).await.unwrap();

    assert_eq!(result.pages, 4);
    assert_eq!(result.text.split('\n').count(), 4);
    assert_eq!(result.text, "Intro\n\nBody\n");
}

#[tokio::test]
async fn given_corrupt_bytes_when_extracting_then_returns_parse_error() {
    let adapter = PdfAdapter::new();

    let result = adapter.extract_text(b"not a pdf at all").await;

    assert!(matches!(result, Err(ExtractionError::Parse(_))));
}

#[tokio::test]
async fn given_empty_input_when_extracting_then_returns_parse_error() {
    let adapter = PdfAdapter::new();

    let result = adapter.extract_text(&[]).await;

    assert!(matches!(result, Err(ExtractionError::Parse(_))));
}

#[tokio::test]
async fn given_pdf_with_encrypt_entry_when_extracting_then_returns_encrypted_error() {
    let adapter = PdfAdapter::new();
    let (mut doc, _) = build_document(&[&["Secret"]]);
    let encrypt_id = doc.add_object(dictionary! {
        "Filter" => "Unsupported",
        "V" => 1,
        "R" => 2,
        "O" => Object::string_literal(vec![0u8; 32]),
        "U" => Object::string_literal(vec![0u8; 32]),
        "P" => -4,
    });
    doc.trailer.set("Encrypt", encrypt_id);
    let pdf = save(&mut doc);

    let result = adapter.extract_text(&pdf).await;

    assert!(matches!(result, Err(ExtractionError::Encrypted)));
}

#[tokio::test]
async fn given_unreadable_second_page_when_extracting_then_reports_its_zero_based_index() {
    let adapter = PdfAdapter::new();
    let (mut doc, page_ids) = build_document(&[&["Fine"], &["Broken"], &["Never reached"]]);
    break_page(&mut doc, page_ids[1]);
    let pdf = save(&mut doc);

    let result = adapter.extract_text(&pdf).await;

    match result {
        Err(ExtractionError::Page { index, reason }) => {
            assert_eq!(index, 1);
            assert!(!reason.is_empty());
        }
        other => panic!("expected a page failure, got {:?}", other),
    }
}
