use std::sync::LazyLock;

use scraper::{Html, Selector};

use super::text_sanitizer::collapse_whitespace;

static BODY: LazyLock<Selector> = LazyLock::new(|| Selector::parse("body").unwrap());

const SKIPPED_ELEMENTS: [&str; 3] = ["script", "style", "head"];

/// Text content of the document body with `script`, `style` and `head`
/// subtrees removed, whitespace collapsed.
pub fn html_to_text(html: &str) -> String {
    let document = Html::parse_document(html);

    let Some(body) = document.select(&BODY).next() else {
        return String::new();
    };

    let mut raw = String::new();
    for node in body.descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };

        let skipped = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|el| SKIPPED_ELEMENTS.contains(&el.name()))
        });

        if !skipped {
            raw.push_str(text);
        }
    }

    collapse_whitespace(&raw)
}
