mod html_text;
mod pdf_adapter;
mod text_sanitizer;
mod web_scraper;

pub use html_text::html_to_text;
pub use pdf_adapter::PdfAdapter;
pub use text_sanitizer::{collapse_whitespace, join_text_runs};
pub use web_scraper::HtmlScraper;
