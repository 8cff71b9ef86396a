mod extraction_error;
mod inference_gateway;
mod pdf_extractor;
mod web_scraper;

pub use extraction_error::ExtractionError;
pub use inference_gateway::{GatewayError, InferenceGateway};
pub use pdf_extractor::{PdfExtractor, PdfText};
pub use web_scraper::WebScraper;
