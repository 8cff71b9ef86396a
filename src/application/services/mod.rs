mod chat_service;
mod content_ingestion;

pub use chat_service::{ChatService, describe_failure};
pub use content_ingestion::format_ingested;
