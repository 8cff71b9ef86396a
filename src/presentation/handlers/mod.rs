mod chat;
mod error_response;
mod extraction;
mod health;
mod models;

pub use chat::{
    chat_pdf_handler, chat_web_handler, get_chat_handler, regenerate_handler, send_message_handler,
    set_model_handler,
};
pub use extraction::{upload_pdf_handler, websearch_handler};
pub use health::{health_handler, index_handler, version_handler};
pub use models::{model_status_handler, models_handler};
