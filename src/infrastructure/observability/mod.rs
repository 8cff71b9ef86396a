mod init_tracing;
mod prompt_sanitizer;
mod request_id;
mod tracing_config;

pub use init_tracing::init_tracing;
pub use prompt_sanitizer::sanitize_prompt;
pub use request_id::{
    REQUEST_ID_HEADER, make_request_span, propagate_request_id_layer, set_request_id_layer,
};
pub use tracing_config::TracingConfig;
