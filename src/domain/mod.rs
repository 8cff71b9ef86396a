mod chat_session;
mod extraction_result;
mod message;
mod message_role;
mod session_error;
mod session_status;

pub use chat_session::{ChatSession, PendingTurn};
pub use extraction_result::{ExtractionResult, SourceKind};
pub use message::Message;
pub use message_role::MessageRole;
pub use session_error::SessionError;
pub use session_status::SessionStatus;
