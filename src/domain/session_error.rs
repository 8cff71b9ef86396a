#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("a response is already being generated")]
    Busy,
    #[error("message content is empty")]
    EmptyMessage,
    #[error("model name is empty")]
    EmptyModel,
    #[error("message index {index} is out of range for a history of {len} messages")]
    IndexOutOfRange { index: usize, len: usize },
}
