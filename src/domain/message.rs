use std::time::Duration;

use chrono::{DateTime, Utc};

use super::MessageRole;

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
    pub created_at: DateTime<Utc>,
    /// Gateway round-trip, only set on assistant turns.
    pub processing_time: Option<Duration>,
}

impl Message {
    pub fn user(content: String) -> Self {
        Self::new(MessageRole::User, content, None)
    }

    pub fn assistant(content: String, processing_time: Duration) -> Self {
        Self::new(MessageRole::Assistant, content, Some(processing_time))
    }

    pub fn error(content: String) -> Self {
        Self::new(MessageRole::Error, content, None)
    }

    fn new(role: MessageRole, content: String, processing_time: Option<Duration>) -> Self {
        Self {
            role,
            content,
            created_at: Utc::now(),
            processing_time,
        }
    }

    pub fn is_user(&self) -> bool {
        self.role == MessageRole::User
    }
}
