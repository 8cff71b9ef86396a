use std::time::Instant;

use super::{Message, SessionError, SessionStatus};

/// Ordered conversation history with a single in-flight generation slot.
///
/// Transitions are split into a `begin_*` half that hands out a
/// [`PendingTurn`] and a completion half that consumes it, so the caller can
/// release any lock around the session while the gateway call is running.
#[derive(Debug, Clone)]
pub struct ChatSession {
    messages: Vec<Message>,
    status: SessionStatus,
    current_model: String,
}

/// Proof that a generation is in flight. Only [`ChatSession`] creates one.
#[derive(Debug)]
pub struct PendingTurn {
    prompt: String,
    model: String,
    started_at: Instant,
}

impl PendingTurn {
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

impl ChatSession {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            messages: Vec::new(),
            status: SessionStatus::Idle,
            current_model: model.into(),
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_busy(&self) -> bool {
        self.status == SessionStatus::Generating
    }

    pub fn current_model(&self) -> &str {
        &self.current_model
    }

    pub fn set_model(&mut self, model: &str) -> Result<(), SessionError> {
        let model = model.trim();
        if model.is_empty() {
            return Err(SessionError::EmptyModel);
        }
        if self.is_busy() {
            return Err(SessionError::Busy);
        }
        self.current_model = model.to_string();
        Ok(())
    }

    /// Appends the user turn and enters `Generating`. Rejected while busy,
    /// in which case the history is left untouched.
    pub fn begin_turn(&mut self, content: String) -> Result<PendingTurn, SessionError> {
        if self.is_busy() {
            return Err(SessionError::Busy);
        }
        if content.trim().is_empty() {
            return Err(SessionError::EmptyMessage);
        }

        self.messages.push(Message::user(content.clone()));
        self.status = SessionStatus::Generating;

        Ok(PendingTurn {
            prompt: content,
            model: self.current_model.clone(),
            started_at: Instant::now(),
        })
    }

    pub fn complete_turn(&mut self, pending: PendingTurn, response: String) {
        let elapsed = pending.started_at.elapsed();
        self.messages.push(Message::assistant(response, elapsed));
        self.status = SessionStatus::Idle;
    }

    pub fn fail_turn(&mut self, _pending: PendingTurn, rendered_error: String) {
        self.messages.push(Message::error(rendered_error));
        self.status = SessionStatus::Idle;
    }

    /// Finds the nearest user turn at or before `index`, drops it and
    /// everything after it, then re-sends its content.
    ///
    /// Returns `Ok(None)` and leaves the history untouched when no user turn
    /// precedes `index`.
    pub fn begin_regeneration(
        &mut self,
        index: usize,
    ) -> Result<Option<PendingTurn>, SessionError> {
        if self.is_busy() {
            return Err(SessionError::Busy);
        }
        if index >= self.messages.len() {
            return Err(SessionError::IndexOutOfRange {
                index,
                len: self.messages.len(),
            });
        }

        let Some(user_index) = self.messages[..=index].iter().rposition(Message::is_user) else {
            return Ok(None);
        };

        let prompt = self.messages[user_index].content.clone();
        self.messages.truncate(user_index);
        self.begin_turn(prompt).map(Some)
    }
}
