use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::Instrument;

use crate::application::ports::{GatewayError, InferenceGateway};
use crate::domain::{ChatSession, ExtractionResult, PendingTurn, SessionError};
use crate::infrastructure::observability::sanitize_prompt;

use super::format_ingested;

/// Drives the single chat session against an inference gateway.
///
/// The session lock is only held for state transitions, never across the
/// gateway call; a concurrent send is turned away by the session's busy
/// status rather than queued on the lock.
///
/// Each turn runs on its own task, so a caller that goes away mid-generation
/// (e.g. a disconnected HTTP client) cannot leave the session `Generating`.
pub struct ChatService<G>
where
    G: InferenceGateway,
{
    gateway: Arc<G>,
    session: Arc<Mutex<ChatSession>>,
}

impl<G> ChatService<G>
where
    G: InferenceGateway + 'static,
{
    pub fn new(gateway: Arc<G>, default_model: impl Into<String>) -> Self {
        Self {
            gateway,
            session: Arc::new(Mutex::new(ChatSession::new(default_model))),
        }
    }

    pub async fn snapshot(&self) -> ChatSession {
        self.session.lock().await.clone()
    }

    pub async fn current_model(&self) -> String {
        self.session.lock().await.current_model().to_string()
    }

    pub async fn is_busy(&self) -> bool {
        self.session.lock().await.is_busy()
    }

    pub async fn set_model(&self, model: &str) -> Result<(), SessionError> {
        self.session.lock().await.set_model(model)?;
        tracing::info!(model = %model.trim(), "Switched chat model");
        Ok(())
    }

    #[tracing::instrument(skip(self, content), fields(chars = content.len()))]
    pub async fn send_message(&self, content: String) -> Result<(), SessionError> {
        let pending = self.session.lock().await.begin_turn(content)?;
        self.run_turn(pending).await;
        Ok(())
    }

    /// Returns `false` when there was no user turn to regenerate from.
    #[tracing::instrument(skip(self))]
    pub async fn regenerate(&self, index: usize) -> Result<bool, SessionError> {
        let pending = self.session.lock().await.begin_regeneration(index)?;
        match pending {
            Some(pending) => {
                self.run_turn(pending).await;
                Ok(true)
            }
            None => {
                tracing::debug!(index, "No user turn precedes index, nothing to regenerate");
                Ok(false)
            }
        }
    }

    /// Sends extracted document text as an ordinary user turn.
    #[tracing::instrument(skip(self, result), fields(source = %result.source_label))]
    pub async fn ingest(&self, result: &ExtractionResult) -> Result<(), SessionError> {
        self.send_message(format_ingested(result)).await
    }

    /// Resolves once the turn is recorded. Dropping the returned future
    /// detaches the turn instead of abandoning it.
    async fn run_turn(&self, pending: PendingTurn) {
        let gateway = Arc::clone(&self.gateway);
        let session = Arc::clone(&self.session);

        let work = async move {
            tracing::debug!(
                model = %pending.model(),
                prompt = %sanitize_prompt(pending.prompt()),
                "Dispatching generation"
            );

            let outcome = gateway.generate(pending.model(), pending.prompt()).await;

            let mut session = session.lock().await;
            match outcome {
                Ok(response) => {
                    tracing::info!(chars = response.len(), "Generation complete");
                    session.complete_turn(pending, response);
                }
                Err(e) => {
                    tracing::warn!(error = %e, status = ?e.status_code(), "Generation failed");
                    session.fail_turn(pending, describe_failure(&e));
                }
            }
        };

        let turn = tokio::spawn(work.in_current_span());

        if let Err(e) = turn.await {
            tracing::error!(error = %e, "Generation task did not complete");
        }
    }
}

/// Chat-facing text for a failed generation. A missing model gets its own
/// corrective instruction rather than the generic status rendering.
pub fn describe_failure(error: &GatewayError) -> String {
    match error {
        GatewayError::ModelNotFound { model } => format!(
            "Model not found. Please make sure you have downloaded the {model} model using 'ollama pull {model}'."
        ),
        GatewayError::Unreachable { .. } => error.to_string(),
        other => format!("Error: {}", other),
    }
}
