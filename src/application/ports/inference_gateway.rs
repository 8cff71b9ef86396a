use async_trait::async_trait;

/// The external language-model server: model listing and one-shot generation.
#[async_trait]
pub trait InferenceGateway: Send + Sync {
    /// Model identifiers in the order the backend reports them.
    async fn list_models(&self) -> Result<Vec<String>, GatewayError>;

    /// Non-streaming generation. The response text is returned verbatim.
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, GatewayError>;

    async fn is_model_available(&self, model: &str) -> Result<bool, GatewayError> {
        let models = self.list_models().await?;
        Ok(models.iter().any(|m| m == model))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error(
        "Cannot connect to the inference backend at {endpoint}. Please ensure:\n1. the backend is running\n2. it is reachable on its configured port"
    )]
    Unreachable { endpoint: String, reason: String },
    #[error("model '{model}' is not available on the inference backend")]
    ModelNotFound { model: String },
    #[error("HTTP error {status}")]
    Status { status: u16 },
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("invalid gateway configuration: {0}")]
    Configuration(String),
}

impl GatewayError {
    /// `None` means no response was received at all.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            GatewayError::ModelNotFound { .. } => Some(404),
            GatewayError::Status { status } => Some(*status),
            GatewayError::Unreachable { .. }
            | GatewayError::InvalidResponse(_)
            | GatewayError::Configuration(_) => None,
        }
    }
}
