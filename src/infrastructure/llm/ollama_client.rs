use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{Deserialize, Serialize};

use crate::application::ports::{GatewayError, InferenceGateway};
use crate::presentation::config::GatewaySettings;

/// Client for an Ollama-compatible `/generate` + `/tags` backend.
pub struct OllamaClient {
    client: Client,
    base_url: String,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

#[derive(Deserialize)]
struct TagsResponse {
    #[serde(default)]
    models: Vec<ModelTag>,
}

#[derive(Deserialize)]
struct ModelTag {
    name: String,
}

impl OllamaClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::Configuration(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, GatewayError> {
        request.send().await.map_err(|e| {
            if e.is_builder() {
                GatewayError::Configuration(e.to_string())
            } else {
                tracing::error!(error = %e, base_url = %self.base_url, "Inference backend unreachable");
                GatewayError::Unreachable {
                    endpoint: self.base_url.clone(),
                    reason: e.to_string(),
                }
            }
        })
    }
}

#[async_trait]
impl InferenceGateway for OllamaClient {
    #[tracing::instrument(skip(self))]
    async fn list_models(&self) -> Result<Vec<String>, GatewayError> {
        let response = self.send(self.client.get(self.endpoint("tags"))).await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            tracing::warn!(status, "Model listing rejected");
            return Err(GatewayError::Status { status });
        }

        let tags: TagsResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        Ok(tags.models.into_iter().map(|m| m.name).collect())
    }

    #[tracing::instrument(skip(self, prompt), fields(prompt_chars = prompt.len()))]
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, GatewayError> {
        let request_body = GenerateRequest {
            model,
            prompt,
            stream: false,
        };

        let response = self
            .send(self.client.post(self.endpoint("generate")).json(&request_body))
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(GatewayError::ModelNotFound {
                model: model.to_string(),
            });
        }

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status, body = %body, "Generation rejected");
            return Err(GatewayError::Status { status });
        }

        let generated: GenerateResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        Ok(generated.response)
    }
}

pub fn create_ollama_client(settings: &GatewaySettings) -> Result<OllamaClient, GatewayError> {
    if settings.base_url.trim().is_empty() {
        return Err(GatewayError::Configuration(
            "gateway.base_url must not be empty".to_string(),
        ));
    }

    OllamaClient::new(
        &settings.base_url,
        Duration::from_secs(settings.timeout_secs),
    )
}
