use std::time::Duration;

use chatbridge::application::ports::{GatewayError, InferenceGateway};
use chatbridge::infrastructure::llm::{OllamaClient, create_ollama_client};
use chatbridge::presentation::config::GatewaySettings;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MODEL: &str = "llama3.1";
const UNREACHABLE_BASE_URL: &str = "http://127.0.0.1:1/api";

fn client_for(server: &MockServer) -> OllamaClient {
    OllamaClient::new(&format!("{}/api/", server.uri()), Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn given_tags_response_when_listing_models_then_preserves_server_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "models": [
                { "name": "zephyr:7b", "size": 1 },
                { "name": "alpha:1b", "size": 2 },
                { "name": "llama3.1", "size": 3 }
            ]
        })))
        .mount(&server)
        .await;

    let models = client_for(&server).list_models().await.unwrap();

    assert_eq!(models, vec!["zephyr:7b", "alpha:1b", "llama3.1"]);
}

#[tokio::test]
async fn given_tags_error_status_when_listing_models_then_returns_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tags"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let result = client_for(&server).list_models().await;

    let err = result.unwrap_err();
    assert!(matches!(err, GatewayError::Status { status: 503 }));
    assert_eq!(err.status_code(), Some(503));
}

#[tokio::test]
async fn given_unreachable_backend_when_listing_models_then_returns_guidance_without_status() {
    let client = OllamaClient::new(UNREACHABLE_BASE_URL, Duration::from_secs(5)).unwrap();

    let err = client.list_models().await.unwrap_err();

    assert!(matches!(err, GatewayError::Unreachable { .. }));
    assert_eq!(err.status_code(), None);
    let message = err.to_string();
    assert!(message.contains("running"));
    assert!(message.contains("port"));
}

#[tokio::test]
async fn given_prompt_when_generating_then_posts_non_streaming_request_and_returns_verbatim_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .and(body_json(json!({
            "model": MODEL,
            "prompt": "Why is the sky blue?",
            "stream": false
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "model": MODEL,
            "response": "  Rayleigh scattering.\n",
            "done": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let text = client_for(&server)
        .generate(MODEL, "Why is the sky blue?")
        .await
        .unwrap();

    assert_eq!(text, "  Rayleigh scattering.\n");
}

#[tokio::test]
async fn given_unknown_model_when_generating_then_returns_model_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({ "error": "model 'ghost' not found" })),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).generate("ghost", "hi").await.unwrap_err();

    assert!(matches!(err, GatewayError::ModelNotFound { ref model } if model == "ghost"));
    assert_eq!(err.status_code(), Some(404));
}

#[tokio::test]
async fn given_server_error_when_generating_then_returns_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = client_for(&server).generate(MODEL, "hi").await.unwrap_err();

    assert!(matches!(err, GatewayError::Status { status: 500 }));
}

#[tokio::test]
async fn given_malformed_body_when_generating_then_returns_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client_for(&server).generate(MODEL, "hi").await.unwrap_err();

    assert!(matches!(err, GatewayError::InvalidResponse(_)));
    assert_eq!(err.status_code(), None);
}

#[tokio::test]
async fn given_listed_model_when_checking_availability_then_matches_exact_name() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "models": [{ "name": "llama3.1:latest" }, { "name": MODEL }]
        })))
        .mount(&server)
        .await;
    let client = client_for(&server);

    assert!(client.is_model_available(MODEL).await.unwrap());
    assert!(!client.is_model_available("llama3").await.unwrap());
}

#[test]
fn given_blank_base_url_when_creating_client_then_returns_configuration_error() {
    let settings = GatewaySettings {
        base_url: "  ".to_string(),
        default_model: MODEL.to_string(),
        timeout_secs: 10,
    };

    let result = create_ollama_client(&settings);

    assert!(matches!(result, Err(GatewayError::Configuration(_))));
}

#[test]
fn given_trailing_slash_when_creating_client_then_base_url_is_normalized() {
    let settings = GatewaySettings {
        base_url: "http://localhost:11434/api/".to_string(),
        default_model: MODEL.to_string(),
        timeout_secs: 10,
    };

    let client = create_ollama_client(&settings).unwrap();

    assert_eq!(client.base_url(), "http://localhost:11434/api");
}
