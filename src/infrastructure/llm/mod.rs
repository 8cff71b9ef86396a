mod ollama_client;

pub use ollama_client::{OllamaClient, create_ollama_client};
