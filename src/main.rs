use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;

use chatbridge::infrastructure::llm::create_ollama_client;
use chatbridge::infrastructure::observability::{TracingConfig, init_tracing};
use chatbridge::infrastructure::text_processing::{HtmlScraper, PdfAdapter};
use chatbridge::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load configuration")?;

    init_tracing(&TracingConfig::new(environment, &settings.logging));

    let gateway = Arc::new(
        create_ollama_client(&settings.gateway).context("Failed to build inference client")?,
    );
    let pdf_extractor = Arc::new(PdfAdapter::new());
    let web_scraper = Arc::new(
        HtmlScraper::new(Duration::from_secs(settings.extraction.fetch_timeout_secs))
            .context("Failed to build web scraper")?,
    );

    tracing::info!(
        gateway = %gateway.base_url(),
        model = %settings.gateway.default_model,
        "Inference backend configured"
    );

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server.host / server.port")?;

    let state = AppState::new(gateway, pdf_extractor, web_scraper, settings);
    let router = create_router(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutting down");
}
