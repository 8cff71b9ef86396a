use std::sync::Arc;

use crate::application::ports::{InferenceGateway, PdfExtractor, WebScraper};
use crate::application::services::ChatService;
use crate::presentation::config::Settings;

pub struct AppState<G, P, W>
where
    G: InferenceGateway,
    P: PdfExtractor,
    W: WebScraper,
{
    pub chat_service: Arc<ChatService<G>>,
    pub gateway: Arc<G>,
    pub pdf_extractor: Arc<P>,
    pub web_scraper: Arc<W>,
    pub settings: Settings,
}

impl<G, P, W> AppState<G, P, W>
where
    G: InferenceGateway + 'static,
    P: PdfExtractor,
    W: WebScraper,
{
    /// Wires one chat session to the gateway, starting on the configured default model.
    pub fn new(
        gateway: Arc<G>,
        pdf_extractor: Arc<P>,
        web_scraper: Arc<W>,
        settings: Settings,
    ) -> Self {
        let chat_service = Arc::new(ChatService::new(
            Arc::clone(&gateway),
            settings.gateway.default_model.clone(),
        ));

        Self {
            chat_service,
            gateway,
            pdf_extractor,
            web_scraper,
            settings,
        }
    }
}

impl<G, P, W> Clone for AppState<G, P, W>
where
    G: InferenceGateway,
    P: PdfExtractor,
    W: WebScraper,
{
    fn clone(&self) -> Self {
        Self {
            chat_service: Arc::clone(&self.chat_service),
            gateway: Arc::clone(&self.gateway),
            pdf_extractor: Arc::clone(&self.pdf_extractor),
            web_scraper: Arc::clone(&self.web_scraper),
            settings: self.settings.clone(),
        }
    }
}
