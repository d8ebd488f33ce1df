use std::sync::{Arc, Mutex};

use vitalwatch_chat::chain::ProviderChain;
use vitalwatch_report::styles::PdfStyles;

use crate::config::ServerConfig;
use crate::rate_limit::RateLimiter;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub chat: Arc<ProviderChain>,
    pub rate_limiter: Arc<Mutex<RateLimiter>>,
    pub pdf_styles: Arc<PdfStyles>,
    /// PNG bytes for the report watermark, if one was configured and readable.
    pub logo: Option<Arc<[u8]>>,
}

impl AppState {
    pub fn new(config: ServerConfig, chat: ProviderChain) -> Self {
        let rate_limiter = RateLimiter::new(config.rate_limit_window, config.rate_limit_max_requests);
        Self {
            config: Arc::new(config),
            chat: Arc::new(chat),
            rate_limiter: Arc::new(Mutex::new(rate_limiter)),
            pdf_styles: Arc::new(PdfStyles::default()),
            logo: None,
        }
    }

    pub fn with_logo(mut self, logo: Vec<u8>) -> Self {
        self.logo = Some(Arc::from(logo));
        self
    }
}
