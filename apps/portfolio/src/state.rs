use std::sync::Arc;

use crate::config::Config;
use crate::content::PortfolioContent;

/// Shared application state injected into all route handlers via Axum extractors.
/// Content is immutable after startup; requests never write to it.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Config,
    pub content: Arc<PortfolioContent>,
}

impl AppState {
    pub fn new(config: Config, content: PortfolioContent) -> Self {
        Self {
            config,
            content: Arc::new(content),
        }
    }
}
