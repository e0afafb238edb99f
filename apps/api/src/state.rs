use std::sync::Arc;

use crate::config::Config;
use crate::extraction::TextExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable text extractor. Default: PdfTextExtractor.
    pub extractor: Arc<dyn TextExtractor>,
}

impl AppState {
    pub fn new(config: Config, extractor: Arc<dyn TextExtractor>) -> Self {
        Self { config, extractor }
    }
}
