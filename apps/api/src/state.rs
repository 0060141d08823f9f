use std::sync::Arc;

use crate::llm_client::TextGenerator;
use crate::matching::engine::KeywordMatcher;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Stateless matching engine, configured once at startup.
    pub matcher: Arc<KeywordMatcher>,
    /// Pluggable text-generation capability. Production: the Anthropic client.
    pub generator: Arc<dyn TextGenerator>,
}
