use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::CompletionModel;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable completion backend. Production: `LlmClient`. Tests swap in
    /// a canned implementation.
    pub model: Arc<dyn CompletionModel>,
}
