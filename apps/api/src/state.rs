use crate::config::Config;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum
/// extractors. Deliberately small: the service holds nothing between
/// requests, so state is just configuration plus the one LLM client.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    #[allow(dead_code)]
    pub config: Config,
}
