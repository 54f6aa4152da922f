use std::sync::Arc;

use crate::assistant::ExternalModel;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable model collaborator. Default: LlmAssistant (inert without an API key).
    pub model: Arc<dyn ExternalModel>,
}
