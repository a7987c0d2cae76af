use recap_llm::CompletionClient;
use recap_store::VideoStore;

/// Shared state for the relay handlers
///
/// Cloned per request by axum; both handles are pooled internally.
#[derive(Clone)]
pub(crate) struct AppState {
    pub store: VideoStore,
    pub llm: CompletionClient,
    /// Model identifier sent with every completion request
    pub model: String,
}

impl AppState {
    pub fn new(store: VideoStore, llm: CompletionClient, model: String) -> Self {
        Self { store, llm, model }
    }
}
