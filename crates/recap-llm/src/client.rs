use std::pin::Pin;

use eventsource_stream::Eventsource;
use futures_util::{Stream, StreamExt};
use recap_config::LlmConfig;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::error::LlmError;
use crate::protocol::{ChatRequest, ChatStreamChunk};
use crate::types::{CompletionRequest, StreamEvent};

/// Default `OpenAI` API base URL
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Streaming chat-completion client
///
/// Cheap to clone; the inner reqwest client shares its connection pool
/// across clones.
#[derive(Debug, Clone)]
pub struct CompletionClient {
    client: Client,
    base_url: Url,
    api_key: Option<SecretString>,
}

impl CompletionClient {
    /// Create from provider configuration
    ///
    /// # Panics
    ///
    /// Panics if the hardcoded default base URL is invalid (should never happen).
    pub fn new(config: &LlmConfig) -> Self {
        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| Url::parse(DEFAULT_BASE_URL).expect("valid default URL"));

        Self {
            client: Client::new(),
            base_url,
            api_key: config.api_key.clone(),
        }
    }

    /// Build the chat completions URL
    fn completions_url(&self) -> String {
        let base = self.base_url.as_str().trim_end_matches('/');
        format!("{base}/chat/completions")
    }

    /// Issue a streaming completion request
    ///
    /// Returns a stream of decoded events ending with [`StreamEvent::Done`].
    /// Dropping the returned stream aborts the upstream request.
    pub async fn stream_completion(
        &self,
        request: &CompletionRequest,
    ) -> Result<Pin<Box<dyn Stream<Item = Result<StreamEvent, LlmError>> + Send>>, LlmError> {
        let wire_request = ChatRequest {
            model: &request.model,
            messages: &request.messages,
            temperature: request.temperature,
            stream: true,
        };

        let mut builder = self.client.post(self.completions_url()).json(&wire_request);

        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key.expose_secret());
        }

        let response = builder.send().await.map_err(|e| {
            tracing::error!(error = %e, "upstream stream request failed");
            LlmError::Upstream(e.to_string())
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, "upstream returned error");
            return Err(LlmError::Upstream(format!("provider returned {status}: {body}")));
        }

        let byte_stream = response.bytes_stream();
        let event_stream = byte_stream.eventsource();

        let mapped = event_stream
            .map(|result| match result {
                Ok(event) => {
                    let data = event.data.trim().to_owned();
                    if data == "[DONE]" {
                        return vec![Ok(StreamEvent::Done)];
                    }

                    match serde_json::from_str::<ChatStreamChunk>(&data) {
                        Ok(chunk) => chunk
                            .choices
                            .into_iter()
                            .filter_map(|choice| choice.delta.content)
                            .map(|content| Ok(StreamEvent::Delta(content)))
                            .collect(),
                        Err(e) => {
                            tracing::debug!(error = %e, data = %data, "skipping unparseable SSE chunk");
                            vec![]
                        }
                    }
                }
                Err(e) => vec![Err(LlmError::Streaming(e.to_string()))],
            })
            .flat_map(futures_util::stream::iter);

        Ok(Box::pin(mapped))
    }
}
