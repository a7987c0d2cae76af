use http::StatusCode;
use recap_core::HttpError;
use thiserror::Error;

/// Errors that can occur while talking to the completion provider
#[derive(Debug, Error)]
pub enum LlmError {
    /// Upstream provider rejected the request or was unreachable
    #[error("upstream error: {0}")]
    Upstream(String),

    /// Error during the streaming response
    #[error("streaming error: {0}")]
    Streaming(String),
}

impl HttpError for LlmError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::Streaming(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_type(&self) -> &str {
        match self {
            Self::Upstream(_) => "upstream_error",
            Self::Streaming(_) => "streaming_error",
        }
    }

    fn client_message(&self) -> String {
        // Provider status lines and bodies may carry key fragments or
        // account detail; callers get a fixed message, logs get the rest
        match self {
            Self::Upstream(_) => "completion provider request failed".to_owned(),
            Self::Streaming(_) => "completion stream failed".to_owned(),
        }
    }
}
