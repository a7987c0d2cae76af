use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use recap_core::HttpError;
use recap_llm::LlmError;
use recap_store::StoreError;
use thiserror::Error;

use crate::validate::FieldError;

/// Fixed message returned when a video has no transcription yet
pub(crate) const MISSING_TRANSCRIPTION_MESSAGE: &str = "Video transcription was not generated yet.";

/// Failures surfaced by the relay endpoint before streaming begins
///
/// Whatever happens, the client sees a JSON object with a single `error`
/// key: a list of `{path, message}` violations for validation failures,
/// a plain message otherwise.
#[derive(Debug, Error)]
pub(crate) enum RelayError {
    /// Request body failed schema validation
    #[error("invalid request body")]
    Validation(Vec<FieldError>),

    /// Video exists but its transcription has not been produced
    #[error("transcription not generated")]
    MissingTranscription,

    /// Datastore lookup failed
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Completion provider call failed
    #[error(transparent)]
    Llm(#[from] LlmError),
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(errors) => {
                tracing::debug!(violations = errors.len(), "request body rejected");
                (
                    StatusCode::BAD_REQUEST,
                    Json(serde_json::json!({ "error": errors })),
                )
                    .into_response()
            }
            Self::MissingTranscription => (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": MISSING_TRANSCRIPTION_MESSAGE })),
            )
                .into_response(),
            Self::Store(e) => http_error_response(&e),
            Self::Llm(e) => http_error_response(&e),
        }
    }
}

/// Render a domain error through its `HttpError` contract
fn http_error_response(error: &dyn HttpError) -> Response {
    let status = error.status_code();

    if status.is_server_error() {
        tracing::error!(error_type = error.error_type(), error = %error, "relay request failed");
    } else {
        tracing::warn!(error_type = error.error_type(), error = %error, "relay request rejected");
    }

    (status, Json(serde_json::json!({ "error": error.client_message() }))).into_response()
}
