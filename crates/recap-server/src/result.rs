//! `POST /ai/result` relay handler

use std::pin::Pin;

use axum::body::Body;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use futures_util::{Stream, StreamExt};
use http::{StatusCode, header};
use recap_llm::{CompletionRequest, LlmError, Message, StreamEvent};

use crate::error::RelayError;
use crate::prompt;
use crate::state::AppState;
use crate::validate::{FieldError, GenerateResultBody};

/// Relay a stored transcription through the completion provider
///
/// Validates the body, fetches the video, substitutes the transcription
/// into the caller's template, and forwards the provider's token stream
/// as an incremental plain-text response. Nothing upstream is touched
/// until validation passes.
pub(crate) async fn generate_ai_result(
    State(state): State<AppState>,
    body: Result<axum::Json<GenerateResultBody>, JsonRejection>,
) -> Result<Response, RelayError> {
    let axum::Json(raw) = body.map_err(|rejection| {
        RelayError::Validation(vec![FieldError::new("body", rejection.body_text())])
    })?;

    let params = raw.into_params().map_err(RelayError::Validation)?;

    let video = state.store.video(params.video_id).await?;

    let Some(transcription) = video.transcription_text() else {
        return Err(RelayError::MissingTranscription);
    };

    let content = prompt::build_prompt(&params.template, transcription);

    let request = CompletionRequest {
        model: state.model.clone(),
        messages: vec![Message::user(content)],
        temperature: params.temperature,
    };

    let stream = state.llm.stream_completion(&request).await?;

    tracing::debug!(video_id = %params.video_id, temperature = params.temperature, "relaying completion stream");

    Ok(relay_response(stream))
}

/// Build the streaming relay response
///
/// Headers, including the CORS pair browser callers rely on, are
/// committed before the first token is written. If the provider stream
/// fails after that point the connection is aborted mid-body, so clients
/// observe a truncated transfer rather than a silently complete one.
fn relay_response(stream: Pin<Box<dyn Stream<Item = Result<StreamEvent, LlmError>> + Send>>) -> Response {
    let body_stream = stream
        .take_while(|event| {
            let done = matches!(event, Ok(StreamEvent::Done));
            futures_util::future::ready(!done)
        })
        .filter_map(|event| {
            futures_util::future::ready(match event {
                // Empty deltas (role preambles) carry no text to forward
                Ok(StreamEvent::Delta(text)) if text.is_empty() => None,
                Ok(StreamEvent::Delta(text)) => Some(Ok(Bytes::from(text))),
                Ok(StreamEvent::Done) => None,
                Err(e) => {
                    tracing::error!(error = %e, "completion stream failed mid-relay");
                    Some(Err(axum::Error::new(e)))
                }
            })
        });

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (header::ACCESS_CONTROL_ALLOW_METHODS, "GET, POST, PUT, DELETE, OPTIONS"),
        ],
        Body::from_stream(body_stream),
    )
        .into_response()
}
