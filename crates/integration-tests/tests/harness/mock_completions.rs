//! Mock completions backend for integration tests
//!
//! Implements the streaming half of the OpenAI chat completions API with
//! canned chunk sequences. Counts calls and records the last request body
//! so tests can assert exactly what the relay sends upstream.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Json, Router, routing};
use futures_util::StreamExt;
use tokio_util::sync::CancellationToken;

/// Mock completions backend that streams predictable chunks
pub struct MockCompletions {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockState>,
}

struct MockState {
    completion_count: AtomicU32,
    /// Number of requests to fail before succeeding (0 = never fail)
    fail_count: AtomicU32,
    /// Content pieces streamed as one chunk each
    chunks: Vec<String>,
    /// Cut the response body off with an error after the chunks
    break_stream: bool,
    /// Body of the most recent completion request
    last_request: Mutex<Option<serde_json::Value>>,
}

impl MockCompletions {
    /// Start the mock server with a default chunk sequence
    pub async fn start() -> anyhow::Result<Self> {
        Self::start_inner(0, &["Hello ", "from ", "mock"], false).await
    }

    /// Start a mock server streaming exactly the given pieces
    pub async fn start_with_chunks(chunks: &[&str]) -> anyhow::Result<Self> {
        Self::start_inner(0, chunks, false).await
    }

    /// Start a mock server that fails the first `n` requests with 500
    pub async fn start_failing(n: u32) -> anyhow::Result<Self> {
        Self::start_inner(n, &["unused"], false).await
    }

    /// Start a mock server that streams the given pieces, then cuts the
    /// body off with an error instead of finishing the stream
    pub async fn start_with_broken_stream(chunks: &[&str]) -> anyhow::Result<Self> {
        Self::start_inner(0, chunks, true).await
    }

    async fn start_inner(
        fail_count: u32,
        chunks: &[&str],
        break_stream: bool,
    ) -> anyhow::Result<Self> {
        let state = Arc::new(MockState {
            completion_count: AtomicU32::new(0),
            fail_count: AtomicU32::new(fail_count),
            chunks: chunks.iter().map(|piece| (*piece).to_owned()).collect(),
            break_stream,
            last_request: Mutex::new(None),
        });

        let app = Router::new()
            .route("/v1/chat/completions", routing::post(handle_chat_completions))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL for configuring the mock as the provider
    ///
    /// Includes `/v1` since the client appends `/chat/completions`
    pub fn base_url(&self) -> String {
        format!("http://{}/v1", self.addr)
    }

    /// Number of completion requests received
    pub fn completion_count(&self) -> u32 {
        self.state.completion_count.load(Ordering::Relaxed)
    }

    /// Body of the most recent completion request, if any
    pub fn last_request(&self) -> Option<serde_json::Value> {
        self.state.last_request.lock().unwrap().clone()
    }
}

impl Drop for MockCompletions {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn handle_chat_completions(
    State(state): State<Arc<MockState>>,
    Json(request): Json<serde_json::Value>,
) -> impl IntoResponse {
    state.completion_count.fetch_add(1, Ordering::Relaxed);
    *state.last_request.lock().unwrap() = Some(request);

    // If fail_count > 0, decrement and return 500
    let remaining = state.fail_count.load(Ordering::Relaxed);
    if remaining > 0 {
        state.fail_count.fetch_sub(1, Ordering::Relaxed);
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({
                "error": {
                    "message": "mock server intentional failure",
                    "type": "server_error"
                }
            })),
        )
            .into_response();
    }

    if state.break_stream {
        let mut pieces =
            vec![sse_chunk(&serde_json::json!({"role": "assistant", "content": ""}), None)];
        for piece in &state.chunks {
            pieces.push(sse_chunk(&serde_json::json!({"content": piece}), None));
        }

        // Give the pieces time to reach the client before the error
        // tears the connection down
        let failure = futures_util::stream::once(async {
            tokio::time::sleep(std::time::Duration::from_millis(50)).await;
            Err(std::io::Error::other("stream interrupted"))
        });
        let body_stream = futures_util::stream::iter(pieces)
            .map(Ok::<String, std::io::Error>)
            .chain(failure);

        return (
            StatusCode::OK,
            [(axum::http::header::CONTENT_TYPE, "text/event-stream")],
            axum::body::Body::from_stream(body_stream),
        )
            .into_response();
    }

    let mut body = String::new();

    // Role preamble chunk, the way the real API opens a stream
    body.push_str(&sse_chunk(&serde_json::json!({"role": "assistant", "content": ""}), None));

    // One content chunk per configured piece
    for piece in &state.chunks {
        body.push_str(&sse_chunk(&serde_json::json!({"content": piece}), None));
    }

    // Finish reason chunk, then done marker
    body.push_str(&sse_chunk(&serde_json::json!({}), Some("stop")));
    body.push_str("data: [DONE]\n\n");

    (
        StatusCode::OK,
        [(axum::http::header::CONTENT_TYPE, "text/event-stream")],
        body,
    )
        .into_response()
}

fn sse_chunk(delta: &serde_json::Value, finish_reason: Option<&str>) -> String {
    let chunk = serde_json::json!({
        "id": "chatcmpl-test-stream",
        "object": "chat.completion.chunk",
        "created": 1_700_000_000_u64,
        "model": "gpt-3.5-turbo-16k",
        "choices": [{
            "index": 0,
            "delta": delta,
            "finish_reason": finish_reason,
        }],
    });
    format!("data: {chunk}\n\n")
}
