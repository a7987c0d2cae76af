//! HTTP server assembly for the recap relay

mod error;
mod health;
mod prompt;
mod result;
mod state;
mod validate;

use std::net::SocketAddr;

use axum::Router;
use recap_config::Config;
use recap_llm::CompletionClient;
use recap_store::VideoStore;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the datastore connection fails
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let listen_address = config
            .server
            .listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3333)));

        let store = VideoStore::connect(&config.store.database_url, config.store.max_connections).await?;
        let llm = CompletionClient::new(&config.llm);
        let state = AppState::new(store, llm, config.llm.model);

        let mut app = Router::new();

        // Health check
        if config.server.health.enabled {
            app = app.route(&config.server.health.path, axum::routing::get(health::health_handler));
        }

        // Relay endpoint
        app = app.route(
            "/ai/result",
            axum::routing::post(result::generate_ai_result).with_state(state),
        );

        // Tracing
        app = app.layer(TraceLayer::new_for_http());

        Ok(Self {
            router: app,
            listen_address,
        })
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}
