//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use recap_config::{Config, HealthConfig, LlmConfig, ServerConfig, StoreConfig};
use secrecy::SecretString;

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with minimal defaults
    ///
    /// The store points at a throwaway in-memory database until
    /// [`with_store`](Self::with_store) supplies a seeded one.
    pub fn new() -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    health: HealthConfig::default(),
                },
                store: StoreConfig {
                    database_url: "sqlite::memory:".to_owned(),
                    max_connections: 1,
                },
                llm: LlmConfig {
                    api_key: Some(SecretString::from("test-key")),
                    base_url: None,
                    model: "gpt-3.5-turbo-16k".to_owned(),
                },
            },
        }
    }

    /// Point the relay at a seeded videos database
    pub fn with_store(mut self, database_url: &str) -> Self {
        self.config.store.database_url = database_url.to_owned();
        self
    }

    /// Point the relay at a mock completions backend
    pub fn with_completions(mut self, base_url: &str) -> Self {
        self.config.llm.base_url = Some(base_url.parse().expect("valid URL"));
        self
    }

    /// Disable health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
