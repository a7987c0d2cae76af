#![allow(clippy::must_use_candidate)]

mod env;
pub mod health;
pub mod llm;
mod loader;
pub mod server;
pub mod store;

use serde::Deserialize;

pub use health::*;
pub use llm::*;
pub use server::*;
pub use store::*;

/// Top-level recap configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Video datastore configuration
    pub store: StoreConfig,
    /// Completion provider configuration
    pub llm: LlmConfig,
}
