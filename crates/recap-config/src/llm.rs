use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Completion provider configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LlmConfig {
    /// API key for authentication
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Base URL override
    #[serde(default)]
    pub base_url: Option<Url>,
    /// Model identifier sent with every completion request
    #[serde(default = "default_model")]
    pub model: String,
}

fn default_model() -> String {
    "gpt-3.5-turbo-16k".to_string()
}
