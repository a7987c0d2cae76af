use std::path::Path;

use secrecy::ExposeSecret;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        let expanded =
            crate::env::expand_env(&raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if the datastore or provider configuration is
    /// unusable
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.store.database_url.trim().is_empty() {
            anyhow::bail!("store.database_url must not be empty");
        }

        if self.store.max_connections == 0 {
            anyhow::bail!("store.max_connections must be greater than 0");
        }

        if self.llm.model.trim().is_empty() {
            anyhow::bail!("llm.model must not be empty");
        }

        if let Some(ref api_key) = self.llm.api_key
            && api_key.expose_secret().is_empty()
        {
            anyhow::bail!("llm.api_key must not be empty when set");
        }

        Ok(())
    }
}
