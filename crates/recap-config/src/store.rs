use serde::Deserialize;

/// Video datastore configuration
///
/// The `videos` database is owned by the upload pipeline; recap only
/// ever reads from it, so the connection string points at an existing
/// database file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    /// `SQLite` connection string (e.g. `sqlite:recap.db`)
    pub database_url: String,
    /// Maximum pooled connections
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

#[allow(clippy::missing_const_for_fn)]
fn default_max_connections() -> u32 {
    5
}
