//! Read-only access to the video datastore
//!
//! The `videos` table is produced by the upload pipeline; this crate only
//! ever reads it. Expected layout:
//!
//! ```sql
//! CREATE TABLE videos (
//!     id            TEXT PRIMARY KEY,
//!     name          TEXT NOT NULL,
//!     path          TEXT NOT NULL,
//!     transcription TEXT,
//!     created_at    INTEGER NOT NULL
//! );
//! ```

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod error;

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use uuid::Uuid;

pub use error::StoreError;

/// One row of the `videos` table
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct VideoRecord {
    pub id: String,
    pub name: String,
    pub path: String,
    pub transcription: Option<String>,
    pub created_at: i64,
}

impl VideoRecord {
    /// Transcription text, if it has been produced and is non-empty
    ///
    /// Uploads that have not finished transcribing leave the column NULL;
    /// older pipeline versions wrote an empty string instead. Both count
    /// as absent.
    pub fn transcription_text(&self) -> Option<&str> {
        self.transcription.as_deref().filter(|text| !text.is_empty())
    }
}

/// Pooled handle to the video datastore
///
/// Cheap to clone; all clones share one connection pool.
#[derive(Debug, Clone)]
pub struct VideoStore {
    pool: SqlitePool,
}

impl VideoStore {
    /// Connect to an existing datastore
    ///
    /// The database file must already exist; this crate never creates or
    /// migrates it.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Fetch a single video by identifier
    ///
    /// Returns [`StoreError::VideoNotFound`] when no row matches.
    pub async fn video(&self, id: Uuid) -> Result<VideoRecord, StoreError> {
        sqlx::query_as::<_, VideoRecord>(
            "SELECT id, name, path, transcription, created_at FROM videos WHERE id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::VideoNotFound { id })
    }
}
