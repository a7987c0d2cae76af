//! Seeded videos database fixtures
//!
//! The relay treats the videos database as externally owned, so tests
//! create and seed it here before the server connects.

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tempfile::TempDir;
use uuid::Uuid;

/// Temporary videos database seeded with fixture rows
pub struct TestStore {
    /// Held so the database file outlives the test
    _dir: TempDir,
    pool: SqlitePool,
    url: String,
}

impl TestStore {
    /// Create an empty videos database in a temp directory
    pub async fn create() -> anyhow::Result<Self> {
        let dir = tempfile::tempdir()?;
        let url = format!("sqlite:{}", dir.path().join("videos.db").display());

        let options = SqliteConnectOptions::from_str(&url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new().max_connections(1).connect_with(options).await?;

        sqlx::query(
            "CREATE TABLE videos (
                 id            TEXT PRIMARY KEY,
                 name          TEXT NOT NULL,
                 path          TEXT NOT NULL,
                 transcription TEXT,
                 created_at    INTEGER NOT NULL
             )",
        )
        .execute(&pool)
        .await?;

        Ok(Self { _dir: dir, pool, url })
    }

    /// Connection URL for pointing the relay at this database
    pub fn database_url(&self) -> &str {
        &self.url
    }

    /// Insert a video row, returning its generated id
    pub async fn insert_video(&self, transcription: Option<&str>) -> anyhow::Result<Uuid> {
        let id = Uuid::new_v4();

        sqlx::query("INSERT INTO videos (id, name, path, transcription, created_at) VALUES (?, ?, ?, ?, ?)")
            .bind(id.to_string())
            .bind("fixture.mp4")
            .bind("/uploads/fixture.mp3")
            .bind(transcription)
            .bind(1_700_000_000_i64)
            .execute(&self.pool)
            .await?;

        Ok(id)
    }
}
