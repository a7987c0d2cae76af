use http::StatusCode;
use recap_core::HttpError;
use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur during datastore operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// No video row exists for the requested identifier
    #[error("video not found: {id}")]
    VideoNotFound { id: Uuid },

    /// Underlying database failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl HttpError for StoreError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::VideoNotFound { .. } => StatusCode::NOT_FOUND,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_type(&self) -> &str {
        match self {
            Self::VideoNotFound { .. } => "not_found_error",
            Self::Database(_) => "internal_error",
        }
    }

    fn client_message(&self) -> String {
        match self {
            Self::VideoNotFound { .. } => "Video not found.".to_owned(),
            // Connection strings and SQL details stay in the logs
            Self::Database(_) => "an internal error occurred".to_owned(),
        }
    }
}
