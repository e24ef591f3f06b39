//! Marina Error Types
//!
//! This module provides marina-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Marina-specific result type alias
pub type MarinaResult<T> = Result<T, MarinaError>;

/// Marina-specific error variants
///
/// Client-caused variants carry the message sent back in the
/// `{"error": ...}` body. Store failures are reported as a generic
/// server error and only their cause is logged.
#[derive(Debug, Error)]
pub enum MarinaError {
    /// A required body field is absent
    #[error("Missing parameters")]
    MissingParameters,

    /// Body could not be parsed or a field has the wrong type
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("Boat not found")]
    BoatNotFound,

    #[error("Slip not found")]
    SlipNotFound,

    /// Arrival on a slip that already holds a boat
    #[error("Slip occupied")]
    SlipOccupied,

    /// Departure from a slip that holds no boat
    #[error("Slip not occupied")]
    SlipNotOccupied,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Stored document could not be (de)serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl MarinaError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            MarinaError::MissingParameters | MarinaError::InvalidParameters(_) => {
                ErrorKind::BadRequest
            }
            MarinaError::BoatNotFound
            | MarinaError::SlipNotFound
            | MarinaError::SlipNotOccupied => ErrorKind::NotFound,
            MarinaError::SlipOccupied => ErrorKind::Forbidden,
            MarinaError::Database(_) | MarinaError::Serialization(_) | MarinaError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            MarinaError::Database(e) => {
                tracing::error!(error = %e, "Marina database error");
            }
            MarinaError::Serialization(e) => {
                tracing::error!(error = %e, "Marina document serialization error");
            }
            MarinaError::Internal(msg) => {
                tracing::error!(message = %msg, "Marina internal error");
            }
            MarinaError::SlipOccupied => {
                tracing::warn!("Arrival rejected, slip occupied");
            }
            _ => {
                tracing::debug!(error = %self, "Marina request rejected");
            }
        }
    }
}

impl From<MarinaError> for AppError {
    fn from(err: MarinaError) -> Self {
        match err {
            MarinaError::Database(e) => AppError::from(e),
            MarinaError::Serialization(e) => {
                AppError::internal("Internal server error").with_source(e)
            }
            MarinaError::Internal(_) => AppError::internal("Internal server error"),
            other => {
                let kind = other.kind();
                AppError::new(kind, other.to_string())
            }
        }
    }
}

impl IntoResponse for MarinaError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
