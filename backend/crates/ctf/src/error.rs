//! CTF Error Types
//!
//! Game-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// CTF-specific result type alias
pub type CtfResult<T> = Result<T, CtfError>;

#[derive(Debug, Error)]
pub enum CtfError {
    /// A request field is missing or has the wrong JSON type
    #[error("Field `{field}` must be {expected}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
    },

    /// Request body is not a JSON object
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    #[error("Puzzle {0} not found")]
    UnknownPuzzle(u32),

    /// Path segment that is not a puzzle id at all
    #[error("Puzzle `{0}` not found")]
    InvalidPuzzlePath(String),

    /// Puzzle exists but has no server-generated prompt of the requested kind
    #[error("Puzzle {0} has no dynamic prompt")]
    NotDynamic(u32),

    #[error("Player {0} not found")]
    PlayerNotFound(String),

    /// Missing or wrong admin secret
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    /// Stored record does not match its schema
    #[error("Malformed stored record: {0}")]
    MalformedRecord(#[from] serde_json::Error),

    /// Puzzle catalog is unreadable or inconsistent
    #[error("Puzzle catalog error: {0}")]
    Catalog(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CtfError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            CtfError::InvalidField { .. } | CtfError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            CtfError::UnknownPuzzle(_)
            | CtfError::InvalidPuzzlePath(_)
            | CtfError::NotDynamic(_)
            | CtfError::PlayerNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            CtfError::Unauthorized => StatusCode::UNAUTHORIZED,
            CtfError::Io(_)
            | CtfError::Redis(_)
            | CtfError::MalformedRecord(_)
            | CtfError::Catalog(_)
            | CtfError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CtfError::InvalidField { .. } | CtfError::MalformedBody(_) => ErrorKind::BadRequest,
            CtfError::UnknownPuzzle(_)
            | CtfError::InvalidPuzzlePath(_)
            | CtfError::NotDynamic(_)
            | CtfError::PlayerNotFound(_) => {
                ErrorKind::NotFound
            }
            CtfError::Unauthorized => ErrorKind::Unauthorized,
            CtfError::Io(_)
            | CtfError::Redis(_)
            | CtfError::MalformedRecord(_)
            | CtfError::Catalog(_)
            | CtfError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Client-facing error; storage details stay in the logs
    pub fn to_app_error(&self) -> AppError {
        match self.kind() {
            kind if kind.is_server_error() => AppError::internal("Storage or catalog failure")
                .with_action("Please try submitting again"),
            kind => AppError::new(kind, self.to_string()),
        }
    }

    fn log(&self) {
        match self {
            CtfError::Io(e) => tracing::error!(error = %e, "Record store I/O error"),
            CtfError::Redis(e) => tracing::error!(error = %e, "Record store Redis error"),
            CtfError::MalformedRecord(e) => {
                tracing::error!(error = %e, "Record store returned malformed data")
            }
            CtfError::Catalog(msg) => tracing::error!(message = %msg, "Puzzle catalog error"),
            CtfError::Internal(msg) => tracing::error!(message = %msg, "CTF internal error"),
            _ => tracing::debug!(error = %self, "CTF client error"),
        }
    }
}

impl From<CtfError> for AppError {
    fn from(err: CtfError) -> Self {
        err.to_app_error()
    }
}

impl IntoResponse for CtfError {
    fn into_response(self) -> Response {
        self.log();
        if let CtfError::Unauthorized = self {
            // No detail on why
            return (StatusCode::UNAUTHORIZED, ()).into_response();
        }
        self.to_app_error().into_response()
    }
}
