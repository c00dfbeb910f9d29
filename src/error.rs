//! Application error types and HTTP response mapping.
//!
//! `AppError` is the single failure taxonomy for the whole request path and
//! implements Axum's `IntoResponse`, making it the one place where internal
//! failures become HTTP statuses.
//!
//! Error mappings:
//! - `NotFound` → 404
//! - `InvalidType`, `Store`, `Config`, `Internal` → 500
//!
//! Every error is logged with full detail before translation; the client
//! only ever sees a short category message, never raw store error text.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::store::EntryKind;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("unsupported object kind {kind} at {path}")]
    InvalidType { path: String, kind: EntryKind },

    #[error("store error: {0}")]
    Store(#[from] git2::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Log level for this failure. Everything is logged; a missing path is
    /// routine traffic, anything else is a server-side problem. `info` keeps
    /// 404s visible under the default subscriber filter.
    fn severity(&self) -> tracing::Level {
        match self {
            AppError::NotFound(_) => tracing::Level::INFO,
            _ => tracing::Level::ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "not found".to_string()),
            AppError::InvalidType { kind, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("unsupported object kind: {kind}"),
            ),
            AppError::Store(_) | AppError::Config(_) | AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal server error".to_string(),
            ),
        };

        if self.severity() == tracing::Level::INFO {
            tracing::info!(error = %self, "request failed");
        } else {
            tracing::error!(error = %self, "request failed");
        }

        (status, message).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
