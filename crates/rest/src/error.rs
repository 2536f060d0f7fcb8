//! Error types for the HTTP layer.
//!
//! Every failure leaving the API has the same body shape:
//! `{"success": false, "message": "..."}`.
//!
//! Store errors map onto HTTP status codes as follows:
//!
//! | Store error | HTTP status |
//! |-------------|-------------|
//! | InvalidTable, InvalidId, EmptyUpdate, EmptyInsert, UnknownColumn, NonScalarValue | 400 |
//! | Creation, Update, Deletion, Query, Backend | 500 |
//!
//! The 500-class messages are the coarse operation wrappers' display text
//! (operation + table only); underlying engine errors were already logged
//! at the store boundary and never appear in a response.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use seqgate_store::StoreError;

/// Result alias for handlers.
pub type RestResult<T> = Result<T, RestError>;

/// The error type for REST API operations.
#[derive(Debug, Error)]
pub enum RestError {
    /// Client-input problem (HTTP 400).
    #[error("{message}")]
    BadRequest {
        /// Human-readable description.
        message: String,
    },

    /// Target row does not exist (HTTP 404).
    #[error("{message}")]
    NotFound {
        /// Human-readable description.
        message: String,
    },

    /// Server-side failure (HTTP 500).
    #[error("{message}")]
    Internal {
        /// Generic description; never contains raw engine errors.
        message: String,
    },
}

impl RestError {
    /// Convenience constructor for client-input errors.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    /// Convenience constructor for not-found errors.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// The HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            RestError::NotFound { .. } => StatusCode::NOT_FOUND,
            RestError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for RestError {
    fn from(err: StoreError) -> Self {
        if err.is_client_error() {
            RestError::BadRequest {
                message: err.to_string(),
            }
        } else {
            RestError::Internal {
                message: err.to_string(),
            }
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({
            "success": false,
            "message": self.to_string(),
        }));
        (status, body).into_response()
    }
}
