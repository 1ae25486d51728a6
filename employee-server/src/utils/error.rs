//! Unified error handling
//!
//! Provides the application error type and its HTTP mapping:
//! - [`AppError`] - application error enum
//! - [`ErrorBody`] - JSON body rendered for error responses
//!
//! # Status code mapping
//!
//! | Variant | Status | Body |
//! |---------|--------|------|
//! | Validation | 400 | `{message, errors}` |
//! | Duplicate | 400 | `{message, errors}` |
//! | NotFound | 404 | `{message, employee_id}` |
//! | BadRequest | 400 | `{message, example?}` |
//! | Database / Internal | 500 | `{message, error}` |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

/// JSON body for error responses
///
/// Only the fields relevant to the error kind are serialized.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorBody {
    fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            errors: None,
            employee_id: None,
            example: None,
            error: None,
        }
    }
}

/// Application-level error type
///
/// Validation and not-found conditions are expected outcomes and map to 4xx;
/// store/runtime failures map to 500 with the underlying message echoed in
/// the body (demo-grade debuggability) and logged server-side.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== Client-correctable errors (4xx) ==========
    #[error("Validation failed")]
    Validation(Vec<String>),

    #[error("{message}")]
    Duplicate {
        message: String,
        errors: Vec<String>,
    },

    #[error("Employee not found: {employee_id}")]
    NotFound { employee_id: String },

    #[error("{message}")]
    BadRequest {
        message: String,
        example: Option<String>,
    },

    // ========== System errors (5xx) ==========
    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Validation(errors) => {
                let mut body = ErrorBody::message("Validation failed");
                body.errors = Some(errors);
                (StatusCode::BAD_REQUEST, body)
            }

            AppError::Duplicate { message, errors } => {
                let mut body = ErrorBody::message(message);
                body.errors = Some(errors);
                (StatusCode::BAD_REQUEST, body)
            }

            AppError::NotFound { employee_id } => {
                let mut body = ErrorBody::message("Employee not found");
                body.employee_id = Some(employee_id);
                (StatusCode::NOT_FOUND, body)
            }

            AppError::BadRequest { message, example } => {
                let mut body = ErrorBody::message(message);
                body.example = example;
                (StatusCode::BAD_REQUEST, body)
            }

            AppError::Database(msg) => {
                error!(target: "store", error = %msg, "Store error occurred");
                let mut body = ErrorBody::message("Internal server error");
                body.error = Some(msg);
                (StatusCode::INTERNAL_SERVER_ERROR, body)
            }

            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                let mut body = ErrorBody::message("Internal server error");
                body.error = Some(msg);
                (StatusCode::INTERNAL_SERVER_ERROR, body)
            }
        };

        (status, Json(body)).into_response()
    }
}

// ========== Helper Constructors ==========

impl AppError {
    pub fn not_found(employee_id: impl Into<String>) -> Self {
        Self::NotFound {
            employee_id: employee_id.into(),
        }
    }

    pub fn duplicate(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Duplicate {
            message: message.into(),
            errors: vec![detail.into()],
        }
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
