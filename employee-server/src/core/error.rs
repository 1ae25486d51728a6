//! Server-level errors
//!
//! Startup and run-loop failures only; request-level errors are [`AppError`].
//!
//! [`AppError`]: crate::utils::AppError

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, ServerError>;
