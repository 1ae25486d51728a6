//! Database Module
//!
//! Handles the document store connection. The endpoint scheme selects the
//! engine (`rocksdb://` embedded, `ws://` remote); connection failures are
//! reported to the caller, which decides whether to fall back to demo mode.

pub mod models;
pub mod store;

use surrealdb::Surreal;
use surrealdb::engine::any::{self, Any};
use tokio::time::{Duration, timeout};

use crate::utils::AppError;

/// Connect to the document store and select namespace/database.
///
/// The timeout only applies here, at connection time; individual operations
/// are plain blocking calls against the established handle.
pub async fn connect(
    endpoint: &str,
    namespace: &str,
    database: &str,
    timeout_ms: u64,
) -> Result<Surreal<Any>, AppError> {
    let db = timeout(Duration::from_millis(timeout_ms), any::connect(endpoint))
        .await
        .map_err(|_| {
            AppError::database(format!(
                "Timed out connecting to {endpoint} after {timeout_ms}ms"
            ))
        })?
        .map_err(|e| AppError::database(format!("Failed to connect to {endpoint}: {e}")))?;

    db.use_ns(namespace)
        .use_db(database)
        .await
        .map_err(|e| AppError::database(format!("Failed to select {namespace}/{database}: {e}")))?;

    tracing::info!("Connected to document store: {}", endpoint);
    Ok(db)
}
