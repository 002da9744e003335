use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// I/O error during read or write.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// A record file did not contain valid JSON.
    #[error("invalid record JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The requested record is not in the store.
    #[error("record '{0}' not found in store")]
    NotFound(String),
}
