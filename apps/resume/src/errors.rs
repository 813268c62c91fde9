use thiserror::Error;

/// Failures of the key-value slot store.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Quota exceeded writing '{key}': {needed} bytes needed, quota is {quota}")]
    QuotaExceeded {
        key: String,
        needed: usize,
        quota: usize,
    },

    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Outcome of a rejected save. Returned to the caller, never raised past it.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Carries the first validation message verbatim.
    #[error("{0}")]
    ValidationFailed(String),

    #[error("Failed to save resume: {0}")]
    StorageWriteFailed(#[source] StorageError),
}

impl PersistenceError {
    /// Text shown to the user. Storage causes are hidden behind a generic message.
    pub fn user_message(&self) -> String {
        match self {
            PersistenceError::ValidationFailed(msg) => msg.clone(),
            PersistenceError::StorageWriteFailed(_) => "Failed to save resume".to_string(),
        }
    }
}
