//! Error types for rs2-observable
//!
//! The notification path itself is success-only. These errors come from
//! validating recorded notification sequences, configuration and exports.

/// Main error type for observable tooling
#[derive(Debug, thiserror::Error)]
pub enum ObservableError {
    /// A `Next` was delivered after `Completed`
    #[error("Next notification at index {index} after completion")]
    NextAfterCompleted { index: usize },
    /// A second `Completed` was delivered
    #[error("Duplicate completion at index {index}")]
    DuplicateCompleted { index: usize },
    /// The sequence never completed
    #[error("Notification sequence did not complete")]
    MissingCompleted,
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for rs2-observable operations
pub type ObservableResult<T> = Result<T, ObservableError>;
