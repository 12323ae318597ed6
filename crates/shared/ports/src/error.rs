use thiserror::Error;

/// Errors surfaced by state and regime stores
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Resource not found: {0}")]
    MissingResource(String),

    #[error("Read failed: {0}")]
    Read(String),

    #[error("Write failed: {0}")]
    Write(String),

    #[error("Partial-width write rejected: expected {expected} rows, got {got}")]
    PartialWrite { expected: usize, got: usize },

    #[error("Regime flags inconsistent: {0} flags set")]
    InconsistentFlags(usize),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Errors surfaced by the notification sink
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SinkError {
    #[error("Send failed: {0}")]
    Send(String),

    #[error("Recipient rejected: {0}")]
    Rejected(String),
}

pub type SinkResult<T> = std::result::Result<T, SinkError>;
