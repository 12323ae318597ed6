use sentinel_classify::ClassifyError;
use sentinel_ports::StoreError;
use thiserror::Error;

/// Fatal run errors.
///
/// Sink failures are deliberately absent: a rejected notification is
/// handled inside the dispatch path (fallback, then log-only) and never
/// fails the run, because by that point state is already persisted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Classification error: {0}")]
    Classify(#[from] ClassifyError),
}

pub type EngineResult<T> = std::result::Result<T, EngineError>;
