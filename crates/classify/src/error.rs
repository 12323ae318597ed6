use thiserror::Error;

/// Classification errors
///
/// Crossover classification is total and never errors; only the regime
/// thresholds can fail, because a non-positive peak invalidates every
/// band boundary for the whole run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    #[error("Peak value must be positive, got {0}")]
    NonPositivePeak(String),
}

pub type ClassifyResult<T> = std::result::Result<T, ClassifyError>;
