use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("classifier artifact not found at path: {path}")]
    ArtifactNotFound { path: PathBuf },

    #[error("failed to load classifier artifact: {reason}")]
    ArtifactLoadFailed { reason: String },

    #[error("embedding dimension mismatch: classifier expects {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("classification failed: {reason}")]
    InferenceFailed { reason: String },

    #[error("invalid classifier configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl From<candle_core::Error> for ClassifierError {
    fn from(err: candle_core::Error) -> Self {
        ClassifierError::InferenceFailed {
            reason: err.to_string(),
        }
    }
}
