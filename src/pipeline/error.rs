use thiserror::Error;

use crate::classifier::ClassifierError;
use crate::embedding::EmbeddingError;

/// Errors surfaced by pipeline loading and prediction. Empty input is not an
/// error (see the `predict` sentinel).
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Embedding(#[from] EmbeddingError),

    #[error(transparent)]
    Classifier(#[from] ClassifierError),
}
