use std::sync::Arc;

use crate::pipeline::{Classifier, Encoder, Pipeline};

/// Shared, read-only request-handler state: the pipeline triple, constructed
/// once at startup and referenced by every request.
pub struct AppState<E, C> {
    pub pipeline: Arc<Pipeline<E, C>>,
}

impl<E, C> Clone for AppState<E, C> {
    fn clone(&self) -> Self {
        Self {
            pipeline: Arc::clone(&self.pipeline),
        }
    }
}

impl<E, C> AppState<E, C>
where
    E: Encoder + Send + Sync + 'static,
    C: Classifier + Send + Sync + 'static,
{
    pub fn new(pipeline: Pipeline<E, C>) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
        }
    }
}
