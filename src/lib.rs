//! Stargrade library crate (used by the server, the CLI and integration tests).
//!
//! The crate implements one pipeline: free-text review in, 1-5 star rating out.
//!
//! - [`text`] - deterministic text normalization (URL/HTML stripping, NFKC,
//!   optional lowercasing / emoji removal / stopword filtering).
//! - [`embedding`] - sentence embedder (BERT-family model run with candle,
//!   mean pooling; deterministic stub backend for tests).
//! - [`classifier`] - linear rating head loaded from a safetensors artifact.
//! - [`pipeline`] - the [`Pipeline`] triple and the `predict` orchestration.
//! - [`gateway`] - Axum HTTP surface (`/health`, `/`, `/predict`).
//! - [`config`] - `STARGRADE_*` environment configuration.

pub mod classifier;
pub mod config;
pub mod constants;
pub mod embedding;
pub mod gateway;
pub mod pipeline;
pub mod text;

pub use classifier::{ClassifierConfig, ClassifierError, LinearClassifier};
pub use config::{Config, ConfigError};
pub use constants::{DEFAULT_EMBEDDING_DIM, DEFAULT_MAX_SEQ_LEN, NO_INPUT_RATING, RATING_CLASSES};
pub use embedding::{EmbeddingError, EncoderConfig, SentenceEncoder};
pub use pipeline::{
    Classifier, DefaultPipeline, Encoder, Pipeline, PipelineError, load_pipeline,
};
pub use text::{DEFAULT_STOPWORDS, NormalizerOptions, TextNormalizer};
