//! Prediction pipeline: normalize, embed, classify.
//!
//! [`Pipeline`] holds the (normalizer, encoder, classifier) triple and is
//! immutable after construction; it is safe to share behind an `Arc` across
//! concurrent request handlers. The collaborator seams are the [`Encoder`]
//! and [`Classifier`] traits so alternate model backends can be substituted
//! without touching the orchestration.

mod error;


pub use error::PipelineError;

use tracing::{debug, warn};

use crate::classifier::{ClassifierConfig, ClassifierError, LinearClassifier};
use crate::config::Config;
use crate::constants::NO_INPUT_RATING;
use crate::embedding::{EmbeddingError, EncoderConfig, SentenceEncoder};
use crate::text::{NormalizerOptions, TextNormalizer};

/// Maps normalized texts to fixed-length embedding vectors, one per input,
/// in input order.
pub trait Encoder {
    fn encode(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError>;
}

/// Maps one embedding vector to a zero-based rating class.
pub trait Classifier {
    fn classify(&self, embedding: &[f32]) -> Result<u8, ClassifierError>;
}

impl Encoder for SentenceEncoder {
    fn encode(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        SentenceEncoder::encode(self, texts)
    }
}

impl Classifier for LinearClassifier {
    fn classify(&self, embedding: &[f32]) -> Result<u8, ClassifierError> {
        LinearClassifier::classify(self, embedding)
    }
}

/// The pipeline built by [`load_pipeline`].
pub type DefaultPipeline = Pipeline<SentenceEncoder, LinearClassifier>;

/// The shared (normalizer, encoder, classifier) triple.
pub struct Pipeline<E, C> {
    normalizer: TextNormalizer,
    encoder: E,
    classifier: C,
}

impl<E: Encoder, C: Classifier> Pipeline<E, C> {
    pub fn new(normalizer: TextNormalizer, encoder: E, classifier: C) -> Self {
        Self {
            normalizer,
            encoder,
            classifier,
        }
    }

    /// Predicts a one-based rating in `{1..5}` for a review text.
    ///
    /// Empty or whitespace-only input returns the in-band sentinel
    /// [`NO_INPUT_RATING`] (`0`) without invoking any collaborator. The
    /// sentinel is not a rating; callers must check for it.
    pub fn predict(&self, text: &str) -> Result<u8, PipelineError> {
        if text.trim().is_empty() {
            return Ok(NO_INPUT_RATING);
        }

        let clean = self.normalizer.preprocess(text);

        let mut embeddings = self.encoder.encode(&[clean.as_str()])?;
        let embedding = embeddings.remove(0);

        let class = self.classifier.classify(&embedding)?;

        debug!(
            clean_len = clean.len(),
            class, "Predicted rating class"
        );

        // Zero-based class {0..4} to one-based rating {1..5}. The +1 offset
        // is the only mapping.
        Ok(class + 1)
    }

    pub fn normalizer(&self) -> &TextNormalizer {
        &self.normalizer
    }

    pub fn encoder(&self) -> &E {
        &self.encoder
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }
}

/// Constructs the pipeline triple from configuration.
///
/// The server calls this once at startup and shares the result for the
/// process lifetime; the CLI calls it per invocation (fresh, uncached load).
/// A missing encoder or classifier path falls back to the corresponding stub
/// backend with a warning.
pub fn load_pipeline(config: &Config) -> Result<DefaultPipeline, PipelineError> {
    // Fixed service options: emoji removal on, stopwords off, lowercase off.
    let normalizer = TextNormalizer::new(NormalizerOptions::default());

    let encoder_config = match &config.encoder_path {
        Some(path) => EncoderConfig::new(path.clone()),
        None => {
            warn!("No STARGRADE_ENCODER_PATH configured, running encoder in stub mode");
            EncoderConfig::stub()
        }
    };
    let encoder = SentenceEncoder::load(encoder_config)?;

    let classifier_config = match &config.classifier_path {
        Some(path) => ClassifierConfig::new(path.clone()),
        None => {
            warn!("No STARGRADE_CLASSIFIER_PATH configured, running classifier in stub mode");
            ClassifierConfig::stub()
        }
    };
    let classifier = LinearClassifier::load(classifier_config)?;

    Ok(Pipeline::new(normalizer, encoder, classifier))
}
