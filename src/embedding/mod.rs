//! Sentence embedding generation.
//!
//! [`SentenceEncoder`] runs a BERT-family sentence-embedding model
//! (the safetensors export of `paraphrase-multilingual-MiniLM-L12-v2`) with
//! candle and mean-pools token states over the attention mask. Use
//! [`EncoderConfig::stub`] for tests/examples without model files.

/// Encoder configuration.
pub mod config;
/// Device selection (CPU / Metal / CUDA).
pub mod device;
mod error;


pub use config::EncoderConfig;
pub use error::EmbeddingError;

use std::path::Path;
use std::sync::Arc;

use candle_core::{DType, Device, Tensor};
use candle_nn::VarBuilder;
use candle_transformers::models::bert::{BertModel, Config as BertConfig, DTYPE};
use tokenizers::{Tokenizer, TruncationParams};
use tracing::{debug, info, warn};

use crate::embedding::device::select_device;

enum EncoderBackend {
    Model {
        model: Arc<BertModel>,
        tokenizer: Arc<Tokenizer>,
        device: Device,
    },
    Stub {
        device: Device,
    },
}

/// Sentence embedder for review text (supports stub mode).
pub struct SentenceEncoder {
    backend: EncoderBackend,
    config: EncoderConfig,
    embedding_dim: usize,
}

impl std::fmt::Debug for SentenceEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentenceEncoder")
            .field(
                "backend",
                &match &self.backend {
                    EncoderBackend::Model { device, .. } => format!("Model({:?})", device),
                    EncoderBackend::Stub { device } => format!("Stub({:?})", device),
                },
            )
            .field("embedding_dim", &self.embedding_dim)
            .field("max_seq_len", &self.config.max_seq_len)
            .finish()
    }
}

impl SentenceEncoder {
    /// Loads the encoder from a config (stub mode is supported).
    pub fn load(config: EncoderConfig) -> Result<Self, EmbeddingError> {
        config.validate()?;

        let device = select_device()?;
        debug!(?device, "Selected compute device for sentence encoder");

        if config.testing_stub {
            warn!("Sentence encoder running in STUB mode (testing only)");
            let embedding_dim = config.embedding_dim;
            return Ok(Self {
                backend: EncoderBackend::Stub { device },
                config,
                embedding_dim,
            });
        }

        if !config.model_available() {
            return Err(EmbeddingError::ModelNotFound {
                path: config.model_dir.clone(),
            });
        }

        let (model, tokenizer, hidden_size) = Self::load_model(&config, &device)?;

        info!(
            model_dir = %config.model_dir.display(),
            embedding_dim = hidden_size,
            max_seq_len = config.max_seq_len,
            "Sentence-embedding model loaded"
        );

        Ok(Self {
            backend: EncoderBackend::Model {
                model: Arc::new(model),
                tokenizer: Arc::new(tokenizer),
                device,
            },
            config,
            embedding_dim: hidden_size,
        })
    }

    fn load_model(
        config: &EncoderConfig,
        device: &Device,
    ) -> Result<(BertModel, Tokenizer, usize), EmbeddingError> {
        let tokenizer = load_tokenizer_with_truncation(&config.tokenizer_path(), config.max_seq_len)
            .map_err(|e| EmbeddingError::TokenizationFailed {
                reason: format!("failed to load tokenizer: {}", e),
            })?;

        let config_content = std::fs::read_to_string(config.config_path())?;
        let bert_config: BertConfig =
            serde_json::from_str(&config_content).map_err(|e| EmbeddingError::ModelLoadFailed {
                reason: format!("failed to parse model config: {}", e),
            })?;

        let vb = unsafe {
            VarBuilder::from_mmaped_safetensors(&[config.weights_path()], DTYPE, device)?
        };

        let model = if vb.contains_tensor("bert.embeddings.word_embeddings.weight") {
            BertModel::load(vb.pp("bert"), &bert_config)?
        } else {
            BertModel::load(vb, &bert_config)?
        };

        Ok((model, tokenizer, bert_config.hidden_size))
    }

    /// Generates embeddings for a batch of strings; output order is parallel
    /// to the input order.
    pub fn encode(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        if texts.is_empty() {
            return Ok(vec![]);
        }

        match &self.backend {
            EncoderBackend::Model {
                model,
                tokenizer,
                device,
            } => texts
                .iter()
                .map(|text| self.encode_with_model(text, model, tokenizer, device))
                .collect(),
            EncoderBackend::Stub { .. } => {
                Ok(texts.iter().map(|text| self.encode_stub(text)).collect())
            }
        }
    }

    fn encode_with_model(
        &self,
        text: &str,
        model: &Arc<BertModel>,
        tokenizer: &Tokenizer,
        device: &Device,
    ) -> Result<Vec<f32>, EmbeddingError> {
        let encoding =
            tokenizer
                .encode(text, true)
                .map_err(|e| EmbeddingError::TokenizationFailed {
                    reason: e.to_string(),
                })?;

        let ids = encoding.get_ids();
        if ids.is_empty() {
            return Ok(vec![0.0; self.embedding_dim]);
        }

        debug!(
            text_len = text.len(),
            token_count = ids.len(),
            "Generating sentence embedding"
        );

        let input_ids = Tensor::new(ids, device)?.unsqueeze(0)?;
        let token_type_ids = Tensor::new(encoding.get_type_ids(), device)?.unsqueeze(0)?;
        let attention_mask = Tensor::new(encoding.get_attention_mask(), device)?.unsqueeze(0)?;

        // [1, seq_len, hidden_size]
        let hidden = model.forward(&input_ids, &token_type_ids, Some(&attention_mask))?;

        // Mean pooling over the attention mask (sentence-transformers
        // convention, no L2 normalization).
        let mask = attention_mask.to_dtype(DType::F32)?.unsqueeze(2)?;
        let summed = hidden.broadcast_mul(&mask)?.sum(1)?;
        let counts = mask.sum(1)?;
        let mean = summed.broadcast_div(&counts)?;

        Ok(mean.squeeze(0)?.to_vec1::<f32>()?)
    }

    fn encode_stub(&self, text: &str) -> Vec<f32> {
        use std::hash::{DefaultHasher, Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        text.hash(&mut hasher);
        let seed = hasher.finish();

        let mut embedding = Vec::with_capacity(self.embedding_dim);
        let mut state = seed;

        for _ in 0..self.embedding_dim {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
            let value = ((state >> 32) as f32 / u32::MAX as f32) * 2.0 - 1.0;
            embedding.push(value);
        }

        embedding
    }

    /// Returns the output embedding dimension.
    pub fn embedding_dim(&self) -> usize {
        self.embedding_dim
    }

    /// Returns `true` if running in stub mode.
    pub fn is_stub(&self) -> bool {
        matches!(self.backend, EncoderBackend::Stub { .. })
    }

    /// Returns the encoder configuration.
    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }
}

/// Loads a tokenizer with truncation enabled for a maximum sequence length.
fn load_tokenizer_with_truncation(
    tokenizer_path: &Path,
    max_len: usize,
) -> std::io::Result<Tokenizer> {
    let mut tokenizer = Tokenizer::from_file(tokenizer_path).map_err(std::io::Error::other)?;

    let truncation = TruncationParams {
        max_length: max_len,
        ..Default::default()
    };

    tokenizer
        .with_truncation(Some(truncation))
        .map_err(|e| std::io::Error::other(format!("failed to configure truncation: {}", e)))?;

    Ok(tokenizer)
}
