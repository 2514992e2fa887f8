//! Rating classification head.
//!
//! [`LinearClassifier`] maps an embedding vector to a zero-based rating class
//! in `{0..4}`. The artifact is a safetensors file holding the linear head of
//! the trained classifier: `weight` `[num_classes, embedding_dim]` and `bias`
//! `[num_classes]`. Use [`ClassifierConfig::stub`] for tests without an
//! artifact.

mod error;

#[cfg(test)]
mod tests;

pub use error::ClassifierError;

use std::path::PathBuf;

use candle_core::{Device, Tensor};
use candle_nn::{Linear, Module};
use tracing::{info, warn};

use crate::constants::RATING_CLASSES;
use crate::embedding::device::select_device;

/// Configuration for [`LinearClassifier`].
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    /// Path to the safetensors artifact.
    pub artifact_path: PathBuf,
    /// Number of output classes. Default: 5 (zero-based `0..=4`).
    pub num_classes: usize,
    /// If true, run in deterministic stub mode (no artifact required).
    pub testing_stub: bool,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            artifact_path: PathBuf::new(),
            num_classes: RATING_CLASSES,
            testing_stub: false,
        }
    }
}

impl ClassifierConfig {
    /// Creates a config for an artifact file.
    pub fn new<P: Into<PathBuf>>(artifact_path: P) -> Self {
        Self {
            artifact_path: artifact_path.into(),
            ..Default::default()
        }
    }

    /// Creates a stub config (no artifact; produces deterministic classes).
    pub fn stub() -> Self {
        Self {
            testing_stub: true,
            ..Default::default()
        }
    }

    /// Validates required fields for non-stub mode.
    pub fn validate(&self) -> Result<(), ClassifierError> {
        if self.testing_stub {
            return Ok(());
        }

        if self.artifact_path.as_os_str().is_empty() {
            return Err(ClassifierError::InvalidConfig {
                reason: "artifact_path is required (stubbing is disabled)".to_string(),
            });
        }

        if !self.artifact_path.is_file() {
            return Err(ClassifierError::ArtifactNotFound {
                path: self.artifact_path.clone(),
            });
        }

        Ok(())
    }
}

enum ClassifierBackend {
    Model {
        head: Linear,
        input_dim: usize,
        device: Device,
    },
    Stub,
}

/// Linear rating head over sentence embeddings (supports stub mode).
pub struct LinearClassifier {
    backend: ClassifierBackend,
    config: ClassifierConfig,
}

impl std::fmt::Debug for LinearClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinearClassifier")
            .field(
                "backend",
                &match &self.backend {
                    ClassifierBackend::Model { input_dim, .. } => format!("Model(dim={input_dim})"),
                    ClassifierBackend::Stub => "Stub".to_string(),
                },
            )
            .field("num_classes", &self.config.num_classes)
            .finish()
    }
}

impl LinearClassifier {
    /// Loads the classifier from a config (stub mode is supported).
    pub fn load(config: ClassifierConfig) -> Result<Self, ClassifierError> {
        config.validate()?;

        if config.testing_stub {
            warn!("Rating classifier running in STUB mode (testing only)");
            return Ok(Self {
                backend: ClassifierBackend::Stub,
                config,
            });
        }

        let device = select_device().map_err(|e| ClassifierError::ArtifactLoadFailed {
            reason: e.to_string(),
        })?;

        let tensors = candle_core::safetensors::load(&config.artifact_path, &device).map_err(
            |e| ClassifierError::ArtifactLoadFailed {
                reason: e.to_string(),
            },
        )?;

        let weight = tensors
            .get("weight")
            .ok_or_else(|| ClassifierError::ArtifactLoadFailed {
                reason: "artifact is missing the 'weight' tensor".to_string(),
            })?
            .clone();
        let bias = tensors
            .get("bias")
            .ok_or_else(|| ClassifierError::ArtifactLoadFailed {
                reason: "artifact is missing the 'bias' tensor".to_string(),
            })?
            .clone();

        let (out_dim, input_dim) =
            weight
                .dims2()
                .map_err(|e| ClassifierError::ArtifactLoadFailed {
                    reason: e.to_string(),
                })?;
        let bias_dim = bias
            .dims1()
            .map_err(|e| ClassifierError::ArtifactLoadFailed {
                reason: e.to_string(),
            })?;

        if out_dim != config.num_classes || bias_dim != config.num_classes {
            return Err(ClassifierError::ArtifactLoadFailed {
                reason: format!(
                    "artifact shape mismatch: weight [{out_dim}, {input_dim}], bias [{bias_dim}], expected {} classes",
                    config.num_classes
                ),
            });
        }

        info!(
            artifact = %config.artifact_path.display(),
            num_classes = out_dim,
            embedding_dim = input_dim,
            "Rating classifier loaded"
        );

        Ok(Self {
            backend: ClassifierBackend::Model {
                head: Linear::new(weight, Some(bias)),
                input_dim,
                device,
            },
            config,
        })
    }

    /// Maps one embedding vector to a zero-based class in
    /// `{0..num_classes-1}` (argmax over logits).
    pub fn classify(&self, embedding: &[f32]) -> Result<u8, ClassifierError> {
        match &self.backend {
            ClassifierBackend::Model {
                head,
                input_dim,
                device,
            } => {
                if embedding.len() != *input_dim {
                    return Err(ClassifierError::DimensionMismatch {
                        expected: *input_dim,
                        actual: embedding.len(),
                    });
                }

                let input = Tensor::new(embedding, device)?.unsqueeze(0)?;
                let logits = head.forward(&input)?.squeeze(0)?.to_vec1::<f32>()?;

                Ok(argmax(&logits))
            }
            ClassifierBackend::Stub => Ok(self.classify_stub(embedding)),
        }
    }

    fn classify_stub(&self, embedding: &[f32]) -> u8 {
        use std::hash::{DefaultHasher, Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        for x in embedding {
            x.to_bits().hash(&mut hasher);
        }

        (hasher.finish() % self.config.num_classes as u64) as u8
    }

    /// Returns the number of output classes.
    pub fn num_classes(&self) -> usize {
        self.config.num_classes
    }

    /// Returns `true` if running in stub mode.
    pub fn is_stub(&self) -> bool {
        matches!(self.backend, ClassifierBackend::Stub)
    }
}

fn argmax(logits: &[f32]) -> u8 {
    let mut best = 0usize;
    for (i, v) in logits.iter().enumerate() {
        if *v > logits[best] {
            best = i;
        }
    }
    best as u8
}
