use super::*;
use candle_core::{Device, Tensor};
use std::collections::HashMap;
use std::path::Path;

/// Writes a safetensors artifact with an identity-like head: class logits are
/// the first `classes` components of the input, so argmax(input[..classes])
/// picks the class.
fn write_passthrough_artifact(path: &Path, classes: usize, dim: usize) {
    let device = Device::Cpu;
    let mut weight = vec![0f32; classes * dim];
    for c in 0..classes {
        weight[c * dim + c] = 1.0;
    }
    let tensors = HashMap::from([
        (
            "weight".to_string(),
            Tensor::from_vec(weight, (classes, dim), &device).expect("weight tensor"),
        ),
        (
            "bias".to_string(),
            Tensor::zeros((classes,), candle_core::DType::F32, &device).expect("bias tensor"),
        ),
    ]);
    candle_core::safetensors::save(&tensors, path).expect("save artifact");
}

mod config_tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config() {
        let config = ClassifierConfig::default();
        assert_eq!(config.num_classes, crate::constants::RATING_CLASSES);
        assert!(!config.testing_stub);
        assert!(config.artifact_path.as_os_str().is_empty());
    }

    #[test]
    fn test_stub_config_validates() {
        assert!(ClassifierConfig::stub().validate().is_ok());
    }

    #[test]
    fn test_validation_empty_path() {
        let config = ClassifierConfig::default();
        assert!(matches!(
            config.validate(),
            Err(ClassifierError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_validation_nonexistent_artifact() {
        let config = ClassifierConfig::new(PathBuf::from("/nonexistent/head.safetensors"));
        assert!(matches!(
            config.validate(),
            Err(ClassifierError::ArtifactNotFound { .. })
        ));
    }
}

mod stub_tests {
    use super::*;

    fn stub_classifier() -> LinearClassifier {
        LinearClassifier::load(ClassifierConfig::stub()).expect("stub classifier should load")
    }

    #[test]
    fn test_load_stub() {
        let c = stub_classifier();
        assert!(c.is_stub());
        assert_eq!(c.num_classes(), crate::constants::RATING_CLASSES);
    }

    #[test]
    fn test_stub_class_in_range() {
        let c = stub_classifier();
        for i in 0..20 {
            let embedding = vec![i as f32 * 0.1; 8];
            let class = c.classify(&embedding).expect("classify");
            assert!((class as usize) < c.num_classes());
        }
    }

    #[test]
    fn test_stub_determinism() {
        let c = stub_classifier();
        let embedding = vec![0.5, -0.25, 0.75];
        let a = c.classify(&embedding).expect("classify");
        let b = c.classify(&embedding).expect("classify");
        assert_eq!(a, b);
    }
}

mod artifact_tests {
    use super::*;

    #[test]
    fn test_load_and_classify_from_artifact() {
        let temp = tempfile::TempDir::new().expect("create temp dir");
        let path = temp.path().join("head.safetensors");
        write_passthrough_artifact(&path, 5, 8);

        let c = LinearClassifier::load(ClassifierConfig::new(&path)).expect("load artifact");
        assert!(!c.is_stub());

        // Component 3 dominates, so class 3 wins.
        let mut embedding = vec![0f32; 8];
        embedding[3] = 1.0;
        assert_eq!(c.classify(&embedding).expect("classify"), 3);

        embedding[3] = 0.0;
        embedding[0] = 2.0;
        assert_eq!(c.classify(&embedding).expect("classify"), 0);
    }

    #[test]
    fn test_dimension_mismatch_is_an_error() {
        let temp = tempfile::TempDir::new().expect("create temp dir");
        let path = temp.path().join("head.safetensors");
        write_passthrough_artifact(&path, 5, 8);

        let c = LinearClassifier::load(ClassifierConfig::new(&path)).expect("load artifact");
        let result = c.classify(&[1.0, 2.0]);
        assert!(matches!(
            result,
            Err(ClassifierError::DimensionMismatch {
                expected: 8,
                actual: 2
            })
        ));
    }

    #[test]
    fn test_class_count_mismatch_rejected() {
        let temp = tempfile::TempDir::new().expect("create temp dir");
        let path = temp.path().join("head.safetensors");
        // Three classes in the artifact, five expected by default.
        write_passthrough_artifact(&path, 3, 8);

        let result = LinearClassifier::load(ClassifierConfig::new(&path));
        assert!(matches!(
            result,
            Err(ClassifierError::ArtifactLoadFailed { .. })
        ));
    }

    #[test]
    fn test_missing_tensor_rejected() {
        let temp = tempfile::TempDir::new().expect("create temp dir");
        let path = temp.path().join("head.safetensors");

        let device = Device::Cpu;
        let tensors = HashMap::from([(
            "weight".to_string(),
            Tensor::zeros((5, 8), candle_core::DType::F32, &device).expect("weight"),
        )]);
        candle_core::safetensors::save(&tensors, &path).expect("save artifact");

        let result = LinearClassifier::load(ClassifierConfig::new(&path));
        assert!(matches!(
            result,
            Err(ClassifierError::ArtifactLoadFailed { .. })
        ));
    }

    #[test]
    fn test_garbage_artifact_rejected() {
        let temp = tempfile::TempDir::new().expect("create temp dir");
        let path = temp.path().join("head.safetensors");
        std::fs::write(&path, b"not a safetensors file").expect("write garbage");

        assert!(LinearClassifier::load(ClassifierConfig::new(&path)).is_err());
    }
}
