use super::*;
use serial_test::serial;
use std::env;
use std::net::IpAddr;
use std::path::PathBuf;

fn with_env_vars<F, R>(vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, value) in vars {
        unsafe { env::set_var(key, value) };
    }

    let result = f();

    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, _) in vars {
        unsafe { env::remove_var(key) };
    }

    result
}

fn clear_stargrade_env() {
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    unsafe {
        env::remove_var("STARGRADE_PORT");
        env::remove_var("STARGRADE_BIND_ADDR");
        env::remove_var("STARGRADE_ENCODER_PATH");
        env::remove_var("STARGRADE_CLASSIFIER_PATH");
    }
}

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.port, 8080);
    assert_eq!(
        config.bind_addr,
        IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1))
    );
    assert!(config.encoder_path.is_none());
    assert!(config.classifier_path.is_none());
}

#[test]
fn test_socket_addr() {
    let config = Config::default();
    assert_eq!(config.socket_addr(), "127.0.0.1:8080");

    let config = Config {
        port: 3000,
        ..Config::default()
    };
    assert_eq!(config.socket_addr(), "127.0.0.1:3000");
}

#[test]
#[serial]
fn test_from_env_defaults() {
    clear_stargrade_env();

    let config = Config::from_env().expect("defaults should parse");
    assert_eq!(config.port, 8080);
    assert!(config.encoder_path.is_none());
    assert!(config.classifier_path.is_none());
}

#[test]
#[serial]
fn test_from_env_overrides() {
    clear_stargrade_env();

    let config = with_env_vars(
        &[
            ("STARGRADE_PORT", "9000"),
            ("STARGRADE_BIND_ADDR", "0.0.0.0"),
            ("STARGRADE_ENCODER_PATH", "/models/encoder"),
            ("STARGRADE_CLASSIFIER_PATH", "/models/classifier.safetensors"),
        ],
        || Config::from_env().expect("overrides should parse"),
    );

    assert_eq!(config.port, 9000);
    assert_eq!(config.bind_addr, "0.0.0.0".parse::<IpAddr>().unwrap());
    assert_eq!(config.encoder_path, Some(PathBuf::from("/models/encoder")));
    assert_eq!(
        config.classifier_path,
        Some(PathBuf::from("/models/classifier.safetensors"))
    );
}

#[test]
#[serial]
fn test_from_env_invalid_port() {
    clear_stargrade_env();

    let result = with_env_vars(&[("STARGRADE_PORT", "not-a-port")], Config::from_env);
    assert!(matches!(result, Err(ConfigError::PortParseError { .. })));

    let result = with_env_vars(&[("STARGRADE_PORT", "0")], Config::from_env);
    assert!(matches!(result, Err(ConfigError::InvalidPort { .. })));
}

#[test]
#[serial]
fn test_from_env_invalid_bind_addr() {
    clear_stargrade_env();

    let result = with_env_vars(&[("STARGRADE_BIND_ADDR", "nope")], Config::from_env);
    assert!(matches!(result, Err(ConfigError::InvalidBindAddr { .. })));
}

#[test]
#[serial]
fn test_from_env_whitespace_paths_ignored() {
    clear_stargrade_env();

    let config = with_env_vars(
        &[
            ("STARGRADE_ENCODER_PATH", "   "),
            ("STARGRADE_CLASSIFIER_PATH", "\t"),
        ],
        || Config::from_env().expect("blank paths should fall back"),
    );

    assert!(config.encoder_path.is_none());
    assert!(config.classifier_path.is_none());
}

#[test]
fn test_validate_missing_encoder_dir() {
    let config = Config {
        encoder_path: Some(PathBuf::from("/definitely/nonexistent/encoder")),
        ..Config::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::PathNotFound { .. })
    ));
}

#[test]
fn test_validate_encoder_path_must_be_dir() {
    let temp = tempfile::TempDir::new().expect("create temp dir");
    let file_path = temp.path().join("encoder");
    std::fs::File::create(&file_path).expect("create file");

    let config = Config {
        encoder_path: Some(file_path),
        ..Config::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::NotADirectory { .. })
    ));
}

#[test]
fn test_validate_classifier_path_must_be_file() {
    let temp = tempfile::TempDir::new().expect("create temp dir");

    let config = Config {
        classifier_path: Some(temp.path().to_path_buf()),
        ..Config::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::NotAFile { .. })
    ));
}

#[test]
fn test_validate_ok_with_real_paths() {
    let temp = tempfile::TempDir::new().expect("create temp dir");
    let artifact = temp.path().join("classifier.safetensors");
    std::fs::File::create(&artifact).expect("create artifact");

    let config = Config {
        encoder_path: Some(temp.path().to_path_buf()),
        classifier_path: Some(artifact),
        ..Config::default()
    };
    assert!(config.validate().is_ok());
}
