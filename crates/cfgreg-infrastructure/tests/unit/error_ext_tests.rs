//! Error Extension Tests

use cfgreg_domain::Error;
use cfgreg_infrastructure::error_ext::ErrorContext;

fn io_failure() -> std::result::Result<(), std::io::Error> {
    Err(std::io::Error::new(std::io::ErrorKind::NotFound, "file missing"))
}

#[test]
fn test_context_maps_to_internal() {
    match io_failure().context("Loading registry") {
        Err(Error::Internal { message }) => {
            assert!(message.contains("Loading registry"));
            assert!(message.contains("file missing"));
        }
        other => panic!("Expected Internal error, got {other:?}"),
    }
}

#[test]
fn test_with_context_is_lazy() {
    let ok: std::result::Result<u8, std::io::Error> = Ok(7);
    let value = ok
        .with_context(|| -> String { panic!("context must not be built on success") })
        .expect("value should pass through");
    assert_eq!(value, 7);

    match io_failure().with_context(|| format!("Reading {}", "cfgreg.toml")) {
        Err(Error::Internal { message }) => assert!(message.starts_with("Reading cfgreg.toml")),
        other => panic!("Expected Internal error, got {other:?}"),
    }
}

#[test]
fn test_io_context_keeps_source() {
    match io_failure().io_context("Failed to write config file") {
        Err(Error::Io { message, source }) => {
            assert!(message.contains("Failed to write config file"));
            assert!(source.is_some());
        }
        other => panic!("Expected Io error, got {other:?}"),
    }
}

#[test]
fn test_config_context_keeps_source() {
    let parsed: std::result::Result<serde_json::Value, serde_json::Error> =
        serde_json::from_str("{not json");

    match parsed.config_context("Failed to parse properties") {
        Err(Error::Configuration { message, source }) => {
            assert!(message.starts_with("Failed to parse properties"));
            assert!(source.is_some());
        }
        other => panic!("Expected Configuration error, got {other:?}"),
    }
}
