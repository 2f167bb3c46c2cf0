//! Unit tests for domain error types

use std::error::Error as _;

use cfgreg_domain::Error;

#[test]
fn test_provider_construction_error() {
    let error = Error::provider_construction("demo::Gzip");
    match &error {
        Error::ProviderConstruction { class, source } => {
            assert_eq!(class, "demo::Gzip");
            assert!(source.is_none());
        }
        _ => panic!("Expected ProviderConstruction error"),
    }
    assert!(error.to_string().contains("demo::Gzip"));
}

#[test]
fn test_provider_construction_keeps_source() {
    let error = Error::provider_construction_with_source("demo::Gzip", "boom".into());
    let source = error.source().expect("source should be kept");
    assert_eq!(source.to_string(), "boom");
}

#[test]
fn test_unknown_name_lists_available() {
    let error = Error::unknown_name("provider class", "brotli", ["gzip", "deflate"]);
    match &error {
        Error::UnknownName {
            kind,
            name,
            available,
        } => {
            assert_eq!(*kind, "provider class");
            assert_eq!(name, "brotli");
            assert_eq!(available, &vec!["gzip".to_string(), "deflate".to_string()]);
        }
        _ => panic!("Expected UnknownName error"),
    }
    let display = error.to_string();
    assert!(display.contains("brotli"));
    assert!(display.contains("gzip"));
}

#[test]
fn test_config_error() {
    let error = Error::config("Missing required config");
    match error {
        Error::Config { message } => assert_eq!(message, "Missing required config"),
        _ => panic!("Expected Config error"),
    }
}

#[test]
fn test_io_error_with_source() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let error = Error::io_with_source("Failed to read", io_error);
    match error {
        Error::Io { message, source } => {
            assert_eq!(message, "Failed to read");
            assert!(source.is_some());
        }
        _ => panic!("Expected Io error"),
    }
}

#[test]
fn test_configuration_error_with_source() {
    let io_error = std::io::Error::other("unreadable");
    let error = Error::configuration_with_source("Failed to extract configuration", io_error);
    match error {
        Error::Configuration { message, source } => {
            assert_eq!(message, "Failed to extract configuration");
            assert!(source.is_some());
        }
        _ => panic!("Expected Configuration error"),
    }
}

#[test]
fn test_internal_error() {
    let error = Error::internal("registry state lost");
    match &error {
        Error::Internal { message } => assert_eq!(message, "registry state lost"),
        _ => panic!("Expected Internal error"),
    }
    assert_eq!(error.to_string(), "Internal error: registry state lost");
}

#[test]
fn test_json_error_conversion() {
    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: Error = json_error.into();
    assert!(matches!(error, Error::Json { .. }));
}
