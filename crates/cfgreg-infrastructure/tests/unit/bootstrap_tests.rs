//! Registry Bootstrap Tests

use std::collections::BTreeMap;
use std::io::Write;

use cfgreg_domain::constants::{PRIORITY_ENTITY_CODER, PRIORITY_USER};
use cfgreg_domain::{Configuration, ContractMap, Error, RuntimeKind, TypeKey};
use cfgreg_infrastructure::config::{ConfigLoader, RegistryConfig};
use cfgreg_infrastructure::di::{build_registry, load_registry};
use serde_json::json;

use crate::fixtures::*;

fn contract_names() -> Vec<String> {
    vec![
        "reader-interceptor".to_string(),
        "writer-interceptor".to_string(),
        "exception-mapper".to_string(),
    ]
}

#[test]
fn test_build_registry_binds_providers_to_default_contracts() {
    let config = RegistryConfig {
        providers: vec!["gzip".to_string(), "status-mapper".to_string()],
        default_contracts: contract_names(),
        ..Default::default()
    };

    let registry = build_registry(&config).expect("registry should build");

    let gzip = registry.contracts(TypeKey::of::<GzipCodec>());
    assert_eq!(
        gzip,
        ContractMap::from([(reader(), PRIORITY_ENTITY_CODER), (writer(), PRIORITY_ENTITY_CODER)])
    );
    let status = registry.contracts(TypeKey::of::<StatusMapper>());
    assert_eq!(status, ContractMap::from([(mapper(), PRIORITY_USER)]));

    assert!(registry.is_registered(&GzipCodec));
    assert!(registry.is_registered(&StatusMapper::default()));
}

#[test]
fn test_build_registry_applies_priority_overrides() {
    let config = RegistryConfig {
        providers: vec!["status-mapper".to_string()],
        priorities: BTreeMap::from([("status-mapper".to_string(), 1234)]),
        default_contracts: contract_names(),
        ..Default::default()
    };

    let registry = build_registry(&config).expect("registry should build");

    assert_eq!(registry.contracts(mapper()).get(&mapper()), Some(&1234));
}

#[test]
fn test_build_registry_keeps_runtime_properties_and_features() {
    let config = RegistryConfig {
        runtime: RuntimeKind::Client,
        properties: BTreeMap::from([("retries".to_string(), json!(3))]),
        features: BTreeMap::from([("tracing".to_string(), false)]),
        ..Default::default()
    };

    let registry = build_registry(&config).expect("registry should build");

    assert_eq!(registry.runtime_kind(), RuntimeKind::Client);
    assert_eq!(registry.property("retries"), Some(&json!(3)));
    assert!(registry.is_enabled(&TracingFeature));
    assert_eq!(registry.feature_flag(&TracingFeature), Some(false));
}

#[test]
fn test_build_registry_without_default_contracts() {
    let config = RegistryConfig {
        providers: vec!["gzip".to_string()],
        ..Default::default()
    };

    let registry = build_registry(&config).expect("registry should build");

    assert!(registry.is_registered_class(TypeKey::of::<GzipCodec>()));
    assert!(registry.contracts(reader()).is_empty());
}

#[test]
fn test_build_registry_fails_on_broken_provider() {
    let config = RegistryConfig {
        providers: vec!["gzip".to_string(), "broken".to_string()],
        ..Default::default()
    };

    match build_registry(&config) {
        Err(Error::ProviderConstruction { class, .. }) => assert!(class.contains("BrokenProvider")),
        other => panic!("Expected ProviderConstruction error, got {other:?}"),
    }
}

#[test]
fn test_build_registry_fails_on_unknown_contract() {
    let config = RegistryConfig {
        default_contracts: vec!["nonexistent_contract_xyz".to_string()],
        ..Default::default()
    };

    match build_registry(&config) {
        Err(Error::UnknownName { kind, .. }) => assert_eq!(kind, "contract"),
        other => panic!("Expected UnknownName error, got {other:?}"),
    }
}

#[test]
fn test_load_registry_from_file() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("cfgreg.toml");
    let mut file = std::fs::File::create(&config_path).expect("Failed to create config file");
    writeln!(
        file,
        r#"
[registry]
runtime = "client"
providers = ["gzip"]
default_contracts = ["reader-interceptor"]

[registry.features]
tracing = true
"#
    )
    .expect("Failed to write config file");

    let loader = ConfigLoader::new().with_config_path(&config_path);
    let (config, registry) = load_registry(&loader).expect("registry should load");

    assert_eq!(config.registry.providers, vec!["gzip".to_string()]);
    assert_eq!(registry.runtime_kind(), RuntimeKind::Client);
    assert_eq!(
        registry.contracts(reader()),
        ContractMap::from([(reader(), PRIORITY_ENTITY_CODER)])
    );
    assert_eq!(registry.feature_flag(&TracingFeature), Some(true));
}
