//! Tests for provider construction and contract map helpers

use cfgreg_application::{create_provider, init_contracts_map};
use cfgreg_domain::{Error, ProviderClass};

use crate::fixtures::*;

#[test]
fn test_create_provider_uses_constructor() {
    let provider = create_provider(&GzipCodec::provider_class()).expect("Gzip is constructible");
    assert!(provider.eq_component(&GzipCodec));
}

#[test]
fn test_create_provider_without_constructor() {
    let result = create_provider(&ProviderClass::of::<EndpointProvider>());
    assert!(matches!(
        result,
        Err(Error::ProviderConstruction { source: None, .. })
    ));
}

#[test]
fn test_create_provider_wraps_constructor_failure() {
    match create_provider(&BrokenProvider::provider_class()) {
        Err(Error::ProviderConstruction { class, source }) => {
            assert!(class.ends_with("BrokenProvider"));
            assert!(source.is_some());
        }
        Err(other) => panic!("Expected ProviderConstruction error, got {other}"),
        Ok(provider) => panic!("Expected failure, got {provider:?}"),
    }
}

#[test]
fn test_init_contracts_map_same_priority() {
    let map = init_contracts_map(3, &[reader(), writer(), mapper()]);
    assert_eq!(map.len(), 3);
    assert!(map.values().all(|priority| *priority == 3));
}
