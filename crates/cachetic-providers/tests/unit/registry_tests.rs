//! Tests for link-time provider registration

// Force linkme registration of every provider in this crate
extern crate cachetic_providers;

use cachetic_domain::registry::{
    CacheProviderConfig, is_registered, list_cache_providers, resolve_cache_provider,
};
use tempfile::TempDir;

#[test]
fn test_always_built_providers_registered() {
    assert!(is_registered("disk"));
    assert!(is_registered("null"));
}

#[cfg(feature = "cache-memory")]
#[test]
fn test_memory_provider_registered() {
    assert!(is_registered("memory"));
}

#[test]
fn test_list_is_sorted() {
    let names: Vec<&str> = list_cache_providers()
        .into_iter()
        .map(|(name, _)| name)
        .collect();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);
}

#[test]
fn test_resolve_disk_with_path() {
    let dir = TempDir::new().unwrap();
    let config = CacheProviderConfig::new("disk").with_path(dir.path());

    let provider = resolve_cache_provider(&config).unwrap();

    assert_eq!(provider.provider_name(), "disk");
}

#[test]
fn test_resolve_null() {
    let provider = resolve_cache_provider(&CacheProviderConfig::new("null")).unwrap();
    assert_eq!(provider.provider_name(), "null");
}

#[test]
fn test_resolve_unknown_lists_available() {
    let err = resolve_cache_provider(&CacheProviderConfig::new("memcached"))
        .err()
        .unwrap();
    assert!(err.contains("memcached"));
    assert!(err.contains("disk"));
}
