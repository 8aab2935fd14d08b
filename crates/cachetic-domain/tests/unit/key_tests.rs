//! Unit tests for cache key composition

use cachetic_domain::CacheKey;

#[test]
fn test_compose_with_prefix() {
    assert_eq!(CacheKey::compose("myapp", "key"), "myapp:key");
}

#[test]
fn test_compose_without_prefix() {
    assert_eq!(CacheKey::compose("", "user:1"), "user:1");
}

#[test]
fn test_strip_prefix() {
    assert_eq!(CacheKey::strip_prefix("myapp", "myapp:key"), "key");
    assert_eq!(CacheKey::strip_prefix("myapp", "other:key"), "other:key");
    assert_eq!(CacheKey::strip_prefix("", "user:1"), "user:1");
}

#[test]
fn test_validate_rejects_empty() {
    assert!(CacheKey::validate("").is_err());
}

#[test]
fn test_validate_rejects_control_characters() {
    assert!(CacheKey::validate("bad\nkey").is_err());
    assert!(CacheKey::validate("bad\u{0}key").is_err());
}

#[test]
fn test_validate_rejects_long_keys() {
    let key = "k".repeat(251);
    assert!(CacheKey::validate(&key).is_err());
    assert!(CacheKey::validate(&key[..250]).is_ok());
}

#[test]
fn test_validate_accepts_namespaced_keys() {
    assert!(CacheKey::validate("user:1:profile").is_ok());
}
