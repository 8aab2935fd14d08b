//! Typed Cache Facade Tests

use cachetic_domain::error::Error;
use cachetic_domain::value_objects::CacheTtl;
use cachetic_infrastructure::cache::{Cachetic, create_provider};
use cachetic_infrastructure::codec::{BytesCodec, JsonCodec, PlainCodec, TextCodec};
use cachetic_infrastructure::config::CacheConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;
use tempfile::TempDir;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Person {
    name: String,
    age: u32,
}

fn person(name: &str, age: u32) -> Person {
    Person {
        name: name.to_string(),
        age,
    }
}

fn disk_config(dir: &TempDir) -> CacheConfig {
    CacheConfig::from_url(dir.path().to_string_lossy().into_owned())
}

fn memory_config() -> CacheConfig {
    CacheConfig::from_url("memory://")
}

#[tokio::test]
async fn test_basic_usage_on_disk() {
    let dir = TempDir::new().unwrap();
    let cache = Cachetic::<Person>::new(disk_config(&dir)).unwrap();

    cache.set("user:1", &person("Alice", 30)).await.unwrap();

    let result = cache.get("user:1").await.unwrap();
    assert_eq!(result, Some(person("Alice", 30)));
    assert_eq!(cache.provider().provider_name(), "disk");
}

#[tokio::test]
async fn test_missing_key_returns_none() {
    let cache = Cachetic::<Person>::new(memory_config()).unwrap();
    assert_eq!(cache.get("nobody").await.unwrap(), None);
}

#[tokio::test]
async fn test_get_required_reports_caller_key() {
    let cache = Cachetic::<Person>::new(memory_config().with_prefix("app")).unwrap();

    let err = cache.get_required("missing").await.unwrap_err();

    assert!(err.is_not_found());
    match err {
        Error::CacheNotFound { key } => assert_eq!(key, "missing"),
        other => panic!("Expected CacheNotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_get_required_returns_value() {
    let cache = Cachetic::<String>::new(memory_config()).unwrap();
    cache.set("greeting", &"Hello, World!".to_string()).await.unwrap();

    assert_eq!(cache.get_required("greeting").await.unwrap(), "Hello, World!");
}

#[tokio::test]
async fn test_collections_and_nested_json() {
    let dir = TempDir::new().unwrap();

    let team = Cachetic::<Vec<Person>>::new(disk_config(&dir)).unwrap();
    let people = vec![person("Alice", 30), person("Bob", 25)];
    team.set("team", &people).await.unwrap();
    assert_eq!(team.get("team").await.unwrap(), Some(people));

    let docs = Cachetic::<serde_json::Value>::new(disk_config(&dir)).unwrap();
    let data = serde_json::json!({"users": [{"id": 1, "name": "Alice"}], "total": 1});
    docs.set("user_data", &data).await.unwrap();
    let loaded = docs.get("user_data").await.unwrap().unwrap();
    assert_eq!(loaded["users"][0]["name"], "Alice");
    assert_eq!(loaded, data);

    let maps = Cachetic::<HashMap<String, i64>>::new(disk_config(&dir)).unwrap();
    let scores = HashMap::from([("a".to_string(), 1), ("b".to_string(), 2)]);
    maps.set("scores", &scores).await.unwrap();
    assert_eq!(maps.get("scores").await.unwrap(), Some(scores));
}

#[tokio::test]
async fn test_primitive_values() {
    let ints = Cachetic::<i64>::new(memory_config()).unwrap();
    ints.set("n", &12345).await.unwrap();
    assert_eq!(ints.get("n").await.unwrap(), Some(12345));

    let floats = Cachetic::<f64>::new(memory_config()).unwrap();
    floats.set("f", &123.45).await.unwrap();
    assert_eq!(floats.get("f").await.unwrap(), Some(123.45));

    let bools = Cachetic::<bool>::new(memory_config()).unwrap();
    bools.set("t", &true).await.unwrap();
    bools.set("f", &false).await.unwrap();
    assert_eq!(bools.get("t").await.unwrap(), Some(true));
    assert_eq!(bools.get("f").await.unwrap(), Some(false));
}

#[tokio::test]
async fn test_custom_codecs() {
    let raw = Cachetic::<Vec<u8>, BytesCodec>::with_codec(memory_config(), BytesCodec).unwrap();
    raw.set("bytes", &b"some bytes".to_vec()).await.unwrap();
    assert_eq!(raw.get("bytes").await.unwrap(), Some(b"some bytes".to_vec()));

    let text = Cachetic::<String, TextCodec>::with_codec(memory_config(), TextCodec).unwrap();
    text.set("s", &"plain".to_string()).await.unwrap();
    assert_eq!(
        text.provider().get("s").await.unwrap(),
        Some(b"plain".to_vec())
    );

    let flags = Cachetic::<bool, PlainCodec>::with_codec(memory_config(), PlainCodec).unwrap();
    flags.set("on", &true).await.unwrap();
    assert_eq!(flags.provider().get("on").await.unwrap(), Some(b"1".to_vec()));
    assert_eq!(flags.get("on").await.unwrap(), Some(true));
}

#[tokio::test]
async fn test_default_ttl_zero_skips_writes() {
    let cache = Cachetic::<String>::new(memory_config().with_default_ttl(0)).unwrap();
    assert_eq!(cache.default_ttl(), CacheTtl::Disabled);

    cache.set("k", &"v".to_string()).await.unwrap();
    assert_eq!(cache.get("k").await.unwrap(), None);

    // An explicit TTL still writes
    cache.set_ex("k", &"v".to_string(), 60).await.unwrap();
    assert_eq!(cache.get("k").await.unwrap(), Some("v".to_string()));
}

#[tokio::test]
async fn test_set_ex_zero_skips_write() {
    let cache = Cachetic::<String>::new(memory_config()).unwrap();

    cache.set_ex("k", &"v".to_string(), 0).await.unwrap();

    assert!(!cache.exists("k").await.unwrap());
}

#[tokio::test]
async fn test_set_ex_expires_entry() {
    let dir = TempDir::new().unwrap();
    let cache = Cachetic::<String>::new(disk_config(&dir)).unwrap();

    cache.set_ex("short", &"v".to_string(), 1).await.unwrap();
    cache.set_ex("forever", &"v".to_string(), -1).await.unwrap();
    assert!(cache.exists("short").await.unwrap());

    tokio::time::sleep(Duration::from_millis(1200)).await;

    assert_eq!(cache.get("short").await.unwrap(), None);
    assert_eq!(cache.get("forever").await.unwrap(), Some("v".to_string()));
}

#[tokio::test]
async fn test_default_ttl_expires_entry() {
    let cache = Cachetic::<u32>::new(memory_config().with_default_ttl(1)).unwrap();

    cache.set("k", &7).await.unwrap();
    assert_eq!(cache.get("k").await.unwrap(), Some(7));

    tokio::time::sleep(Duration::from_millis(1300)).await;
    assert_eq!(cache.get("k").await.unwrap(), None);
}

#[tokio::test]
async fn test_prefix_applied_transparently() {
    let cache = Cachetic::<String>::new(memory_config().with_prefix("myapp")).unwrap();

    assert_eq!(cache.cache_key("key", true), "myapp:key");
    assert_eq!(cache.cache_key("key", false), "key");
    assert_eq!(cache.prefix(), "myapp");

    cache.set("key", &"value".to_string()).await.unwrap();

    assert!(cache.provider().exists("myapp:key").await.unwrap());
    assert!(!cache.provider().exists("key").await.unwrap());
    assert_eq!(cache.get("key").await.unwrap(), Some("value".to_string()));
}

#[tokio::test]
async fn test_separate_directories_do_not_collide() {
    let first_dir = TempDir::new().unwrap();
    let second_dir = TempDir::new().unwrap();
    let first = Cachetic::<String>::new(disk_config(&first_dir)).unwrap();
    let second = Cachetic::<String>::new(disk_config(&second_dir)).unwrap();

    first.set("shared", &"one".to_string()).await.unwrap();
    second.set("shared", &"two".to_string()).await.unwrap();

    assert_eq!(first.get("shared").await.unwrap(), Some("one".to_string()));
    assert_eq!(second.get("shared").await.unwrap(), Some("two".to_string()));
}

#[tokio::test]
async fn test_delete_exists_and_expire() {
    let cache = Cachetic::<String>::new(memory_config()).unwrap();
    cache.set("k", &"v".to_string()).await.unwrap();

    assert!(cache.exists("k").await.unwrap());
    assert!(cache.expire("k", -1).await.unwrap());
    assert!(cache.expire("k", 0).await.unwrap());
    assert!(!cache.exists("k").await.unwrap());
    assert!(!cache.expire("k", 10).await.unwrap());

    cache.set("k", &"v".to_string()).await.unwrap();
    assert!(cache.delete("k").await.unwrap());
    assert!(!cache.delete("k").await.unwrap());
}

#[tokio::test]
async fn test_clear_with_prefix_keeps_other_namespaces() {
    let provider = create_provider(&memory_config()).unwrap();
    let app = Cachetic::<String>::from_provider(provider.clone(), JsonCodec, CacheTtl::Never, "app");
    let other = Cachetic::<String>::from_provider(provider, JsonCodec, CacheTtl::Never, "other");

    app.set("a", &"1".to_string()).await.unwrap();
    app.set("b", &"2".to_string()).await.unwrap();
    other.set("a", &"3".to_string()).await.unwrap();
    assert_eq!(app.size().await.unwrap(), 3);

    app.clear().await.unwrap();

    assert_eq!(app.get("a").await.unwrap(), None);
    assert_eq!(other.get("a").await.unwrap(), Some("3".to_string()));
    assert_eq!(other.size().await.unwrap(), 1);
}

#[tokio::test]
async fn test_clear_without_prefix_empties_backend() {
    let dir = TempDir::new().unwrap();
    let cache = Cachetic::<String>::new(disk_config(&dir)).unwrap();
    cache.set("a", &"1".to_string()).await.unwrap();
    cache.set("b", &"2".to_string()).await.unwrap();

    cache.clear().await.unwrap();

    assert_eq!(cache.size().await.unwrap(), 0);
}

#[tokio::test]
async fn test_invalid_keys_rejected() {
    let cache = Cachetic::<String>::new(memory_config()).unwrap();

    let empty = cache.get("").await.unwrap_err();
    assert!(matches!(empty, Error::InvalidArgument { .. }));

    let long = "k".repeat(300);
    assert!(cache.set(&long, &"v".to_string()).await.is_err());
}

#[tokio::test]
async fn test_stats_follow_reads() {
    let cache = Cachetic::<String>::new(memory_config()).unwrap();
    cache.set("k", &"v".to_string()).await.unwrap();
    cache.get("k").await.unwrap();
    cache.get("nope").await.unwrap();

    let stats = cache.stats().await.unwrap();
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.misses, 1);
}

#[test]
fn test_invalid_config_rejected() {
    let err = Cachetic::<String>::new(CacheConfig::default().with_default_ttl(-3)).unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
}

#[test]
fn test_clones_share_provider() {
    let cache = Cachetic::<String>::new(memory_config()).unwrap();
    let clone = cache.clone();
    assert!(std::sync::Arc::ptr_eq(cache.provider(), clone.provider()));
}
