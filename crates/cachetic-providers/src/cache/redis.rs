//! Redis distributed cache provider
//!
//! Distributed cache implementation using Redis as the backend.
//! Suitable for multi-instance deployments.
//!
//! ## Features
//!
//! - Distributed caching for multiple instances
//! - TTL support for automatic expiration (`SETEX`, `EXPIRE`, `PERSIST`)
//! - One multiplexed connection, opened on first use and then shared
//!
//! ## Example
//!
//! ```ignore
//! use cachetic_providers::cache::RedisCacheProvider;
//!
//! let provider = RedisCacheProvider::new("redis://localhost:6379/0")?;
//! // Or with host/port
//! let provider = RedisCacheProvider::with_host_port("localhost", 6379)?;
//! ```

use crate::constants::{REDIS_DEFAULT_URL, REDIS_SCAN_COUNT};
use crate::utils::HitCounter;
use async_trait::async_trait;
use cachetic_domain::constants::PROVIDER_REDIS;
use cachetic_domain::error::{Error, Result};
use cachetic_domain::ports::providers::cache::{
    CacheEntryConfig, CacheProvider, CacheStats, ceil_secs,
};
use cachetic_domain::value_objects::redact_url;
use redis::{AsyncCommands, Client, RedisError, aio::MultiplexedConnection};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::OnceCell;
use tracing::debug;

/// Redis cache provider
///
/// Distributed cache implementation using Redis.
/// Clones share the same lazily-opened multiplexed connection.
#[derive(Clone)]
pub struct RedisCacheProvider {
    client: Client,
    connection: Arc<OnceCell<MultiplexedConnection>>,
    server: String,
    counter: Arc<HitCounter>,
}

impl RedisCacheProvider {
    /// Create a new Redis cache provider with connection string
    ///
    /// No network I/O happens here; the connection is opened on first use.
    ///
    /// # Arguments
    ///
    /// * `connection_string` - Redis connection URL (e.g., "redis://localhost:6379/0")
    pub fn new(connection_string: &str) -> Result<Self> {
        let server = redact_url(connection_string);
        let client = Client::open(connection_string).map_err(|e| {
            Error::config_with_source(format!("Invalid Redis URL {server}: {e}"), e)
        })?;

        Ok(Self {
            client,
            connection: Arc::new(OnceCell::new()),
            server,
            counter: Arc::new(HitCounter::new()),
        })
    }

    /// Create a new Redis cache provider with host and port
    pub fn with_host_port(host: &str, port: u16) -> Result<Self> {
        Self::new(&format!("redis://{host}:{port}"))
    }

    /// Get the shared connection, opening it on first use
    async fn connection(&self) -> Result<MultiplexedConnection> {
        let conn = self
            .connection
            .get_or_try_init(|| async {
                debug!("Initializing remote cache from {}", self.server);
                self.client
                    .get_multiplexed_async_connection()
                    .await
                    .map_err(|e| {
                        Error::network_with_source(
                            format!("Failed to connect to Redis at {}: {e}", self.server),
                            e,
                        )
                    })
            })
            .await?;
        Ok(conn.clone())
    }

    /// Get the Redis server address (password redacted)
    pub fn server_address(&self) -> &str {
        &self.server
    }

    /// Check if the Redis connection uses TLS
    pub fn is_tls(&self) -> bool {
        self.server.starts_with("rediss://")
    }
}

/// Collect every key matching `prefix` with a SCAN loop
async fn scan_prefix(
    conn: &mut MultiplexedConnection,
    prefix: &str,
) -> Result<Vec<String>> {
    let pattern = format!("{}*", escape_glob(prefix));
    let mut cursor: u64 = 0;
    let mut keys = Vec::new();
    loop {
        let (next, batch): (u64, Vec<String>) = redis::cmd("SCAN")
            .arg(cursor)
            .arg("MATCH")
            .arg(&pattern)
            .arg("COUNT")
            .arg(REDIS_SCAN_COUNT)
            .query_async(&mut *conn)
            .await
            .map_err(|e| command_error("SCAN", e))?;
        keys.extend(batch);
        if next == 0 {
            break;
        }
        cursor = next;
    }
    Ok(keys)
}

fn command_error(command: &str, e: RedisError) -> Error {
    Error::infrastructure_with_source(format!("Redis {command} failed: {e}"), e)
}

/// Escape Redis glob metacharacters so a prefix matches literally
fn escape_glob(prefix: &str) -> String {
    let mut escaped = String::with_capacity(prefix.len());
    for c in prefix.chars() {
        if matches!(c, '*' | '?' | '[' | ']' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[async_trait]
impl CacheProvider for RedisCacheProvider {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let mut conn = self.connection().await?;

        let value: Option<Vec<u8>> = conn.get(key).await.map_err(|e| command_error("GET", e))?;
        self.counter.record(&value);
        Ok(value)
    }

    async fn set(&self, key: &str, value: &[u8], config: CacheEntryConfig) -> Result<()> {
        let mut conn = self.connection().await?;

        let result: redis::RedisResult<()> = match config.ttl_secs_ceil() {
            Some(seconds) => conn.set_ex(key, value, seconds).await,
            None => conn.set(key, value).await,
        };

        result.map_err(|e| command_error("SET", e))
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        let mut conn = self.connection().await?;

        let deleted: i64 = conn.del(key).await.map_err(|e| command_error("DEL", e))?;
        Ok(deleted > 0)
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        let mut conn = self.connection().await?;

        let count: i64 = conn
            .exists(key)
            .await
            .map_err(|e| command_error("EXISTS", e))?;
        Ok(count > 0)
    }

    async fn expire(&self, key: &str, ttl: Option<Duration>) -> Result<bool> {
        let mut conn = self.connection().await?;

        match ttl {
            Some(ttl) => {
                let updated: i64 = redis::cmd("EXPIRE")
                    .arg(key)
                    .arg(ceil_secs(ttl))
                    .query_async(&mut conn)
                    .await
                    .map_err(|e| command_error("EXPIRE", e))?;
                Ok(updated == 1)
            }
            None => {
                // PERSIST answers 0 both for a missing key and for a key
                // without a timeout, so existence is checked separately.
                let count: i64 = conn
                    .exists(key)
                    .await
                    .map_err(|e| command_error("EXISTS", e))?;
                if count == 0 {
                    return Ok(false);
                }
                let _: i64 = redis::cmd("PERSIST")
                    .arg(key)
                    .query_async(&mut conn)
                    .await
                    .map_err(|e| command_error("PERSIST", e))?;
                Ok(true)
            }
        }
    }

    async fn clear(&self) -> Result<()> {
        let mut conn = self.connection().await?;

        let _: () = redis::cmd("FLUSHDB")
            .query_async(&mut conn)
            .await
            .map_err(|e| command_error("FLUSHDB", e))?;
        Ok(())
    }

    async fn clear_prefix(&self, prefix: &str) -> Result<usize> {
        let mut conn = self.connection().await?;

        let keys = scan_prefix(&mut conn, prefix).await?;
        if keys.is_empty() {
            return Ok(0);
        }
        let removed: usize = conn.del(&keys).await.map_err(|e| command_error("DEL", e))?;
        Ok(removed)
    }

    async fn stats(&self) -> Result<CacheStats> {
        let entries = self.size().await? as u64;
        Ok(self.counter.snapshot(entries))
    }

    async fn size(&self) -> Result<usize> {
        let mut conn = self.connection().await?;

        let size: usize = redis::cmd("DBSIZE")
            .query_async(&mut conn)
            .await
            .map_err(|e| command_error("DBSIZE", e))?;
        Ok(size)
    }

    fn provider_name(&self) -> &str {
        PROVIDER_REDIS
    }
}

impl std::fmt::Debug for RedisCacheProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisCacheProvider")
            .field("server", &self.server_address())
            .field("tls", &self.is_tls())
            .finish()
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use cachetic_domain::registry::{CACHE_PROVIDERS, CacheProviderConfig, CacheProviderEntry};

/// Factory function for creating Redis cache provider instances.
fn redis_cache_factory(
    config: &CacheProviderConfig,
) -> std::result::Result<Arc<dyn CacheProvider>, String> {
    let uri = config.uri.as_deref().unwrap_or(REDIS_DEFAULT_URL);

    let provider = RedisCacheProvider::new(uri)
        .map_err(|e| format!("Failed to create Redis provider: {e}"))?;

    Ok(Arc::new(provider))
}

#[linkme::distributed_slice(CACHE_PROVIDERS)]
static REDIS_PROVIDER: CacheProviderEntry = CacheProviderEntry {
    name: PROVIDER_REDIS,
    description: "Redis distributed cache",
    factory: redis_cache_factory,
};
