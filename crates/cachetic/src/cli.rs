//! Command line interface
//!
//! | Command | Output |
//! |---------|--------|
//! | `get KEY` | the value, or an error when missing |
//! | `set KEY VALUE [--ex N]` | `OK` |
//! | `delete KEY` | `1` if removed, else `0` |
//! | `exists KEY` | `1` or `0` |
//! | `expire KEY N` | `1` if the key exists, else `0` |
//! | `clear` | `OK` |
//! | `stats` | JSON statistics |
//! | `providers` | registered backends |
//!
//! Global options override the loaded configuration.

use cachetic_domain::error::{Error, Result};
use cachetic_domain::registry::list_cache_providers;
use cachetic_infrastructure::Cachetic;
use cachetic_infrastructure::codec::TextCodec;
use cachetic_infrastructure::config::{AppConfig, ConfigLoader, validate_app_config};
use cachetic_infrastructure::logging::init_logging;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

/// Cache holding text values, as used by the CLI
pub type TextCache = Cachetic<String, TextCodec>;

/// Command line interface for cachetic
#[derive(Parser, Debug)]
#[command(name = "cachetic")]
#[command(about = "Typed cache over disk, Redis and MongoDB backends")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Cache URL or directory (overrides configuration)
    #[arg(short, long, global = true)]
    pub url: Option<String>,

    /// Key prefix (overrides configuration)
    #[arg(short, long, global = true)]
    pub prefix: Option<String>,

    /// Default TTL in seconds: -1 never expires, 0 disables writes
    #[arg(short, long, global = true, allow_negative_numbers = true)]
    pub ttl: Option<i64>,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Cache commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the value stored under KEY
    Get {
        /// Cache key
        key: String,
    },
    /// Store VALUE under KEY
    Set {
        /// Cache key
        key: String,
        /// Text value
        value: String,
        /// TTL in seconds for this write (overrides the default TTL)
        #[arg(long, allow_negative_numbers = true)]
        ex: Option<i64>,
    },
    /// Remove KEY
    Delete {
        /// Cache key
        key: String,
    },
    /// Check whether KEY is present
    Exists {
        /// Cache key
        key: String,
    },
    /// Change the TTL of KEY (-1 removes the expiry, 0 deletes the key)
    Expire {
        /// Cache key
        key: String,
        /// TTL in seconds
        #[arg(allow_negative_numbers = true)]
        seconds: i64,
    },
    /// Remove all entries (only prefixed ones when a prefix is set)
    Clear,
    /// Show hit/miss statistics and the entry count
    Stats,
    /// List backends compiled into this binary
    Providers,
}

impl Cli {
    /// Load configuration and apply command line overrides
    pub fn load_config(&self) -> Result<AppConfig> {
        let mut loader = ConfigLoader::new();
        if let Some(path) = &self.config {
            loader = loader.with_config_path(path);
        }
        let mut config = loader.load()?;

        if let Some(url) = &self.url {
            config.cache.url = Some(url.clone());
        }
        if let Some(prefix) = &self.prefix {
            config.cache.prefix.clone_from(prefix);
        }
        if let Some(ttl) = self.ttl {
            config.cache.default_ttl = ttl;
        }

        validate_app_config(&config)?;
        Ok(config)
    }
}

/// Run the CLI and print the command output
pub async fn run(cli: Cli) -> Result<()> {
    let config = cli.load_config()?;
    init_logging(&config.logging)?;

    let output = if cli.command == Command::Providers {
        list_providers()
    } else {
        let cache = TextCache::with_codec(config.cache, TextCodec)?;
        execute(&cli.command, &cache).await?
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

/// Run one command against `cache`, returning the text to print
pub async fn execute(command: &Command, cache: &TextCache) -> Result<String> {
    debug!(?command, backend = cache.provider().provider_name(), "Executing command");

    match command {
        Command::Get { key } => cache.get_required(key).await,
        Command::Set { key, value, ex } => {
            match ex {
                Some(ex) => cache.set_ex(key, value, *ex).await?,
                None => cache.set(key, value).await?,
            }
            Ok("OK".to_string())
        }
        Command::Delete { key } => cache.delete(key).await.map(flag),
        Command::Exists { key } => cache.exists(key).await.map(flag),
        Command::Expire { key, seconds } => cache.expire(key, *seconds).await.map(flag),
        Command::Clear => {
            cache.clear().await?;
            Ok("OK".to_string())
        }
        Command::Stats => {
            let stats = cache.stats().await?;
            serde_json::to_string_pretty(&serde_json::json!({
                "backend": cache.provider().provider_name(),
                "prefix": cache.prefix(),
                "default_ttl": cache.default_ttl().as_seconds(),
                "entries": stats.entries,
                "hits": stats.hits,
                "misses": stats.misses,
                "hit_rate": stats.hit_rate,
            }))
            .map_err(Error::from)
        }
        Command::Providers => Ok(list_providers()),
    }
}

fn flag(value: bool) -> String {
    let flag = if value { "1" } else { "0" };
    flag.to_string()
}

fn list_providers() -> String {
    list_cache_providers()
        .into_iter()
        .map(|(name, description)| format!("{name}\t{description}"))
        .collect::<Vec<_>>()
        .join("\n")
}
