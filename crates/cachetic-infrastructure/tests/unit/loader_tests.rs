//! Configuration Loader Tests
//!
//! Each test runs inside a `figment::Jail`, which serializes environment
//! changes and runs in a scratch working directory.

use cachetic_infrastructure::config::{AppConfig, CacheConfig, ConfigBuilder, ConfigLoader};
use cachetic_infrastructure::constants::DEFAULT_LOG_LEVEL;
use figment::Jail;
use std::path::PathBuf;

fn load(loader: &ConfigLoader) -> figment::error::Result<AppConfig> {
    loader.load().map_err(|e| e.to_string().into())
}

#[test]
fn test_config_loader_default() {
    Jail::expect_with(|_jail| {
        let config = load(&ConfigLoader::new())?;

        assert_eq!(config.cache, CacheConfig::default());
        assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
        Ok(())
    });
}

#[test]
fn test_toml_file_in_working_directory() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "cachetic.toml",
            r#"
                [cache]
                url = "memory://"
                default_ttl = 30
                prefix = "toml"

                [logging]
                level = "debug"
            "#,
        )?;

        let config = load(&ConfigLoader::new())?;

        assert_eq!(config.cache.url.as_deref(), Some("memory://"));
        assert_eq!(config.cache.default_ttl, 30);
        assert_eq!(config.cache.prefix, "toml");
        assert_eq!(config.logging.level, "debug");
        Ok(())
    });
}

#[test]
fn test_explicit_missing_file_falls_back_to_defaults() {
    Jail::expect_with(|_jail| {
        let loader = ConfigLoader::new().with_config_path("does-not-exist.toml");
        let config = load(&loader)?;

        assert_eq!(config.cache.default_ttl, -1);
        assert_eq!(loader.config_path(), Some(PathBuf::from("does-not-exist.toml").as_path()));
        Ok(())
    });
}

#[test]
fn test_prefixed_env_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file("custom.toml", "[cache]\nprefix = \"file\"\n")?;
        jail.set_env("CACHETIC_CACHE__PREFIX", "env");
        jail.set_env("CACHETIC_CACHE__DEFAULT_TTL", "120");

        let config = load(&ConfigLoader::new().with_config_path("custom.toml"))?;

        assert_eq!(config.cache.prefix, "env");
        assert_eq!(config.cache.default_ttl, 120);
        Ok(())
    });
}

#[test]
fn test_legacy_env_names() {
    Jail::expect_with(|jail| {
        jail.set_env("CACHE_URL", "memory://");
        jail.set_env("CACHE_DIR", "legacy-dir");
        jail.set_env("CACHE_TTL", "45");
        jail.set_env("CACHE_PREFIX", "legacy");

        let config = load(&ConfigLoader::new())?;

        assert_eq!(config.cache.url.as_deref(), Some("memory://"));
        assert_eq!(config.cache.dir, PathBuf::from("legacy-dir"));
        assert_eq!(config.cache.default_ttl, 45);
        assert_eq!(config.cache.prefix, "legacy");
        Ok(())
    });
}

#[test]
fn test_legacy_env_wins_over_prefixed() {
    Jail::expect_with(|jail| {
        jail.set_env("CACHETIC_CACHE__DEFAULT_TTL", "10");
        jail.set_env("CACHE_TTL", "20");

        let config = load(&ConfigLoader::new())?;

        assert_eq!(config.cache.default_ttl, 20);
        Ok(())
    });
}

#[test]
fn test_invalid_env_value_fails_validation() {
    Jail::expect_with(|jail| {
        jail.set_env("CACHE_TTL", "-5");

        let result = ConfigLoader::new().load();

        assert!(result.is_err());
        Ok(())
    });
}

#[test]
fn test_config_save_load() {
    Jail::expect_with(|jail| {
        let path = jail.directory().join("saved.toml");
        let original = ConfigBuilder::new()
            .with_cache(
                CacheConfig::from_url("memory://")
                    .with_prefix("saved")
                    .with_default_ttl(600),
            )
            .build();

        let loader = ConfigLoader::new();
        loader
            .save_to_file(&original, &path)
            .map_err(|e| e.to_string())?;

        let loaded = load(&ConfigLoader::new().with_config_path(&path))?;

        assert_eq!(loaded.cache, original.cache);
        Ok(())
    });
}

#[test]
fn test_custom_env_prefix() {
    Jail::expect_with(|jail| {
        jail.set_env("MYAPP_CACHE__PREFIX", "custom");
        jail.set_env("MYAPP_CACHE__DEFAULT_TTL", "90");
        jail.set_env("CACHETIC_CACHE__PREFIX", "ignored");

        let config = load(&ConfigLoader::new().with_env_prefix("MYAPP"))?;

        assert_eq!(config.cache.prefix, "custom");
        assert_eq!(config.cache.default_ttl, 90);
        Ok(())
    });
}
