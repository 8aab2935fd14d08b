//! Logging Tests

use cachetic_infrastructure::constants::{DEFAULT_LOG_LEVEL, LOG_FILTER_ENV};
use cachetic_infrastructure::logging::{LoggingConfig, init_logging, log_filter, parse_log_level};
use tracing::Level;
use tracing_subscriber::filter::LevelFilter;

#[test]
fn test_parse_log_level() {
    assert_eq!(parse_log_level("trace").unwrap(), Level::TRACE);
    assert_eq!(parse_log_level("debug").unwrap(), Level::DEBUG);
    assert_eq!(parse_log_level("INFO").unwrap(), Level::INFO);
    assert_eq!(parse_log_level("warn").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("warning").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("error").unwrap(), Level::ERROR);

    assert!(parse_log_level("invalid").is_err());
}

#[test]
fn test_logging_config_default() {
    let config = LoggingConfig::default();
    assert_eq!(config.level, DEFAULT_LOG_LEVEL);
    assert!(!config.json_format);
    assert!(config.file_output.is_none());
}

#[test]
fn test_init_logging_rejects_invalid_level() {
    let config = LoggingConfig {
        level: "verbose".to_string(),
        ..LoggingConfig::default()
    };
    assert!(init_logging(&config).is_err());
}

#[test]
fn test_init_logging_twice_is_ok() {
    let config = LoggingConfig::default();
    assert!(init_logging(&config).is_ok());
    assert!(init_logging(&config).is_ok());
}

#[test]
fn test_warning_alias_filters_at_warn() {
    if std::env::var(LOG_FILTER_ENV).is_ok() {
        return;
    }
    let level = parse_log_level("warning").unwrap();
    assert_eq!(log_filter(level).max_level_hint(), Some(LevelFilter::WARN));
    assert_eq!(
        log_filter(Level::DEBUG).max_level_hint(),
        Some(LevelFilter::DEBUG)
    );
}
