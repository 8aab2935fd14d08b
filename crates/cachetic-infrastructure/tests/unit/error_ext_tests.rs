//! Error Extension Tests

use cachetic_domain::error::{Error, Result};
use cachetic_infrastructure::error_ext::ErrorContext;
use std::io;

fn not_found() -> std::result::Result<(), io::Error> {
    Err(io::Error::new(io::ErrorKind::NotFound, "file not found"))
}

#[test]
fn test_io_context() {
    let result: Result<()> = not_found().io_context("failed to read file");

    if let Err(Error::Io { source, message }) = result {
        assert!(message.contains("failed to read file"));
        assert!(message.contains("file not found"));
        assert!(source.is_some());
    } else {
        panic!("Expected Io error");
    }
}

#[test]
fn test_context_maps_to_infrastructure() {
    let result: Result<()> = not_found().context("loading");
    assert!(matches!(result, Err(Error::Infrastructure { .. })));
}

#[test]
fn test_with_context_is_lazy() {
    let ok: std::result::Result<u8, io::Error> = Ok(1);
    let value = ok
        .with_context(|| -> String { panic!("context built for Ok value") })
        .unwrap();
    assert_eq!(value, 1);

    let result: Result<()> = not_found().with_context(|| format!("key {}", 7));
    let message = result.unwrap_err().to_string();
    assert!(message.contains("key 7"));
}

#[test]
fn test_typed_contexts() {
    assert!(matches!(
        not_found().config_context("config"),
        Err(Error::Configuration { .. })
    ));
    assert!(matches!(
        not_found().network_context("network"),
        Err(Error::Network { .. })
    ));
    assert!(matches!(
        not_found().db_context("db"),
        Err(Error::Database { .. })
    ));
}
