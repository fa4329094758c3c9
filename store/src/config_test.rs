use super::*;
use std::collections::HashMap;

fn config_from(vars: &[(&str, &str)]) -> Result<StoreConfig, StoreError> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    StoreConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn from_lookup_applies_defaults() {
    let cfg = config_from(&[("MESSAGE_STORE_URL", "https://project.example.co")]).unwrap();
    assert_eq!(cfg.url, "https://project.example.co");
    assert_eq!(cfg.api_key, None);
    assert_eq!(cfg.table, DEFAULT_TABLE);
    assert_eq!(cfg.timeouts, StoreTimeouts::default());
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = config_from(&[
        ("MESSAGE_STORE_URL", "https://project.example.co/"),
        ("MESSAGE_STORE_KEY", " anon-key "),
        ("MESSAGE_STORE_TABLE", "chat_messages"),
        ("MESSAGE_STORE_REQUEST_TIMEOUT_SECS", "42"),
        ("MESSAGE_STORE_CONNECT_TIMEOUT_SECS", "7"),
    ])
    .unwrap();
    assert_eq!(cfg.url, "https://project.example.co");
    assert_eq!(cfg.api_key.as_deref(), Some("anon-key"));
    assert_eq!(cfg.table, "chat_messages");
    assert_eq!(cfg.timeouts, StoreTimeouts { request_secs: 42, connect_secs: 7 });
}

#[test]
fn from_lookup_missing_url_errors() {
    let err = config_from(&[("MESSAGE_STORE_KEY", "k")]).unwrap_err();
    assert!(matches!(err, StoreError::MissingConfig { ref var } if var == "MESSAGE_STORE_URL"));
}

#[test]
fn from_lookup_blank_url_counts_as_missing() {
    let err = config_from(&[("MESSAGE_STORE_URL", "   ")]).unwrap_err();
    assert!(matches!(err, StoreError::MissingConfig { .. }));
}

#[test]
fn from_lookup_blank_key_is_unauthenticated() {
    let cfg = config_from(&[("MESSAGE_STORE_URL", "http://localhost:54321"), ("MESSAGE_STORE_KEY", "")]).unwrap();
    assert_eq!(cfg.api_key, None);
}

#[test]
fn from_lookup_rejects_malformed_url() {
    let err = config_from(&[("MESSAGE_STORE_URL", "not a url")])
        .unwrap_err()
        .to_string();
    assert!(err.contains("invalid MESSAGE_STORE_URL"));
}

#[test]
fn from_lookup_rejects_non_http_scheme() {
    let err = config_from(&[("MESSAGE_STORE_URL", "ftp://example.co")])
        .unwrap_err()
        .to_string();
    assert!(err.contains("unsupported scheme 'ftp'"));
}

#[test]
fn from_lookup_rejects_table_with_path_characters() {
    let err = config_from(&[("MESSAGE_STORE_URL", "https://example.co"), ("MESSAGE_STORE_TABLE", "messages?select=*")])
        .unwrap_err()
        .to_string();
    assert!(err.contains("invalid MESSAGE_STORE_TABLE"));
}

#[test]
fn from_lookup_ignores_unparseable_timeouts() {
    let cfg = config_from(&[
        ("MESSAGE_STORE_URL", "https://example.co"),
        ("MESSAGE_STORE_REQUEST_TIMEOUT_SECS", "soon"),
    ])
    .unwrap();
    assert_eq!(cfg.timeouts.request_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
}

#[test]
fn from_env_reads_process_environment() {
    // SAFETY: the only test in this crate that touches these variables.
    unsafe {
        std::env::set_var("MESSAGE_STORE_URL", "http://localhost:54321");
        std::env::set_var("MESSAGE_STORE_TABLE", "env_messages");
    }
    let cfg = StoreConfig::from_env();
    unsafe {
        std::env::remove_var("MESSAGE_STORE_URL");
        std::env::remove_var("MESSAGE_STORE_TABLE");
    }

    let cfg = cfg.unwrap();
    assert_eq!(cfg.url, "http://localhost:54321");
    assert_eq!(cfg.table, "env_messages");
}
