use super::*;

#[test]
fn from_vars_defaults_endpoint() {
    let cfg = RelayConfig::from_vars(None, Some("key-123")).unwrap();
    assert_eq!(cfg.endpoint, DEFAULT_RELAY_ENDPOINT);
    assert_eq!(cfg.access_key, "key-123");
}

#[test]
fn from_vars_trims_values_and_trailing_slash() {
    let cfg = RelayConfig::from_vars(Some(" https://relay.example.test/submit/ "), Some("  key-123\n")).unwrap();
    assert_eq!(cfg.endpoint, "https://relay.example.test/submit");
    assert_eq!(cfg.access_key, "key-123");
}

#[test]
fn from_vars_blank_endpoint_falls_back_to_default() {
    let cfg = RelayConfig::from_vars(Some("   "), Some("key-123")).unwrap();
    assert_eq!(cfg.endpoint, DEFAULT_RELAY_ENDPOINT);
}

#[test]
fn from_vars_missing_access_key_errors() {
    assert_eq!(
        RelayConfig::from_vars(None, None).unwrap_err(),
        ConfigError::MissingAccessKey { var: ACCESS_KEY_VAR }
    );
    let err = RelayConfig::from_vars(None, Some("")).unwrap_err().to_string();
    assert!(err.contains("PORTFOLIO_RELAY_ACCESS_KEY"));
}

#[test]
fn from_vars_rejects_non_http_endpoint() {
    let err = RelayConfig::from_vars(Some("ftp://relay.example.test"), Some("key")).unwrap_err();
    assert_eq!(err, ConfigError::InvalidEndpoint("ftp://relay.example.test".to_owned()));
}
