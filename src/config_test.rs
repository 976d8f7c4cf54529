use super::*;

#[test]
fn from_vars_defaults_when_unset() {
    let cfg = ServerConfig::from_vars(None, None).unwrap();
    assert_eq!(cfg, ServerConfig::default());
    assert_eq!(cfg.addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn from_vars_blank_values_fall_back_to_defaults() {
    let cfg = ServerConfig::from_vars(Some(""), Some("  ")).unwrap();
    assert_eq!(cfg, ServerConfig::default());
}

#[test]
fn from_vars_parses_overrides() {
    let cfg = ServerConfig::from_vars(Some("127.0.0.1"), Some("8080")).unwrap();
    assert_eq!(cfg.addr().to_string(), "127.0.0.1:8080");
}

#[test]
fn from_vars_accepts_ipv6_host() {
    let cfg = ServerConfig::from_vars(Some("::1"), Some("4000")).unwrap();
    assert_eq!(cfg.addr().to_string(), "[::1]:4000");
}

#[test]
fn from_vars_rejects_bad_port() {
    let err = ServerConfig::from_vars(None, Some("http")).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort(ref raw) if raw == "http"));
    assert_eq!(err.to_string(), "invalid PORT: http");
}

#[test]
fn from_vars_rejects_out_of_range_port() {
    let err = ServerConfig::from_vars(None, Some("70000")).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort(_)));
}

#[test]
fn from_vars_rejects_bad_host() {
    let err = ServerConfig::from_vars(Some("localhost:80"), None).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidHost(_)));
}
