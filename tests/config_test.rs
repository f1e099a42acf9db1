use maquette::config::{AppConfig, LogFormat};
use maquette::types::Environment;

#[test]
fn defaults_cover_a_bare_environment() {
    let config = AppConfig::default();

    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.runtime.environment, Environment::Development);
    assert_eq!(config.auth.demo_email, "demo@example.com");
    assert_eq!(config.auth.demo_password, "password");
    assert!(matches!(config.logging.format, LogFormat::Json));
}

#[test]
fn environment_deserializes_from_lowercase_names() {
    let production: Environment = serde_json::from_str("\"production\"").unwrap();
    assert!(production.is_production());

    let development: Environment = serde_json::from_str("\"development\"").unwrap();
    assert!(!development.is_production());
}

#[test]
fn unknown_environment_names_are_rejected() {
    let result: Result<Environment, _> = serde_json::from_str("\"staging\"");
    assert!(result.is_err());
}
