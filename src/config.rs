//! Configuration handling for the payment form

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::state::DEFAULT_LIFETIME;

/// Default payment service address
const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Default payment endpoint path
const DEFAULT_ENDPOINT: &str = "/v1/payments";

const BASE_URL_ENV: &str = "PAYMENT_FORM_BASE_URL";
const ENDPOINT_ENV: &str = "PAYMENT_FORM_ENDPOINT";

/// User configuration for the payment form
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormConfig {
    /// Payment service address, scheme included
    pub base_url: Option<String>,
    /// Payment endpoint path
    pub endpoint: Option<String>,
    /// How long a notification stays visible, in milliseconds
    pub notification_ms: Option<u64>,
    /// Request timeout in milliseconds; unset means wait indefinitely
    pub request_timeout_ms: Option<u64>,
}

impl FormConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "payments", "payment-form")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = Self::load_file()?;
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Override file values with whatever `lookup` finds for the env keys
    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(base_url) = lookup(BASE_URL_ENV) {
            self.base_url = Some(base_url);
        }
        if let Some(endpoint) = lookup(ENDPOINT_ENV) {
            self.endpoint = Some(endpoint);
        }
    }

    /// Apply a command-line address, which beats both file and environment
    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        if base_url.is_some() {
            self.base_url = base_url;
        }
        self
    }

    fn load_file() -> Result<Self> {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: FormConfig = serde_json::from_str(&content)?;
                tracing::debug!("Loaded config from {}", path.display());
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    /// Full payment URL: base and endpoint joined by exactly one slash
    pub fn payment_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url().trim_end_matches('/'),
            self.endpoint().trim_start_matches('/')
        )
    }

    pub fn notification_lifetime(&self) -> Duration {
        self.notification_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_LIFETIME)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_ms.map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FormConfig::default();
        assert!(config.base_url.is_none());
        assert!(config.endpoint.is_none());
        assert!(config.notification_ms.is_none());
        assert!(config.request_timeout_ms.is_none());
        assert_eq!(config.payment_url(), "http://localhost:8080/v1/payments");
        assert_eq!(config.notification_lifetime(), Duration::from_millis(3500));
        assert!(config.request_timeout().is_none());
    }

    #[test]
    fn test_payment_url_joins_with_single_slash() {
        let config = FormConfig {
            base_url: Some("http://127.0.0.1:9000/".to_string()),
            endpoint: Some("/api/pay".to_string()),
            ..Default::default()
        };
        assert_eq!(config.payment_url(), "http://127.0.0.1:9000/api/pay");

        let config = FormConfig {
            base_url: Some("http://127.0.0.1:9000".to_string()),
            endpoint: Some("api/pay".to_string()),
            ..Default::default()
        };
        assert_eq!(config.payment_url(), "http://127.0.0.1:9000/api/pay");
    }

    #[test]
    fn test_serialization() {
        let config = FormConfig {
            base_url: Some("http://localhost:9090".to_string()),
            endpoint: Some("/v2/payments".to_string()),
            notification_ms: Some(1000),
            request_timeout_ms: Some(5000),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: FormConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.base_url, Some("http://localhost:9090".to_string()));
        assert_eq!(parsed.endpoint, Some("/v2/payments".to_string()));
        assert_eq!(parsed.notification_lifetime(), Duration::from_secs(1));
        assert_eq!(parsed.request_timeout(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: FormConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.base_url.is_none());
        assert_eq!(parsed.endpoint(), "/v1/payments");
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"endpoint": "/pay", "unknown_field": "value"}"#;
        let parsed: FormConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.endpoint(), "/pay");
    }

    fn env_with<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            vars.iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| value.to_string())
        }
    }

    #[test]
    fn test_env_overrides_file_values() {
        let mut config = FormConfig {
            base_url: Some("http://file:1".to_string()),
            endpoint: Some("/file".to_string()),
            notification_ms: Some(1000),
            ..Default::default()
        };
        config.apply_env(env_with(&[
            ("PAYMENT_FORM_BASE_URL", "http://env:2"),
            ("PAYMENT_FORM_ENDPOINT", "/env"),
        ]));

        assert_eq!(config.payment_url(), "http://env:2/env");
        assert_eq!(config.notification_ms, Some(1000));
    }

    #[test]
    fn test_missing_env_keeps_file_values() {
        let mut config = FormConfig {
            endpoint: Some("/file".to_string()),
            ..Default::default()
        };
        config.apply_env(env_with(&[("PAYMENT_FORM_BASE_URL", "http://env:2")]));

        assert_eq!(config.base_url(), "http://env:2");
        assert_eq!(config.endpoint(), "/file");
    }

    #[test]
    fn test_command_line_address_wins() {
        let mut config = FormConfig {
            base_url: Some("http://file:1".to_string()),
            ..Default::default()
        };
        config.apply_env(env_with(&[("PAYMENT_FORM_BASE_URL", "http://env:2")]));

        let config = config.with_base_url(Some("http://cli:3".to_string()));
        assert_eq!(config.base_url(), "http://cli:3");

        let config = config.with_base_url(None);
        assert_eq!(config.base_url(), "http://cli:3");
    }

    #[test]
    fn test_config_path_returns_option() {
        // Just test that the function doesn't panic
        let _path = FormConfig::config_path();
    }
}
