//! Client configuration
//!
//! Connection parameters for the admin API and the verbosity of the
//! per-request log line.

use reqwest::Url;
use tracing::Level;

use crate::credentials::{Credentials, Password};
use crate::error::{ClientError, Result};

/// Configuration for [`AdminClient`](crate::AdminClient)
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Hub base URL (e.g., "https://hub.example.com")
    pub base_url: String,

    /// Basic-auth credentials sent with every request
    pub credentials: Credentials,

    /// Level of the line logged before each request; `None` disables it
    pub request_log_level: Option<Level>,
}

impl ClientConfig {
    /// Creates a configuration with request logging disabled
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<Password>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            credentials: Credentials::new(username, password),
            request_log_level: None,
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - DOTSCIENCE_URL (required)
    /// - DOTSCIENCE_USERNAME (required)
    /// - DOTSCIENCE_PASSWORD (required)
    /// - DOTSCIENCE_REQUEST_LOG (optional, level name such as "debug")
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Creates configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .ok_or_else(|| ClientError::InvalidConfig(format!("{} is not set", key)))
        };

        let base_url = required("DOTSCIENCE_URL")?;
        let username = required("DOTSCIENCE_USERNAME")?;
        let password = required("DOTSCIENCE_PASSWORD")?;

        let request_log_level = match lookup("DOTSCIENCE_REQUEST_LOG") {
            Some(level) if !level.trim().is_empty() => {
                Some(level.trim().parse::<Level>().map_err(|e| {
                    ClientError::InvalidConfig(format!("invalid DOTSCIENCE_REQUEST_LOG: {}", e))
                })?)
            }
            _ => None,
        };

        Ok(Self {
            base_url,
            credentials: Credentials::new(username, password),
            request_log_level,
        })
    }

    /// Set the level of the per-request log line
    pub fn with_request_log_level(mut self, level: Level) -> Self {
        self.request_log_level = Some(level);
        self
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(ClientError::InvalidConfig(
                "base_url cannot be empty".to_string(),
            ));
        }

        let url = Url::parse(&self.base_url)
            .map_err(|e| ClientError::InvalidConfig(format!("invalid base_url: {}", e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ClientError::InvalidConfig(
                "base_url must use the http or https scheme".to_string(),
            ));
        }

        if self.credentials.username.is_empty() {
            return Err(ClientError::InvalidConfig(
                "username cannot be empty".to_string(),
            ));
        }

        if self.credentials.password.is_empty() {
            return Err(ClientError::InvalidConfig(
                "password cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_new_config() {
        let config = ClientConfig::new("https://hub.local", "admin", "secret");
        assert_eq!(config.base_url, "https://hub.local");
        assert_eq!(config.credentials.username, "admin");
        assert_eq!(config.credentials.password.expose(), "secret");
        assert_eq!(config.request_log_level, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = ClientConfig::new("https://hub.local", "admin", "secret");

        config.base_url = String::new();
        assert!(config.validate().is_err());

        config.base_url = "hub.local".to_string();
        assert!(config.validate().is_err());

        config.base_url = "http://hub.local".to_string();
        assert!(config.validate().is_ok());

        config.credentials.username = String::new();
        assert!(config.validate().is_err());

        config.credentials.username = "admin".to_string();
        config.credentials.password = Password::default();
        assert!(matches!(
            config.validate(),
            Err(ClientError::InvalidConfig(msg)) if msg.contains("password")
        ));
    }

    #[test]
    fn test_base_url_scheme_is_case_insensitive() {
        let config = ClientConfig::new("HTTPS://hub.local", "admin", "secret");
        assert!(config.validate().is_ok());

        let config = ClientConfig::new("Http://hub.local:8080", "admin", "secret");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_base_url_rejects_other_schemes() {
        let config = ClientConfig::new("ftp://hub.local", "admin", "secret");
        assert!(matches!(
            config.validate(),
            Err(ClientError::InvalidConfig(msg)) if msg.contains("scheme")
        ));
    }

    #[test]
    fn test_builder_methods() {
        let config = ClientConfig::new("https://hub.local", "admin", "secret")
            .with_request_log_level(Level::DEBUG);
        assert_eq!(config.request_log_level, Some(Level::DEBUG));
    }

    #[test]
    fn test_from_lookup() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("DOTSCIENCE_URL", "https://hub.local"),
            ("DOTSCIENCE_USERNAME", "admin"),
            ("DOTSCIENCE_PASSWORD", "secret"),
            ("DOTSCIENCE_REQUEST_LOG", "debug"),
        ]))
        .unwrap();

        assert_eq!(config.base_url, "https://hub.local");
        assert_eq!(config.credentials.username, "admin");
        assert_eq!(config.credentials.password.expose(), "secret");
        assert_eq!(config.request_log_level, Some(Level::DEBUG));
    }

    #[test]
    fn test_from_lookup_missing_variable() {
        let err = ClientConfig::from_lookup(lookup_from(&[
            ("DOTSCIENCE_URL", "https://hub.local"),
            ("DOTSCIENCE_USERNAME", "admin"),
        ]))
        .unwrap_err();

        assert!(err.to_string().contains("DOTSCIENCE_PASSWORD"));
    }

    #[test]
    fn test_from_lookup_invalid_log_level() {
        let err = ClientConfig::from_lookup(lookup_from(&[
            ("DOTSCIENCE_URL", "https://hub.local"),
            ("DOTSCIENCE_USERNAME", "admin"),
            ("DOTSCIENCE_PASSWORD", "secret"),
            ("DOTSCIENCE_REQUEST_LOG", "loud"),
        ]))
        .unwrap_err();

        assert!(err.to_string().contains("DOTSCIENCE_REQUEST_LOG"));
    }

    #[test]
    fn test_debug_hides_password() {
        let config = ClientConfig::new("https://hub.local", "admin", "hunter2");
        assert!(!format!("{:?}", config).contains("hunter2"));
    }
}
