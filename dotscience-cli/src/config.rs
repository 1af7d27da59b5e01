//! Configuration module
//!
//! Connection settings collected from flags and environment, and how they
//! map onto the admin client.

use dotscience_client::{AdminClient, ClientConfig, Password};
use tracing::Level;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the Dotscience hub
    pub url: String,

    /// Admin username
    pub username: String,

    /// Admin password
    pub password: Password,

    /// Log every request sent to the hub
    pub debug: bool,
}

impl Config {
    /// Client configuration matching these settings
    pub fn client_config(&self) -> ClientConfig {
        let config = ClientConfig::new(&self.url, &self.username, self.password.clone());
        if self.debug {
            config.with_request_log_level(Level::DEBUG)
        } else {
            config
        }
    }

    /// Build an admin client for these settings
    pub fn client(&self) -> anyhow::Result<AdminClient> {
        Ok(AdminClient::new(self.client_config())?)
    }

    /// Default tracing filter when `RUST_LOG` is not set
    pub fn default_log_filter(&self) -> &'static str {
        if self.debug {
            "dotscience=debug,dotscience_client=debug"
        } else {
            "dotscience=info,dotscience_client=warn"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(debug: bool) -> Config {
        Config {
            url: "http://localhost:8080".to_string(),
            username: "admin".to_string(),
            password: Password::new("secret"),
            debug,
        }
    }

    #[test]
    fn test_client_config_without_debug() {
        let client_config = config(false).client_config();
        assert_eq!(client_config.base_url, "http://localhost:8080");
        assert_eq!(client_config.credentials.username, "admin");
        assert_eq!(client_config.credentials.password.expose(), "secret");
        assert_eq!(client_config.request_log_level, None);
    }

    #[test]
    fn test_client_config_with_debug() {
        let client_config = config(true).client_config();
        assert_eq!(client_config.request_log_level, Some(Level::DEBUG));
        assert!(config(true).default_log_filter().contains("debug"));
    }

    #[test]
    fn test_client_rejects_empty_username() {
        let mut config = config(false);
        config.username = String::new();
        assert!(config.client().is_err());
    }

    #[test]
    fn test_debug_hides_password() {
        assert!(!format!("{:?}", config(false)).contains("secret"));
    }
}
