//! Dotscience Admin Client
//!
//! A thin, type-safe HTTP client for the Dotscience hub's administrative API.
//!
//! Every call is one authenticated round trip: the client builds the request,
//! attaches basic auth and a JSON content type, sends it, and either decodes
//! the body or surfaces the failure. Nothing is retried.
//!
//! # Example
//!
//! ```no_run
//! use dotscience_client::{AdminClient, ClientConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = AdminClient::new(ClientConfig::new(
//!         "https://hub.example.com",
//!         "admin",
//!         "secret",
//!     ))?;
//!
//!     for runner in client.list_runners().await? {
//!         client.stop_runner_tasks(&runner).await?;
//!         client.delete_runner(&runner).await?;
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod credentials;
pub mod error;
mod runners;
mod version;

// Re-export commonly used types
pub use config::ClientConfig;
pub use credentials::{Credentials, Password};
pub use dotscience_core::domain::runner::Runner;
pub use error::{ClientError, Result};

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method};
use tracing::Level;

use crate::credentials::REDACTED;

/// Emit the per-request line at a level chosen at runtime
macro_rules! request_event {
    ($level:expr, $username:expr, $method:expr, $url:expr) => {
        tracing::event!(
            $level,
            username = %$username,
            password = REDACTED,
            method = %$method,
            url = %$url,
            "running api request"
        )
    };
}

/// HTTP client for the Dotscience admin API
///
/// Holds no mutable state after construction, so a single value can be
/// cloned or shared between tasks freely.
#[derive(Debug, Clone)]
pub struct AdminClient {
    /// Base URL of the hub, without a trailing slash
    base_url: String,
    /// Basic-auth credentials
    credentials: Credentials,
    /// Level of the per-request log line, if any
    request_log_level: Option<Level>,
    /// HTTP client instance
    client: Client,
}

impl AdminClient {
    /// Create a new admin client
    ///
    /// # Errors
    /// Returns [`ClientError::InvalidConfig`] if the configuration is incomplete.
    ///
    /// # Example
    /// ```
    /// use dotscience_client::{AdminClient, ClientConfig};
    ///
    /// let client = AdminClient::new(ClientConfig::new("http://localhost:8080", "admin", "secret"))
    ///     .unwrap();
    /// assert_eq!(client.base_url(), "http://localhost:8080");
    /// ```
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::with_client(config, Client::new())
    }

    /// Create a new admin client with a custom HTTP client
    ///
    /// This allows you to configure proxies, TLS settings, timeouts, etc.
    pub fn with_client(config: ClientConfig, client: Client) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            credentials: config.credentials,
            request_log_level: config.request_log_level,
            client,
        })
    }

    /// Create a new admin client from `DOTSCIENCE_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Get the base URL of the hub
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the username requests are authenticated as
    pub fn username(&self) -> &str {
        &self.credentials.username
    }

    // =============================================================================
    // Request
    // =============================================================================

    /// Send one authenticated request and return the raw response body
    ///
    /// `endpoint` is appended to the base URL as-is and should start with `/`.
    ///
    /// # Errors
    /// - [`ClientError::Transport`] if no complete response was received
    /// - [`ClientError::UnexpectedStatus`] if the status is outside 2xx; the
    ///   body is kept on the error
    pub async fn request(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Vec<u8>> {
        let url = format!("{}{}", self.base_url, endpoint);
        self.log_request(&method, &url);

        let mut builder = self
            .client
            .request(method.clone(), &url)
            .header(CONTENT_TYPE, "application/json")
            .basic_auth(
                &self.credentials.username,
                Some(self.credentials.password.expose()),
            );
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = match response.bytes().await {
                Ok(bytes) => bytes.to_vec(),
                Err(e) => {
                    tracing::debug!(error = %e, "failed reading error response body");
                    Vec::new()
                }
            };
            return Err(ClientError::UnexpectedStatus {
                status,
                method,
                url,
                body,
            });
        }

        Ok(response.bytes().await?.to_vec())
    }

    fn log_request(&self, method: &Method, url: &str) {
        let Some(level) = self.request_log_level else {
            return;
        };
        let username = &self.credentials.username;

        if level == Level::TRACE {
            request_event!(Level::TRACE, username, method, url);
        } else if level == Level::DEBUG {
            request_event!(Level::DEBUG, username, method, url);
        } else if level == Level::INFO {
            request_event!(Level::INFO, username, method, url);
        } else if level == Level::WARN {
            request_event!(Level::WARN, username, method, url);
        } else {
            request_event!(Level::ERROR, username, method, url);
        }
    }
}
