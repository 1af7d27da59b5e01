//! Hub version endpoint

use reqwest::Method;
use tracing::instrument;

use crate::AdminClient;
use crate::error::Result;

impl AdminClient {
    /// Fetch the hub's version string
    ///
    /// The body is returned as-is; invalid UTF-8 is replaced rather than
    /// rejected.
    #[instrument(skip(self))]
    pub async fn version(&self) -> Result<String> {
        let body = self.request(Method::GET, "/v2/version", None).await?;
        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}
