//! Runner-related admin endpoints

use dotscience_core::domain::runner::Runner;
use dotscience_core::dto::runner::RunnerAction;
use reqwest::Method;
use tracing::instrument;

use crate::AdminClient;
use crate::error::{ClientError, Result};

const RUNNERS_ENDPOINT: &str = "/admin/v1/runners";

impl AdminClient {
    // =============================================================================
    // Runner Query
    // =============================================================================

    /// List all runners known to the hub, in the order the hub returns them
    ///
    /// A `null` body is treated as an empty list.
    ///
    /// # Errors
    /// Returns [`ClientError::Decode`] with the raw body if the response is not
    /// a JSON array of runners.
    #[instrument(skip(self))]
    pub async fn list_runners(&self) -> Result<Vec<Runner>> {
        let body = self.request(Method::GET, RUNNERS_ENDPOINT, None).await?;

        // A hub with no runners may answer `null`
        let runners: Option<Vec<Runner>> =
            serde_json::from_slice(&body).map_err(|source| ClientError::Decode {
                operation: "list runners",
                source,
                body,
            })?;

        Ok(runners.unwrap_or_default())
    }

    // =============================================================================
    // Runner Actions
    // =============================================================================

    /// Ask the hub to stop every task running on a runner
    ///
    /// # Example
    /// ```no_run
    /// # use dotscience_client::{AdminClient, ClientConfig, Runner};
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = AdminClient::new(ClientConfig::new("https://hub.example.com", "admin", "secret"))?;
    /// client.stop_runner_tasks(&Runner::new("acc1", "r1")).await?;
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(skip(self, runner), fields(runner = %runner))]
    pub async fn stop_runner_tasks(&self, runner: &Runner) -> Result<()> {
        let endpoint = format!("{}/action", runner_endpoint(runner)?);
        let body =
            serde_json::to_vec(&RunnerAction::stop_all_tasks()).map_err(ClientError::Encode)?;

        self.request(Method::POST, &endpoint, Some(body)).await?;
        Ok(())
    }

    /// Delete a runner registration
    #[instrument(skip(self, runner), fields(runner = %runner))]
    pub async fn delete_runner(&self, runner: &Runner) -> Result<()> {
        let endpoint = runner_endpoint(runner)?;

        self.request(Method::DELETE, &endpoint, None).await?;
        Ok(())
    }
}

/// Path of a single runner, `/admin/v1/runners/{account}/{runner}`
fn runner_endpoint(runner: &Runner) -> Result<String> {
    if !runner.is_addressable() {
        return Err(ClientError::InvalidRunner(format!(
            "runner '{}' needs both an account id and a runner id",
            runner
        )));
    }

    Ok(format!("{}/{}/{}", RUNNERS_ENDPOINT, runner.account_id, runner.id))
}
