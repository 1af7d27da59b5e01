//! Runner command handlers
//!
//! Handles listing runners and the per-runner stop/delete actions.

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;
use dotscience_client::AdminClient;
use dotscience_core::domain::runner::Runner;
use tracing::info;

use crate::config::Config;

/// Runner subcommands
#[derive(Subcommand)]
pub enum RunnerCommands {
    /// List all runners
    List {
        /// Print the raw runner records as JSON
        #[arg(long)]
        json: bool,
    },
    /// Stop every task running on a runner
    Stop {
        /// Account that owns the runner
        account_id: String,
        /// Runner ID
        runner_id: String,
    },
    /// Delete a runner
    Delete {
        /// Account that owns the runner
        account_id: String,
        /// Runner ID
        runner_id: String,
    },
}

/// Handle runner commands
///
/// Routes runner subcommands to their respective handlers.
pub async fn handle_runner_command(command: RunnerCommands, config: &Config) -> Result<()> {
    let client = config.client()?;

    match command {
        RunnerCommands::List { json } => list_runners(&client, json).await,
        RunnerCommands::Stop {
            account_id,
            runner_id,
        } => stop_runner_tasks(&client, &Runner::new(account_id, runner_id)).await,
        RunnerCommands::Delete {
            account_id,
            runner_id,
        } => delete_runner(&client, &Runner::new(account_id, runner_id)).await,
    }
}

/// List all runners
async fn list_runners(client: &AdminClient, json: bool) -> Result<()> {
    let runners = client
        .list_runners()
        .await
        .context("Failed to list runners")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&runners)?);
        return Ok(());
    }

    if runners.is_empty() {
        println!("{}", "No runners registered.".yellow());
    } else {
        println!("{}", format!("Found {} runner(s):", runners.len()).bold());
        println!();
        for runner in &runners {
            print_runner_summary(runner);
        }
    }

    Ok(())
}

/// Stop all tasks on a runner
async fn stop_runner_tasks(client: &AdminClient, runner: &Runner) -> Result<()> {
    client
        .stop_runner_tasks(runner)
        .await
        .with_context(|| format!("Failed to stop tasks on runner {}", runner))?;

    info!(runner = %runner, "stopped all runner tasks");
    println!("{} Stopped all tasks on runner {}", "✓".green(), runner.to_string().bold());
    Ok(())
}

/// Delete a runner
async fn delete_runner(client: &AdminClient, runner: &Runner) -> Result<()> {
    client
        .delete_runner(runner)
        .await
        .with_context(|| format!("Failed to delete runner {}", runner))?;

    info!(runner = %runner, "deleted runner");
    println!("{} Deleted runner {}", "✓".green(), runner.to_string().bold());
    Ok(())
}

/// Print a runner summary
fn print_runner_summary(runner: &Runner) {
    println!("  {} Runner {}", "▸".cyan(), runner.id.bold());
    println!("    Account:      {}", runner.account_id);
    for (key, value) in &runner.extra {
        println!("    {:<13} {}", format!("{}:", key), format_field(value).dimmed());
    }
    println!();
}

/// Render an opaque runner field on one line
fn format_field(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => "-".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_field() {
        assert_eq!(format_field(&json!("online")), "online");
        assert_eq!(format_field(&json!(null)), "-");
        assert_eq!(format_field(&json!(3)), "3");
        assert_eq!(format_field(&json!({"gpu": true})), r#"{"gpu":true}"#);
    }
}
