//! Dotscience CLI
//!
//! Command-line interface for administering a Dotscience hub.

mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use colored::*;
use commands::{Commands, handle_command};
use config::Config;
use dotscience_client::{ClientError, Password};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "dotscience")]
#[command(about = "Dotscience hub administration CLI", long_about = None)]
struct Cli {
    /// Hub URL
    #[arg(long, env = "DOTSCIENCE_URL", default_value = "http://localhost:8080")]
    url: String,

    /// Admin username
    #[arg(long, env = "DOTSCIENCE_USERNAME")]
    username: String,

    /// Admin password
    #[arg(long, env = "DOTSCIENCE_PASSWORD", hide_env_values = true)]
    password: String,

    /// Log every request sent to the hub
    #[arg(long, env = "DOTSCIENCE_DEBUG")]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config {
        url: cli.url,
        username: cli.username,
        password: Password::new(cli.password),
        debug: cli.debug,
    };

    // Logs go to stderr so command output stays pipeable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.default_log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = handle_command(cli.command, &config).await;

    if let Err(err) = &result
        && let Some(body) = err
            .downcast_ref::<ClientError>()
            .and_then(ClientError::body_text)
            .filter(|body| !body.trim().is_empty())
    {
        eprintln!("{} {}", "Hub response:".red().bold(), body.trim());
    }

    result
}
