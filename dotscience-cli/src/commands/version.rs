//! Version command handler

use anyhow::{Context, Result};
use colored::*;

use crate::config::Config;

/// Print the version reported by the hub
pub async fn show_version(config: &Config) -> Result<()> {
    let client = config.client()?;
    let version = client
        .version()
        .await
        .context("Failed to fetch hub version")?;

    println!("{} {}", "Hub version:".bold(), version.trim());
    Ok(())
}
