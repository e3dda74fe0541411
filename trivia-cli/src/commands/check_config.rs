//! Print the configuration `serve` would run with

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use trivia_server::config::redact_url;
use trivia_server::TriviaConfig;

#[derive(Parser, Debug)]
pub struct CheckConfigArgs {
    /// TOML config file
    #[arg(long, short = 'c', env = "TRIVIA_CONFIG")]
    pub config: Option<PathBuf>,
}

pub fn run_check_config(args: CheckConfigArgs) -> Result<()> {
    let config = TriviaConfig::load(args.config.as_deref())
        .context("Failed to load config")?
        .with_env()
        .resolve()
        .context("Invalid configuration")?;

    println!("bind            = {}", config.bind_addr);
    println!(
        "database_url    = {}",
        config
            .database_url
            .as_deref()
            .map(redact_url)
            .unwrap_or_else(|| "(not set)".to_string())
    );
    println!("max_connections = {}", config.max_connections);

    Ok(())
}
