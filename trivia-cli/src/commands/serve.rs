//! HTTP server command

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use trivia_server::db::create_pool_with_options;
use trivia_server::{run_server, AppState, MemoryStore, PgStore, ServerConfig, TriviaConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:5000)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// Database URL (overrides config file and DATABASE_URL)
    #[arg(long)]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long)]
    pub max_connections: Option<u32>,

    /// TOML config file
    #[arg(long, short = 'c', env = "TRIVIA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Serve the built-in sample data from memory instead of PostgreSQL
    #[arg(long)]
    pub in_memory: bool,
}

impl ServeArgs {
    /// Resolve config file and environment, then apply command-line overrides.
    pub fn server_config(&self) -> Result<ServerConfig> {
        let mut config = TriviaConfig::load(self.config.as_deref())
            .context("Failed to load config")?
            .with_env()
            .resolve()
            .context("Invalid configuration")?;

        if let Some(bind) = self.bind {
            config.bind_addr = bind;
        }
        if let Some(url) = &self.database_url {
            config.database_url = Some(url.clone());
        }
        if let Some(max) = self.max_connections {
            config.max_connections = max;
        }
        Ok(config)
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = args.server_config()?;

    let state = if args.in_memory {
        tracing::warn!("Serving in-memory sample data; changes are lost on exit");
        AppState::new(MemoryStore::sample())
    } else {
        let database_url = config
            .database_url
            .as_deref()
            .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, .env or the config file")?;

        let pool = create_pool_with_options(database_url, config.max_connections)
            .await
            .context("Failed to create database pool")?;
        tracing::info!(max_connections = config.max_connections, "Database pool ready");

        AppState::new(PgStore::new(pool))
    };

    tracing::info!("Starting trivia server on {}", config.bind_addr);

    // Run server (blocks until shutdown)
    run_server(state, &config).await.context("Server error")?;

    Ok(())
}
