//! trivia CLI - runs the trivia HTTP API
//!
//! - `serve`: start the HTTP server against PostgreSQL or the in-memory sample set
//! - `check-config`: print the resolved configuration

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "trivia",
    author,
    version,
    about = "HTTP API for the trivia app: categories, questions, search and quizzes"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Print the resolved configuration (password redacted)
    CheckConfig(commands::check_config::CheckConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig { debug: cli.debug })?;

    match cli.command {
        Commands::Serve(args) => commands::serve::run_serve(args).await,
        Commands::CheckConfig(args) => commands::check_config::run_check_config(args),
    }
}
