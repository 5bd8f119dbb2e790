//! StoryWeaver CLI binary.
//!
//! - Serve the story and inspiration endpoints
//! - Print the effective configuration

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, print_config, run_server};

    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Commands::Serve { host, port } => {
            run_server(cli.config.as_deref(), host, port).await?;
        }

        Commands::Config => {
            print_config(cli.config.as_deref())?;
        }
    }

    Ok(())
}
