//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// StoryWeaver - interactive story and inspiration service
#[derive(Parser, Debug)]
#[command(name = "storyweaver")]
#[command(about = "Interactive story and multimedia inspiration service", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Extra configuration file, applied over the default locations
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the HTTP API until Ctrl+C
    Serve {
        /// Interface to bind (overrides configuration)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (overrides configuration)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print the effective configuration as TOML
    Config,
}
