//! Command-line interface module.

mod commands;
mod config;
mod serve;

pub use commands::{Cli, Commands};
pub use config::print_config;
pub use serve::run_server;
