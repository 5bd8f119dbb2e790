//! `config` command handler.

use std::path::Path;
use storyweaver_error::StoryweaverResult;
use storyweaver_server::StoryweaverConfig;

/// Print the merged configuration.
pub fn print_config(path: Option<&Path>) -> StoryweaverResult<()> {
    let config = StoryweaverConfig::load(path)?;
    print!("{}", config.to_toml()?);
    Ok(())
}
