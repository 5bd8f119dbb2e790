//! Application configuration.
//!
//! Sources, lowest precedence first:
//! - Bundled defaults (include_str! from storyweaver.toml)
//! - `~/.config/storyweaver/storyweaver.toml`
//! - `./storyweaver.toml`
//! - An explicit file passed on the command line
//! - `STORYWEAVER__SECTION__KEY` environment variables
//!
//! The OpenAI API key never lives here; it is read from `OPENAI_API_KEY`.

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;
use storyweaver_error::{ConfigError, StoryweaverError, StoryweaverResult};
use storyweaver_models::OpenAiConfig;
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../../../storyweaver.toml");

/// HTTP listener settings.
///
/// ```toml
/// [server]
/// host = "0.0.0.0"
/// port = 8080
/// expose_error_details = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    /// Port to bind
    pub port: u16,
    /// Send the underlying error message in 500 responses instead of a generic one
    pub expose_error_details: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            expose_error_details: true,
        }
    }
}

impl ServerConfig {
    /// `host:port` socket address string.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Complete StoryWeaver configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoryweaverConfig {
    /// `[server]` table
    pub server: ServerConfig,
    /// `[openai]` table
    pub openai: OpenAiConfig,
}

impl StoryweaverConfig {
    /// Load configuration from every source, optionally adding `path`.
    ///
    /// Default and user files are optional. A `path` given explicitly must exist.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use storyweaver_server::StoryweaverConfig;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = StoryweaverConfig::load(None)?;
    /// println!("listening on {}", config.server.address());
    /// # Ok(())
    /// # }
    /// ```
    #[instrument]
    pub fn load(path: Option<&Path>) -> StoryweaverResult<Self> {
        Self::load_with_env(path, environment())
    }

    fn load_with_env(path: Option<&Path>, env: Environment) -> StoryweaverResult<Self> {
        debug!("Loading configuration with precedence: env > explicit > current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/storyweaver/storyweaver.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("storyweaver").required(false));

        if let Some(path) = path {
            debug!(path = %path.display(), "Adding explicit configuration file");
            builder = builder.add_source(File::from(path).required(true));
        }

        Self::build(builder.add_source(env))
    }

    /// Parse a TOML document layered over the bundled defaults.
    pub fn from_toml_str(toml: &str) -> StoryweaverResult<Self> {
        Self::build(
            Config::builder()
                .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
                .add_source(File::from_str(toml, FileFormat::Toml)),
        )
    }

    /// Render as TOML.
    pub fn to_toml(&self) -> StoryweaverResult<String> {
        toml::to_string_pretty(self).map_err(|e| {
            StoryweaverError::from(ConfigError::new(format!(
                "Failed to serialize configuration: {}",
                e
            )))
        })
    }

    fn build(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> StoryweaverResult<Self> {
        builder
            .build()
            .map_err(|e| {
                StoryweaverError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                StoryweaverError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }
}

/// `STORYWEAVER__SECTION__KEY` variables, e.g. `STORYWEAVER__SERVER__PORT=8080`.
fn environment() -> Environment {
    Environment::with_prefix("STORYWEAVER")
        .separator("__")
        .try_parsing(true)
}
