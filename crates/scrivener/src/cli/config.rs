//! Configuration and client setup for the binary.

use scrivener_article::ArticlePipeline;
use scrivener_core::ScrivenerConfig;
use scrivener_error::{ConfigError, GenerationError};
use scrivener_models::AnthropicClient;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File name looked up in the user configuration directory.
pub const CONFIG_FILE_NAME: &str = "scrivener.toml";

/// `<config dir>/scrivener/scrivener.toml`, when the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("scrivener").join(CONFIG_FILE_NAME))
}

/// Loads configuration.
///
/// An explicit path must exist and parse. Otherwise the default location
/// is used when a file is there, and built-in defaults when it is not.
pub fn load_config(explicit: Option<&Path>) -> Result<ScrivenerConfig, ConfigError> {
    if let Some(path) = explicit {
        info!(path = %path.display(), "Loading configuration");
        return ScrivenerConfig::from_file(path);
    }

    match default_config_path() {
        Some(path) if path.is_file() => {
            info!(path = %path.display(), "Loading configuration");
            ScrivenerConfig::from_file(&path)
        }
        _ => {
            debug!("No configuration file found, using defaults");
            Ok(ScrivenerConfig::default())
        }
    }
}

/// Builds an Anthropic-backed pipeline from configuration and CLI overrides.
pub fn build_pipeline(
    config: &ScrivenerConfig,
    api_key: Option<&str>,
    model: Option<&str>,
) -> Result<ArticlePipeline<AnthropicClient>, GenerationError> {
    let provider = match model {
        Some(model) => config.provider().clone().with_model(model),
        None => config.provider().clone(),
    };
    let client = AnthropicClient::new(api_key.unwrap_or_default(), provider)?;
    Ok(ArticlePipeline::new(client, *config.budgets()))
}
