//! Configuration loaded from `scrivener.toml`.
//!
//! ```toml
//! [provider]
//! model = "claude-3-5-sonnet-20241022"
//! timeout_secs = 120
//!
//! [budgets.section]
//! max_tokens = 4000
//! temperature = 0.6
//! ```
//!
//! Every field is optional; missing values take the defaults below.

use crate::StageBudgets;
use scrivener_error::{ConfigError, ConfigErrorKind};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// Default Anthropic model.
pub const DEFAULT_MODEL: &str = "claude-3-5-sonnet-20241022";

/// Default Anthropic endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.anthropic.com";

/// Default Anthropic API version header.
pub const DEFAULT_API_VERSION: &str = "2023-06-01";

/// Provider connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(default)]
pub struct ProviderConfig {
    /// Model identifier
    model: String,
    /// Base URL of the API
    endpoint: String,
    /// Value of the `anthropic-version` header
    api_version: String,
    /// Request timeout in seconds
    timeout_secs: u64,
}

impl ProviderConfig {
    /// Returns a copy with the model replaced.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Returns a copy with the endpoint replaced.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout_secs: 120,
        }
    }
}

/// Top-level configuration.
#[derive(
    Debug, Clone, Default, PartialEq, Serialize, Deserialize, derive_getters::Getters,
)]
#[serde(default)]
pub struct ScrivenerConfig {
    /// Provider connection settings
    provider: ProviderConfig,
    /// Per-stage generation budgets
    budgets: StageBudgets,
}

impl ScrivenerConfig {
    /// Creates a configuration from parts.
    pub fn new(provider: ProviderConfig, budgets: StageBudgets) -> Self {
        Self { provider, budgets }
    }

    /// Load configuration from a TOML file.
    #[tracing::instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::new(ConfigErrorKind::Read {
                path: path.display().to_string(),
                message: e.to_string(),
            })
        })?;

        let config: Self = content.parse()?;
        tracing::debug!(model = %config.provider.model, "Loaded configuration");
        Ok(config)
    }

    /// Returns a copy with the provider settings replaced.
    pub fn with_provider(mut self, provider: ProviderConfig) -> Self {
        self.provider = provider;
        self
    }
}

impl FromStr for ScrivenerConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s).map_err(|e| ConfigError::new(ConfigErrorKind::Parse(e.to_string())))
    }
}
