//! Output types from provider responses.

use serde::{Deserialize, Serialize};

/// Supported output types from providers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Output {
    /// Plain text output.
    Text(String),
}
