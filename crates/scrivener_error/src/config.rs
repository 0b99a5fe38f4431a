//! Configuration error types.

/// Ways loading `scrivener.toml` can fail.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ConfigErrorKind {
    /// The file could not be read
    #[display("Failed to read config file {path}: {message}")]
    Read {
        /// Path that was requested
        path: String,
        /// I/O error text
        message: String,
    },
    /// The contents are not valid configuration TOML
    #[display("Failed to parse config: {_0}")]
    Parse(String),
}

/// Configuration error with location tracking.
///
/// # Examples
///
/// ```
/// use scrivener_error::{ConfigError, ConfigErrorKind};
///
/// let err = ConfigError::new(ConfigErrorKind::Parse("expected `]`".into()));
/// assert!(matches!(err.kind(), ConfigErrorKind::Parse(_)));
/// assert!(err.to_string().starts_with("Config Error: Failed to parse config"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Config Error: {} at line {} in {}", kind, line, file)]
pub struct ConfigError {
    kind: ConfigErrorKind,
    line: u32,
    file: &'static str,
}

impl ConfigError {
    /// Create a new config error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ConfigErrorKind {
        &self.kind
    }
}

impl From<ConfigErrorKind> for ConfigError {
    #[track_caller]
    fn from(kind: ConfigErrorKind) -> Self {
        Self::new(kind)
    }
}
