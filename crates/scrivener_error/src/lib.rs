//! Error types for the Scrivener article generator.
//!
//! Every error records where it was constructed. Component crates return
//! their own error types; `ScrivenerError` lifts any of them through `?`.

mod config;
mod generation;
mod pipeline;
mod validation;

pub use config::{ConfigError, ConfigErrorKind};
pub use generation::{GenerationError, GenerationErrorKind};
pub use pipeline::{PipelineError, PipelineErrorKind};
pub use validation::{ValidationError, ValidationIssue};

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum ScrivenerErrorKind {
    /// Configuration error
    Config(ConfigError),
    /// Input validation error
    Validation(ValidationError),
    /// Generation provider error
    Generation(GenerationError),
    /// Pipeline stage error
    Pipeline(PipelineError),
}

impl std::fmt::Display for ScrivenerErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScrivenerErrorKind::Config(e) => write!(f, "{}", e),
            ScrivenerErrorKind::Validation(e) => write!(f, "{}", e),
            ScrivenerErrorKind::Generation(e) => write!(f, "{}", e),
            ScrivenerErrorKind::Pipeline(e) => write!(f, "{}", e),
        }
    }
}

/// Scrivener error with kind discrimination.
#[derive(Debug)]
pub struct ScrivenerError(Box<ScrivenerErrorKind>);

impl ScrivenerError {
    /// Create a new error from a kind.
    pub fn new(kind: ScrivenerErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ScrivenerErrorKind {
        &self.0
    }
}

impl std::fmt::Display for ScrivenerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Scrivener Error: {}", self.0)
    }
}

impl std::error::Error for ScrivenerError {}

impl<T> From<T> for ScrivenerError
where
    T: Into<ScrivenerErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Scrivener operations.
pub type ScrivenerResult<T> = std::result::Result<T, ScrivenerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_errors_lift_into_umbrella() {
        let err: ScrivenerError = GenerationError::new(GenerationErrorKind::MissingApiKey).into();
        assert!(matches!(err.kind(), ScrivenerErrorKind::Generation(_)));
        assert!(err.to_string().contains("ANTHROPIC_API_KEY"));

        let err: ScrivenerError = ValidationError::new(vec![ValidationIssue::MissingGenre]).into();
        assert!(matches!(err.kind(), ScrivenerErrorKind::Validation(_)));

        let err: ScrivenerError = ConfigError::new(ConfigErrorKind::Parse("bad".into())).into();
        assert!(matches!(err.kind(), ScrivenerErrorKind::Config(_)));
        assert!(err.to_string().contains("Failed to parse config: bad"));
    }

    #[test]
    fn test_location_is_recorded() {
        let err = PipelineError::new(PipelineErrorKind::OutlineGeneration("boom".into()));
        assert!(err.to_string().contains(file!()));
        assert_eq!(
            err.kind(),
            &PipelineErrorKind::OutlineGeneration("boom".into())
        );
    }
}
