//! Article pipeline error types.

/// Stage-level failures that terminate a run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum PipelineErrorKind {
    /// The outline call failed or returned nothing
    #[display("Outline generation failed: {_0}")]
    OutlineGeneration(String),
    /// The title call failed or returned nothing
    #[display("Title generation failed: {_0}")]
    TitleGeneration(String),
}

/// Pipeline error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Pipeline Error: {} at line {} in {}", kind, line, file)]
pub struct PipelineError {
    kind: PipelineErrorKind,
    line: u32,
    file: &'static str,
}

impl PipelineError {
    /// Create a new pipeline error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PipelineErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &PipelineErrorKind {
        &self.kind
    }
}

impl<T> From<T> for PipelineError
where
    T: Into<PipelineErrorKind>,
{
    #[track_caller]
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}
