//! Generation provider error types.

/// Provider-call error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GenerationErrorKind {
    /// API key not supplied
    MissingApiKey,
    /// Failed to create the HTTP client
    ClientCreation(String),
    /// Transport failure before a response arrived
    Http(String),
    /// Provider answered with a non-success status
    Api {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },
    /// Response body could not be decoded
    Parse(String),
    /// Provider answered but produced no text
    EmptyResponse,
}

impl std::fmt::Display for GenerationErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerationErrorKind::MissingApiKey => {
                write!(f, "ANTHROPIC_API_KEY not set and no --api-key given")
            }
            GenerationErrorKind::ClientCreation(msg) => {
                write!(f, "Failed to create generation client: {}", msg)
            }
            GenerationErrorKind::Http(msg) => write!(f, "Request failed: {}", msg),
            GenerationErrorKind::Api { status, message } => {
                write!(f, "HTTP {} error: {}", status, message)
            }
            GenerationErrorKind::Parse(msg) => write!(f, "Failed to parse response: {}", msg),
            GenerationErrorKind::EmptyResponse => write!(f, "Provider returned no text"),
        }
    }
}

/// Generation error with source location tracking.
///
/// # Examples
///
/// ```
/// use scrivener_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::EmptyResponse);
/// assert!(format!("{}", err).contains("no text"));
/// ```
#[derive(Debug, Clone)]
pub struct GenerationError {
    /// The kind of error that occurred
    pub kind: GenerationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &GenerationErrorKind {
        &self.kind
    }
}

impl std::fmt::Display for GenerationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Generation Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for GenerationError {}
