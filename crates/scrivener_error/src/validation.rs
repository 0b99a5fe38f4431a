//! Input validation error types.

/// A single problem found in user-supplied article inputs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ValidationIssue {
    /// Main keyword is missing or shorter than two characters after trimming
    #[display("Main keyword must be at least 2 characters")]
    KeywordTooShort,
    /// No genre was selected
    #[display("Select an article genre")]
    MissingGenre,
    /// No target audience was selected
    #[display("Select a target audience")]
    MissingAudience,
    /// Genre text did not name a known genre
    #[display("Unknown genre: {_0}")]
    UnknownGenre(String),
    /// Audience text did not name a known audience
    #[display("Unknown audience: {_0}")]
    UnknownAudience(String),
    /// Length text did not name a known length tier
    #[display("Unknown article length: {_0}")]
    UnknownLength(String),
}

/// Validation failure carrying every issue found, in field order.
///
/// Raised before any network activity; a run that fails validation
/// never starts.
///
/// # Examples
///
/// ```
/// use scrivener_error::{ValidationError, ValidationIssue};
///
/// let err = ValidationError::new(vec![
///     ValidationIssue::KeywordTooShort,
///     ValidationIssue::MissingGenre,
/// ]);
/// assert_eq!(err.issues().len(), 2);
/// assert!(format!("{}", err).contains("at least 2 characters"));
/// ```
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Problems found, in field order
    pub issues: Vec<ValidationIssue>,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new ValidationError with automatic location tracking.
    #[track_caller]
    pub fn new(issues: Vec<ValidationIssue>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            issues,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the issues found.
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    /// Human-readable messages, one per issue.
    pub fn messages(&self) -> Vec<String> {
        self.issues.iter().map(ToString::to_string).collect()
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Validation Error: {} at line {} in {}",
            self.messages().join("; "),
            self.line,
            self.file
        )
    }
}

impl std::error::Error for ValidationError {}
