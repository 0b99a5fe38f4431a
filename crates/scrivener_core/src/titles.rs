//! Title candidates produced by the title stage.

use serde::{Deserialize, Serialize};

/// Maximum number of title candidates kept from one response.
pub const MAX_TITLE_CANDIDATES: usize = 5;

/// Candidate titles plus the provider's recommendation.
///
/// `recommended` is empty when the response carried no recognizable
/// recommendation line.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct TitleSet {
    /// Candidates in numeral order, at most five
    candidates: Vec<String>,
    /// Recommended title, possibly empty
    recommended: String,
}

impl TitleSet {
    /// Creates a title set, keeping at most five candidates.
    pub fn new(mut candidates: Vec<String>, recommended: impl Into<String>) -> Self {
        candidates.truncate(MAX_TITLE_CANDIDATES);
        Self {
            candidates,
            recommended: recommended.into(),
        }
    }

    /// Selects a candidate by its 1-based position.
    pub fn select(&self, position: usize) -> Option<&str> {
        position
            .checked_sub(1)
            .and_then(|index| self.candidates.get(index))
            .map(String::as_str)
    }

    /// True when nothing usable was parsed.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty() && self.recommended.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_is_one_based() {
        let set = TitleSet::new(vec!["A".into(), "B".into()], "B");
        assert_eq!(set.select(1), Some("A"));
        assert_eq!(set.select(2), Some("B"));
        assert_eq!(set.select(0), None);
        assert_eq!(set.select(3), None);
    }

    #[test]
    fn test_candidates_are_capped() {
        let set = TitleSet::new((1..=7).map(|i| i.to_string()).collect(), "");
        assert_eq!(set.candidates().len(), MAX_TITLE_CANDIDATES);
        assert!(!set.is_empty());
    }
}
