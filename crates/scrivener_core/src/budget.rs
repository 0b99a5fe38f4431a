//! Per-stage token and temperature budgets.

use serde::{Deserialize, Serialize};

/// Output budget for a single generation stage.
///
/// # Examples
///
/// ```
/// use scrivener_core::StageBudget;
///
/// let budget = StageBudget::new(2000, 0.7);
/// assert_eq!(*budget.max_tokens(), 2000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct StageBudget {
    /// Maximum tokens the provider may generate
    max_tokens: u32,
    /// Sampling temperature
    temperature: f32,
}

impl StageBudget {
    /// Creates a budget.
    pub fn new(max_tokens: u32, temperature: f32) -> Self {
        Self {
            max_tokens,
            temperature,
        }
    }
}

/// Budgets for each stage of article generation.
///
/// Titles get a small budget, the outline a medium one and each section
/// a large one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(default)]
pub struct StageBudgets {
    /// Title candidate generation
    titles: StageBudget,
    /// Outline generation
    outline: StageBudget,
    /// Per-section body generation
    section: StageBudget,
}

impl StageBudgets {
    /// Creates a budget set.
    pub fn new(titles: StageBudget, outline: StageBudget, section: StageBudget) -> Self {
        Self {
            titles,
            outline,
            section,
        }
    }
}

impl Default for StageBudgets {
    fn default() -> Self {
        Self {
            titles: StageBudget::new(1000, 0.7),
            outline: StageBudget::new(2000, 0.7),
            section: StageBudget::new(3000, 0.7),
        }
    }
}
