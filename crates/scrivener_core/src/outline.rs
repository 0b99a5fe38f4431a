//! Outline structure parsed from the outline stage.

use serde::{Deserialize, Serialize};

/// One second-level heading of the outline and its subsections.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_getters::Getters,
)]
pub struct Section {
    /// Heading text, marker removed
    title: String,
    /// Third-level heading texts, in order
    subsections: Vec<String>,
}

impl Section {
    /// Creates a section with no subsections.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subsections: Vec::new(),
        }
    }

    /// Creates a section with the given subsections.
    pub fn with_subsections(title: impl Into<String>, subsections: Vec<String>) -> Self {
        Self {
            title: title.into(),
            subsections,
        }
    }

    /// Appends a subsection title.
    pub fn push_subsection(&mut self, subsection: impl Into<String>) {
        self.subsections.push(subsection.into());
    }
}

/// Intro line plus body sections, closing heading excluded.
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_getters::Getters,
)]
pub struct OutlineStructure {
    /// Intro text; empty when the outline had none
    intro: String,
    /// Body sections in outline order
    sections: Vec<Section>,
}

impl OutlineStructure {
    /// Creates an outline structure.
    pub fn new(intro: impl Into<String>, sections: Vec<Section>) -> Self {
        Self {
            intro: intro.into(),
            sections,
        }
    }

    /// Number of body sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// True when the outline yielded no sections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Generated body for one [`Section`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct SectionContent {
    /// Title of the section the body was written for
    title: String,
    /// Body text as returned by the provider
    body: String,
}

impl SectionContent {
    /// Pairs a body with the section it was generated from.
    pub fn new(section: &Section, body: impl Into<String>) -> Self {
        Self {
            title: section.title.clone(),
            body: body.into(),
        }
    }
}
