//! Document model: an abstract plus ordered, labelled sections.
//!
//! These are the caller-owned values the re-flow pipeline operates on.
//! Section bodies are plain strings; the pipeline treats each body
//! independently.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::outline::Outline;

/// One outline entry with its editable body text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    /// Heading text identifying the section. Unique within a document.
    pub label: String,

    /// Body text of the section.
    pub body: String,
}

impl Section {
    /// Create a new section.
    pub fn new(label: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            body: body.into(),
        }
    }

    /// Number of characters in the body (code points).
    pub fn char_count(&self) -> usize {
        self.body.chars().count()
    }

    /// Check if the section has no body text.
    pub fn is_empty(&self) -> bool {
        self.body.trim().is_empty()
    }
}

/// A paper being edited: abstract plus ordered sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    /// Abstract body text.
    pub abstract_body: String,

    /// Ordered sections.
    pub sections: Vec<Section>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document with abstract text.
    pub fn with_abstract(abstract_body: impl Into<String>) -> Self {
        Self {
            abstract_body: abstract_body.into(),
            sections: Vec::new(),
        }
    }

    /// Append a section, rejecting duplicate labels.
    pub fn add_section(&mut self, section: Section) -> Result<()> {
        if self.sections.iter().any(|s| s.label == section.label) {
            return Err(Error::DuplicateLabel(section.label));
        }
        self.sections.push(section);
        Ok(())
    }

    /// Look up a section by label.
    pub fn section(&self, label: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.label == label)
    }

    /// Look up a section by label, mutably.
    pub fn section_mut(&mut self, label: &str) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| s.label == label)
    }

    /// Number of sections (not counting the abstract).
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Check if the document has no sections and no abstract text.
    pub fn is_empty(&self) -> bool {
        self.abstract_body.trim().is_empty() && self.sections.is_empty()
    }

    /// The ordered outline of section labels.
    pub fn outline(&self) -> Outline {
        Outline::from_labels(self.sections.iter().map(|s| s.label.clone()))
    }
}
