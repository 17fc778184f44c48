//! Outline extraction and label cleanup.
//!
//! An outline is the ordered sequence of section headings recovered from a
//! document's table of contents or from its heading structure. Labels get
//! numeric prefixes stripped and duplicates disambiguated so each one can
//! key a section.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Ordered sequence of section labels.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Outline {
    labels: Vec<String>,
}

impl Outline {
    /// Create an empty outline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an outline from raw labels: prefixes are stripped and
    /// duplicates disambiguated.
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut outline = Self {
            labels: labels.into_iter().map(Into::into).collect(),
        };
        outline.clean();
        outline.dedupe();
        outline
    }

    /// Recover an outline from a markdown string with `#`-prefixed
    /// headings, taking the first line of each heading chunk.
    pub fn from_markdown(markdown: &str) -> Self {
        let labels = markdown
            .split("# ")
            .skip(1)
            .map(|chunk| chunk.lines().next().unwrap_or("").to_string());
        Self::from_labels(labels)
    }

    /// The cleaned labels, in order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of labels.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Check if the outline has no labels.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    fn clean(&mut self) {
        for label in &mut self.labels {
            *label = clean_label(label);
        }
    }

    /// Disambiguate duplicate labels by appending `_<distance>` to the
    /// later occurrence, where distance is the index gap to the first
    /// occurrence. Pairwise pass in index order; already-suffixed labels
    /// take part in later comparisons.
    fn dedupe(&mut self) {
        for i in 0..self.labels.len() {
            let reference = self.labels[i].clone();
            for j in (i + 1)..self.labels.len() {
                if self.labels[j] == reference {
                    let suffix = format!("_{}", j - i);
                    self.labels[j].push_str(&suffix);
                }
            }
        }
    }
}

impl IntoIterator for Outline {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.labels.into_iter()
    }
}

/// Strip a leading section-numbering prefix ("1.", "2.3", "4 ") from a
/// heading label.
pub fn clean_label(label: &str) -> String {
    // Compiled per call; outlines are short and this is far off any hot path.
    let prefix = Regex::new(r"^[\d.]+\s+").unwrap();
    prefix.replace(label, "").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_label() {
        assert_eq!(clean_label("1. Introduction"), "Introduction");
        assert_eq!(clean_label("2.3 Related Work"), "Related Work");
        assert_eq!(clean_label("Conclusion"), "Conclusion");
        assert_eq!(clean_label("4 Results"), "Results");
    }

    #[test]
    fn test_dedupe_appends_distance_suffix() {
        let outline = Outline::from_labels(["Methods", "Results", "Methods"]);
        assert_eq!(outline.labels(), &["Methods", "Results", "Methods_2"]);
    }

    #[test]
    fn test_dedupe_multiple_duplicates() {
        let outline = Outline::from_labels(["A", "A", "A"]);
        // Second "A" becomes "A_1"; the third is still equal to the first
        // when compared, so it gets the gap to index 0.
        assert_eq!(outline.labels(), &["A", "A_1", "A_2"]);
    }

    #[test]
    fn test_from_markdown() {
        let md = "preamble\n# 1. Introduction\nbody text\n## 2. Methods\nmore body\n";
        let outline = Outline::from_markdown(md);
        assert_eq!(outline.labels(), &["Introduction", "Methods"]);
    }

    #[test]
    fn test_from_markdown_empty() {
        let outline = Outline::from_markdown("no headings at all");
        assert!(outline.is_empty());
    }

    #[test]
    fn test_into_iter_preserves_order() {
        let outline = Outline::from_labels(["One", "Two"]);
        let labels: Vec<String> = outline.into_iter().collect();
        assert_eq!(labels, vec!["One".to_string(), "Two".to_string()]);
    }
}
