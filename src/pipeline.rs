//! The re-flow pipeline: normalize, segment, join.
//!
//! This is the flow a caller runs on each editable section body, and runs
//! again whenever the user adjusts the character budget. Sections are
//! independent, so a whole document can be processed in parallel.

use rayon::prelude::*;
use regex::Regex;

use crate::document::Document;
use crate::normalize::{NormalizeOptions, Normalizer};
use crate::segment::{SegmentOptions, Segmenter};

/// Options for the re-flow pipeline.
#[derive(Debug, Clone, Default)]
pub struct ReflowOptions {
    /// Normalization options.
    pub normalize: NormalizeOptions,

    /// Segmentation options.
    pub segment: SegmentOptions,

    /// Process document sections in parallel.
    pub parallel: bool,
}

impl ReflowOptions {
    /// Create options with defaults (parallel off).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the character budget.
    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.segment = self.segment.with_max_chars(max_chars);
        self
    }

    /// Set the citation lookahead window.
    pub fn with_buffer(mut self, buffer: usize) -> Self {
        self.segment = self.segment.with_buffer(buffer);
        self
    }

    /// Replace the abbreviation exception list.
    pub fn with_exceptions<I, S>(mut self, exceptions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.normalize = self.normalize.with_exceptions(exceptions);
        self
    }

    /// Enable parallel section processing.
    pub fn parallel(mut self) -> Self {
        self.parallel = true;
        self
    }

    /// Disable parallel section processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

/// Re-flow pipeline.
pub struct ReflowPipeline {
    normalizer: Normalizer,
    segmenter: Segmenter,
    parallel: bool,
}

impl ReflowPipeline {
    /// Create a pipeline from options.
    pub fn new(options: ReflowOptions) -> Self {
        Self {
            normalizer: Normalizer::new(options.normalize),
            segmenter: Segmenter::new(options.segment),
            parallel: options.parallel,
        }
    }

    /// Normalize and segment one block of text, joining the paragraphs
    /// with single newlines for display.
    pub fn process(&self, text: &str) -> String {
        let normalized = self.normalizer.process(text);
        self.segmenter.segment(&normalized).join("\n")
    }

    /// Normalize and segment one block of text, returning the paragraphs.
    pub fn paragraphs(&self, text: &str) -> Vec<String> {
        let normalized = self.normalizer.process(text);
        self.segmenter.segment(&normalized)
    }

    /// Re-flow the abstract and every section body of a document in place.
    pub fn process_document(&self, doc: &mut Document) {
        doc.abstract_body = self.process(&doc.abstract_body);
        if self.parallel {
            doc.sections
                .par_iter_mut()
                .for_each(|s| s.body = self.process(&s.body));
        } else {
            for s in &mut doc.sections {
                s.body = self.process(&s.body);
            }
        }
        log::debug!("re-flowed {} sections", doc.section_count());
    }
}

impl Default for ReflowPipeline {
    fn default() -> Self {
        Self::new(ReflowOptions::default())
    }
}

/// Insert a blank line before stray `Figure <n>):` / `Table <n>):`
/// references and bullet glyphs in assembled markdown, so they open their
/// own block instead of trailing the preceding prose.
pub fn isolate_marker_references(markdown: &str) -> String {
    let figure = Regex::new(r"Figure (\d+)\):").unwrap();
    let table = Regex::new(r"Table (\d+)\):").unwrap();

    let result = figure.replace_all(markdown, "\n\nFigure $1):");
    let result = table.replace_all(&result, "\n\nTable $1):");
    result.replace('•', "\n\n•")
}
