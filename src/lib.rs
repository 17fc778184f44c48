//! # reflow
//!
//! Paragraph re-flow and character-budget segmentation for PDF-extracted
//! text.
//!
//! Text pulled out of a PDF is noisy: hard line breaks mid-sentence,
//! `(cid:NN)` artifacts, inconsistent spacing, figure and table markers
//! buried in prose. This library cleans such text and re-splits it into
//! semantically sensible paragraphs bounded by a configurable maximum
//! character count, preserving sentence and structural boundaries.
//!
//! ## Quick Start
//!
//! ```
//! use reflow::{normalize, segment};
//!
//! let raw = "Broken\nacross lines. See Fig. 3 for details. More text.";
//! let clean = normalize(raw, &["Fig", "et al"]);
//! let paragraphs = segment(&clean, 40);
//! assert!(!paragraphs.is_empty());
//! ```
//!
//! ## Pipeline
//!
//! For per-section re-flow of a whole document, use [`ReflowPipeline`]:
//!
//! ```
//! use reflow::{Document, ReflowOptions, ReflowPipeline, Section};
//!
//! let mut doc = Document::with_abstract("We study re-flow. It works.");
//! doc.add_section(Section::new("Introduction", "Body text here."))?;
//!
//! let pipeline = ReflowPipeline::new(ReflowOptions::new().with_max_chars(200));
//! pipeline.process_document(&mut doc);
//! let markdown = reflow::export::to_markdown(&doc);
//! assert!(markdown.starts_with("# Abstract\n"));
//! # Ok::<(), reflow::Error>(())
//! ```
//!
//! ## Features
//!
//! - **Normalizer**: line-break flattening, sentence/colon boundary
//!   marking, abbreviation exceptions ("Fig.", "et al."), space collapsing
//! - **Segmenter**: budget-aware splitting with structural-marker priority
//!   and a numeric-citation lookahead guard
//! - **Document model**: abstract + labelled sections, outline utilities
//! - **Export**: clean markdown and JSON assembly
//! - **Parallel processing**: rayon across independent sections

pub mod document;
pub mod error;
pub mod export;
pub mod normalize;
pub mod outline;
pub mod pipeline;
pub mod segment;

// Re-export commonly used types
pub use document::{Document, Section};
pub use error::{Error, Result};
pub use normalize::{normalize, NormalizeOptions, Normalizer, DEFAULT_EXCEPTIONS};
pub use outline::{clean_label, Outline};
pub use pipeline::{isolate_marker_references, ReflowOptions, ReflowPipeline};
pub use segment::{
    segment, SegmentOptions, Segmenter, DEFAULT_BUFFER, DEFAULT_MAX_CHARS, MAX_CHAR_BUDGET,
};

/// Normalize and segment one block of text with default options and the
/// given character budget, joined with single newlines for display.
///
/// Equivalent to building a [`ReflowPipeline`] for a single call.
pub fn reflow(text: &str, max_chars: usize) -> String {
    ReflowPipeline::new(ReflowOptions::new().with_max_chars(max_chars)).process(text)
}
