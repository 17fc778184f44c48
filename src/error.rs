//! Error types for the reflow library.

use std::io;
use thiserror::Error;

/// Result type alias for reflow operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while assembling or exporting documents.
///
/// The core text functions (`normalize`, `segment`) are total over all
/// string inputs and never fail; errors only arise at the document-model
/// and export boundary.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A section label already exists in the document.
    #[error("Duplicate section label: {0}")]
    DuplicateLabel(String),

    /// Error serializing a document to JSON.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
