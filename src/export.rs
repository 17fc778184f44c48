//! Markdown and JSON export of an edited document.

use std::fs;
use std::path::Path;

use crate::document::Document;
use crate::error::Result;

/// Default file name for the exported markdown document.
pub const EXPORT_FILE_NAME: &str = "document.md";

/// MIME type of the exported markdown document.
pub const EXPORT_MIME_TYPE: &str = "text/markdown";

/// Assemble a document into a single markdown string.
///
/// Layout: `# Abstract` with the abstract body, then one `## <n>. <label>`
/// heading per section, each block separated by a blank line.
pub fn to_markdown(doc: &Document) -> String {
    let mut output = String::new();
    output.push_str("# Abstract\n");
    output.push_str(&doc.abstract_body);
    output.push_str("\n\n");

    for (i, section) in doc.sections.iter().enumerate() {
        output.push_str(&format!("## {}. {}\n", i + 1, section.label));
        output.push_str(&section.body);
        output.push_str("\n\n");
    }

    output
}

/// Serialize a document to JSON.
pub fn to_json(doc: &Document, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(doc)?
    } else {
        serde_json::to_string(doc)?
    };
    Ok(json)
}

/// Assemble a document and write it to a markdown file.
pub fn write_markdown<P: AsRef<Path>>(doc: &Document, path: P) -> Result<()> {
    fs::write(path, to_markdown(doc))?;
    Ok(())
}
