//! Normalization of raw PDF-extracted text.
//!
//! PDF extraction produces noisy text: hard line breaks mid-sentence,
//! inconsistent inter-sentence spacing, runs of duplicate spaces. The
//! normalizer flattens line breaks, marks sentence and colon boundaries
//! with newlines, and collapses redundant spaces, so the segmenter
//! downstream works on one logical line per sentence.

use unicode_normalization::UnicodeNormalization;

/// Abbreviations that end with a period but do not end a sentence.
pub const DEFAULT_EXCEPTIONS: [&str; 2] = ["Fig", "et al"];

/// Options for text normalization.
#[derive(Debug, Clone)]
pub struct NormalizeOptions {
    /// Abbreviations whose trailing period must not be treated as a
    /// sentence boundary (matched without the period, e.g. "Fig").
    /// Entries are applied in order; overlapping entries are the
    /// caller's responsibility to avoid.
    pub exceptions: Vec<String>,

    /// Normalize Unicode to NFC form before the boundary passes.
    pub normalize_unicode: bool,
}

impl NormalizeOptions {
    /// Create options with the default exception list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the exception list.
    pub fn with_exceptions<I, S>(mut self, exceptions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exceptions = exceptions.into_iter().map(Into::into).collect();
        self
    }

    /// Append a single exception.
    pub fn with_exception(mut self, exception: impl Into<String>) -> Self {
        self.exceptions.push(exception.into());
        self
    }

    /// Enable or disable Unicode NFC normalization.
    pub fn with_unicode_nfc(mut self, enable: bool) -> Self {
        self.normalize_unicode = enable;
        self
    }
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            exceptions: DEFAULT_EXCEPTIONS.iter().map(|s| s.to_string()).collect(),
            normalize_unicode: false,
        }
    }
}

/// Text normalizer.
///
/// Total over all string inputs: any string in, a string out, no errors.
#[derive(Debug, Clone)]
pub struct Normalizer {
    options: NormalizeOptions,
}

impl Normalizer {
    /// Create a new normalizer with the given options.
    pub fn new(options: NormalizeOptions) -> Self {
        Self { options }
    }

    /// Normalize raw extracted text.
    ///
    /// Steps, in order, each cumulative on the same buffer:
    /// 1. trim leading/trailing whitespace
    /// 2. every newline becomes a single space
    /// 3. `". "` becomes `".\n"` (sentence boundary)
    /// 4. each exception `E` reverts `"E.\n"` back to `"E. "`
    /// 5. `": "` becomes `":\n"`
    /// 6. runs of two or more spaces collapse to one
    ///
    /// The output never contains two consecutive spaces, and the function
    /// is idempotent: normalizing normalized text changes nothing.
    pub fn process(&self, text: &str) -> String {
        let mut result = text.trim().to_string();

        if self.options.normalize_unicode {
            result = result.nfc().collect();
        }

        result = result.replace('\n', " ").replace(". ", ".\n");

        for exc in &self.options.exceptions {
            result = result.replace(&format!("{}.\n", exc), &format!("{}. ", exc));
        }

        result = result.replace(": ", ":\n");

        collapse_spaces(&result)
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(NormalizeOptions::default())
    }
}

/// Normalize text with an explicit exception list.
///
/// Convenience wrapper around [`Normalizer`] for one-off calls.
pub fn normalize(text: &str, exceptions: &[&str]) -> String {
    Normalizer::new(NormalizeOptions::new().with_exceptions(exceptions.iter().copied())).process(text)
}

/// Collapse runs of two or more space characters to a single space.
///
/// Single linear scan; only the space character is collapsed, newlines
/// pass through untouched.
fn collapse_spaces(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut prev_was_space = false;
    for c in text.chars() {
        if c == ' ' {
            if !prev_was_space {
                result.push(c);
            }
            prev_was_space = true;
        } else {
            result.push(c);
            prev_was_space = false;
        }
    }
    result
}
