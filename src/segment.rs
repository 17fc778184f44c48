//! Character-budget-aware paragraph segmentation.
//!
//! The segmenter repeatedly consumes a prefix of its input, choosing each
//! split point by a priority of heuristics: structural markers
//! ("Figure N:" / "Table N:") first, then the last sentence-ending period
//! within the budget (with a lookahead guard against numeric citation
//! lists), then a hard character cutoff as the fallback of last resort.
//!
//! All offsets and budgets are code-point counts, not bytes.

use regex::Regex;

/// Default character budget per paragraph.
pub const DEFAULT_MAX_CHARS: usize = 1000;

/// Upper bound of the adjustable character budget.
pub const MAX_CHAR_BUDGET: usize = 2000;

/// Default lookahead window (in chars) for the numeric-citation guard.
pub const DEFAULT_BUFFER: usize = 10;

/// Options for paragraph segmentation.
#[derive(Debug, Clone, Copy)]
pub struct SegmentOptions {
    /// Maximum characters per paragraph. A budget of zero degenerates to
    /// one-character hard cuts; the segmenter still terminates.
    pub max_chars: usize,

    /// Lookahead window after a candidate period, scanned for a numeric
    /// citation continuation ("1),").
    pub buffer: usize,
}

impl SegmentOptions {
    /// Create options with the default budget and lookahead.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the character budget, clamped to the supported range.
    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = max_chars.min(MAX_CHAR_BUDGET);
        self
    }

    /// Set the citation lookahead window.
    pub fn with_buffer(mut self, buffer: usize) -> Self {
        self.buffer = buffer;
        self
    }
}

impl Default for SegmentOptions {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_MAX_CHARS,
            buffer: DEFAULT_BUFFER,
        }
    }
}

/// Paragraph segmenter.
///
/// Pure and reentrant: no shared state, safe to call once per document
/// section and again whenever the character budget changes.
pub struct Segmenter {
    options: SegmentOptions,
    marker: Regex,
    citation: Regex,
    artifact: Regex,
}

impl Segmenter {
    /// Create a new segmenter with the given options.
    pub fn new(options: SegmentOptions) -> Self {
        Self {
            options,
            marker: Regex::new(r"(Figure \d+:|Table \d+:)").unwrap(),
            citation: Regex::new(r"\d+\),").unwrap(),
            artifact: Regex::new(r"\(cid:\d+\)").unwrap(),
        }
    }

    /// Split text into paragraphs bounded by the character budget.
    ///
    /// Every emitted paragraph except possibly the last fits the budget,
    /// give or take one structural-marker length: a "Figure N:" or
    /// "Table N:" heading is never cut mid-token and may extend a
    /// paragraph slightly past the budget instead.
    ///
    /// Empty input yields an empty sequence.
    pub fn segment(&self, text: &str) -> Vec<String> {
        let text = self.preprocess(text);
        let mut parts = Vec::new();
        let mut rest = text.as_str();

        while !rest.is_empty() {
            let remaining_chars = rest.chars().count();
            if remaining_chars <= self.options.max_chars {
                parts.push(rest.to_string());
                break;
            }

            if let Some(m) = self.marker.find(rest) {
                let marker_chars = rest[..m.start()].chars().count();
                if marker_chars < self.options.max_chars {
                    if m.start() > 0 {
                        // Split the preceding prose off and leave the marker
                        // at the head of the remainder, so the figure or
                        // table stays joined with its caption body.
                        parts.push(format!("{}\n\n", rest[..m.start()].trim()));
                        rest = &rest[m.start()..];
                        continue;
                    }
                    let end = advance_one_char(rest, m.end());
                    parts.push(format!("{}\n\n", &rest[..end]));
                    rest = &rest[end..];
                    continue;
                }
            }

            let (part, advance) = self.split_at_sentence(rest);
            parts.push(part);
            rest = &rest[advance..];
        }

        log::debug!(
            "segmented {} chars into {} paragraphs (budget {})",
            text.chars().count(),
            parts.len(),
            self.options.max_chars
        );
        parts
    }

    /// Strip PDF artifacts and flatten the text onto one logical line.
    ///
    /// Idempotent. Prior paragraph breaks are intentionally discarded
    /// since the segmenter imposes its own; bullets are the exception and
    /// always open a new visual block.
    fn preprocess(&self, text: &str) -> String {
        let text = self.artifact.replace_all(text, "");
        text.replace('\n', " ").replace('•', "\n\n•")
    }

    /// Split at the last period inside the budget, or hard-cut.
    ///
    /// Returns the emitted paragraph and the byte count to advance by.
    fn split_at_sentence(&self, rest: &str) -> (String, usize) {
        let limit = byte_offset_of_char(rest, self.options.max_chars);

        let Some(found) = rest[..limit].rfind('.') else {
            // No sentence boundary inside the whole budget: hard cut.
            // A zero budget still consumes one char per iteration so the
            // loop cannot stall or emit empty paragraphs.
            let cut = if limit == 0 {
                advance_one_char(rest, 0)
            } else {
                limit
            };
            return (rest[..cut].to_string(), cut);
        };

        let mut split = found;
        let window_end = split + byte_offset_of_char(&rest[split..], self.options.buffer);
        if self.citation.is_match(&rest[split..window_end]) {
            // The period sits inside a numeric citation list ("refs.1),2),")
            // and is a false sentence boundary. Retreat to the previous
            // period; if there is none, keep the original split point.
            match rest[..split].rfind('.') {
                Some(earlier) => split = earlier,
                None => log::debug!("citation guard found no earlier period, keeping split"),
            }
        }

        let part = format!("{}\n\n", &rest[..split + 1]);
        // One character past the period is consumed with the separator
        // (usually the space that followed the sentence).
        let advance = advance_one_char(rest, split + 1);
        (part, advance)
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new(SegmentOptions::default())
    }
}

/// Segment text with the default lookahead buffer.
///
/// Convenience wrapper around [`Segmenter`] for one-off calls.
pub fn segment(text: &str, max_chars: usize) -> Vec<String> {
    Segmenter::new(SegmentOptions::new().with_max_chars(max_chars)).segment(text)
}

/// Byte offset of the nth character, or the string length if the string
/// is shorter than n characters.
fn byte_offset_of_char(s: &str, n: usize) -> usize {
    s.char_indices().nth(n).map(|(i, _)| i).unwrap_or(s.len())
}

/// Byte offset one character past `at` (which must lie on a boundary).
fn advance_one_char(s: &str, at: usize) -> usize {
    match s[at..].chars().next() {
        Some(c) => at + c.len_utf8(),
        None => at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joined(parts: &[String]) -> String {
        parts.concat()
    }

    #[test]
    fn test_short_text_is_single_paragraph() {
        let parts = segment("A short note.", 100);
        assert_eq!(parts, vec!["A short note.".to_string()]);
    }

    #[test]
    fn test_empty_input() {
        let parts = segment("", 100);
        assert!(parts.is_empty());
    }

    #[test]
    fn test_zero_budget_terminates() {
        let parts = segment("a", 0);
        assert_eq!(parts, vec!["a".to_string()]);

        let parts = segment("abc", 0);
        assert_eq!(parts, vec!["a", "b", "c"]);
        assert!(parts.iter().all(|p| !p.is_empty()));
    }

    #[test]
    fn test_split_at_sentence_boundary() {
        let parts = segment("One sentence here. Another sentence there.", 25);
        assert_eq!(parts[0], "One sentence here.\n\n");
        assert_eq!(parts[1], "Another sentence there.");
    }

    #[test]
    fn test_hard_cut_without_periods() {
        let parts = segment("abcdefghij", 4);
        assert_eq!(parts, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_budget_bound_holds() {
        let text = "Sentence one is right here. Sentence two follows it. \
                    Sentence three closes the paragraph out. And a tail.";
        for budget in [10, 30, 60] {
            let parts = segment(text, budget);
            for part in &parts[..parts.len() - 1] {
                let len = part.trim_end().chars().count();
                assert!(
                    len <= budget,
                    "budget {} exceeded by {:?} ({} chars)",
                    budget,
                    part,
                    len
                );
            }
        }
    }

    #[test]
    fn test_figure_marker_starts_its_own_paragraph() {
        let parts = segment("Intro text. Figure 1: caption details here.", 15);
        assert_eq!(parts[0], "Intro text.\n\n");
        assert!(parts[1].starts_with("Figure 1:"), "got: {:?}", parts[1]);
    }

    #[test]
    fn test_table_marker_not_split_mid_token() {
        let parts = segment("Values are listed in Table 12: means and errors.", 25);
        for part in &parts {
            // The marker may only ever appear at the head of a paragraph.
            if let Some(pos) = part.find("Table 12:") {
                assert_eq!(pos, 0, "marker buried in {:?}", part);
            }
            assert!(!part.ends_with("Table"), "marker cut in {:?}", part);
        }
    }

    #[test]
    fn test_marker_at_offset_zero_consumed_with_trailing_char() {
        let parts = segment("Figure 2: a very long caption that keeps going on.", 10);
        assert_eq!(parts[0], "Figure 2: \n\n");
        assert!(parts[1].starts_with("a very"));
    }

    #[test]
    fn test_citation_guard_defers_to_earlier_period() {
        let text = "One. We cite refs.1),2),3) here. Tail.";
        let parts = segment(text, 22);
        // The period in "refs." falls inside the window matching "1)," and
        // must not be taken as a sentence end; the split retreats to "One.".
        assert_eq!(parts[0], "One.\n\n");
        assert!(parts[1].starts_with("We cite refs."), "got: {:?}", parts[1]);
    }

    #[test]
    fn test_citation_guard_without_earlier_period_keeps_split() {
        // Documented fallback: with no earlier period to retreat to, the
        // originally found period is accepted.
        let text = "We cite refs.1),2),3) and more words follow afterwards.";
        let parts = segment(text, 20);
        assert_eq!(parts[0], "We cite refs.\n\n");
    }

    #[test]
    fn test_cid_artifacts_removed() {
        let parts = segment("before (cid:123) after (cid:4) end.", 100);
        assert_eq!(parts, vec!["before  after  end.".to_string()]);
    }

    #[test]
    fn test_bullets_open_new_blocks() {
        let parts = segment("intro • first item • second item", 100);
        assert_eq!(parts, vec!["intro \n\n• first item \n\n• second item"]);
    }

    #[test]
    fn test_newlines_flattened_before_splitting() {
        let parts = segment("line one\nline two. line three\nends.", 100);
        assert_eq!(parts, vec!["line one line two. line three ends."]);
    }

    #[test]
    fn test_reconstruction_without_markers() {
        // Concatenating the output and stripping separators reproduces the
        // input, minus the single char consumed at each sentence split.
        let text = "First point made here. Second point made there. Third one.";
        let parts = segment(text, 30);
        let rebuilt = joined(&parts).replace("\n\n", " ");
        assert_eq!(rebuilt, text);
    }

    #[test]
    fn test_multibyte_input_never_panics() {
        let text = "Früher war alles besser. Müßiggang ist aller Laster Anfang. 서울은 크다.";
        for budget in 0..40 {
            let parts = segment(text, budget);
            assert!(!parts.is_empty());
        }
    }

    #[test]
    fn test_citation_window_at_end_of_text() {
        // Lookahead window truncates at the end of input without panicking.
        let parts = segment("Short tail ref.1),", 15);
        assert!(!parts.is_empty());
    }

    #[test]
    fn test_options_clamp_budget() {
        let options = SegmentOptions::new().with_max_chars(5000);
        assert_eq!(options.max_chars, MAX_CHAR_BUDGET);
    }
}
