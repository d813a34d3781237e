//! Best-effort parsing of draft bodies into highlights
//!
//! A draft body looks like:
//!
//! ```text
//! ## Highlight 1
//! > quoted line
//!
//! commentary line
//! ```
//!
//! Parsing never fails. Lines that fit no rule are dropped or folded into the
//! surrounding commentary.
//!
//! The format cannot carry every commentary faithfully. Blank lines inside a
//! commentary are lost (its paragraphs are joined by single newlines), and a
//! commentary line starting with `>` is read back as part of the quote. Drafts
//! re-saved from parsed highlights, as `edit` does, inherit both losses.

use super::Highlight;

/// Prefix that opens a highlight section
pub const HIGHLIGHT_HEADER: &str = "## Highlight";

/// Blockquote marker
pub const QUOTE_MARKER: char = '>';

/// Raw lines belonging to one section of a draft body
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct RawSection<'a> {
    /// Quote lines, markers included
    pub quote: Vec<&'a str>,
    pub commentary: Vec<&'a str>,
    /// False only for text that precedes the first highlight header
    pub headed: bool,
}

impl RawSection<'_> {
    fn is_empty(&self) -> bool {
        self.quote.is_empty() && self.commentary.is_empty()
    }
}

/// Split a draft body into raw sections
///
/// A section is flushed at every highlight header and at end of input, but only
/// when it buffered at least one line. `header_opens_quote` controls whether the
/// lines right after a header are treated as the start of a quote block: the
/// highlight parser does this, the publish transformer does not.
pub(crate) fn scan_sections(body: &str, header_opens_quote: bool) -> Vec<RawSection<'_>> {
    let mut sections = Vec::new();
    let mut current = RawSection::default();
    let mut in_quote = false;

    for line in body.lines() {
        if line.starts_with(HIGHLIGHT_HEADER) {
            if !current.is_empty() {
                sections.push(std::mem::take(&mut current));
            }
            current.headed = true;
            in_quote = header_opens_quote;
        } else if line.starts_with(QUOTE_MARKER) {
            current.quote.push(line);
            in_quote = true;
        } else if line.trim().is_empty() {
            in_quote = false;
        } else if !in_quote {
            current.commentary.push(line);
        }
    }

    if !current.is_empty() {
        sections.push(current);
    }

    sections
}

/// Remove the blockquote marker (and one following space) from a quote line
pub fn strip_quote_marker(line: &str) -> &str {
    line.strip_prefix("> ")
        .or_else(|| line.strip_prefix(QUOTE_MARKER))
        .unwrap_or(line)
}

/// Parse a draft body into an ordered list of highlights
///
/// Sections whose quote and commentary are both blank are dropped.
pub fn parse_highlights(body: &str) -> Vec<Highlight> {
    scan_sections(body, true)
        .into_iter()
        .map(|section| {
            let quote = section
                .quote
                .iter()
                .map(|line| strip_quote_marker(line))
                .collect::<Vec<_>>()
                .join("\n");
            Highlight::new(quote, section.commentary.join("\n"))
        })
        .filter(|highlight| !highlight.is_empty())
        .collect()
}
