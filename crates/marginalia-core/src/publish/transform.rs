//! Draft body → publishable body
//!
//! ```text
//! ## Highlight 3          ## Key Insight 1
//! > Quote text      →
//!                         > Quote text
//! Commentary
//!                         **My thoughts:** Commentary
//! ```

use crate::note::parse::{scan_sections, RawSection};

/// Label placed before the first commentary line of each section
pub const THOUGHTS_LABEL: &str = "**My thoughts:**";

/// Heading prefix of published sections
pub const INSIGHT_HEADER: &str = "## Key Insight";

/// Horizontal rule between sections
pub const SEPARATOR: &str = "---";

/// Restructure a draft body into numbered "Key Insight" sections
///
/// Sections are renumbered 1, 2, 3... regardless of the draft's own numbering,
/// and empty sections are dropped. Text before the first highlight header is
/// kept without a heading and does not take a number. Quote lines are copied
/// verbatim. Sections are separated by `---`; the last one has no trailing
/// separator.
pub fn transform(draft_body: &str) -> String {
    let sections = scan_sections(draft_body, false);
    let last = sections.len().saturating_sub(1);

    let mut lines: Vec<String> = Vec::new();
    let mut number = 0;
    for (i, section) in sections.iter().enumerate() {
        if section.headed {
            number += 1;
            lines.push(format!("{} {}", INSIGHT_HEADER, number));
            lines.push(String::new());
        }
        push_section(&mut lines, section);
        if i != last {
            lines.push(SEPARATOR.to_string());
            lines.push(String::new());
        }
    }

    lines.join("\n").trim().to_string()
}

fn push_section(lines: &mut Vec<String>, section: &RawSection<'_>) {
    if !section.quote.is_empty() {
        lines.extend(section.quote.iter().map(|line| line.to_string()));
        lines.push(String::new());
    }

    if let Some((first, rest)) = section.commentary.split_first() {
        lines.push(format!("{} {}", THOUGHTS_LABEL, first));
        lines.extend(rest.iter().map(|line| line.to_string()));
        lines.push(String::new());
    }
}
