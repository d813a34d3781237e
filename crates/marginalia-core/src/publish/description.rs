//! Short post descriptions taken from the first line of prose

use std::sync::OnceLock;

use regex::Regex;

/// Description used when the body has no prose line
pub const FALLBACK_DESCRIPTION: &str = "Notes and insights from recent learning";

/// Longest description, ellipsis included
pub const MAX_DESCRIPTION_LEN: usize = 160;

const ELLIPSIS: &str = "...";

static LINK: OnceLock<Regex> = OnceLock::new();
static BOLD: OnceLock<Regex> = OnceLock::new();
static ITALIC: OnceLock<Regex> = OnceLock::new();

fn link_re() -> &'static Regex {
    LINK.get_or_init(|| Regex::new(r"\[([^\]]+)\]\([^)]+\)").expect("valid link regex"))
}

fn bold_re() -> &'static Regex {
    BOLD.get_or_init(|| Regex::new(r"\*\*([^*]+)\*\*").expect("valid bold regex"))
}

fn italic_re() -> &'static Regex {
    ITALIC.get_or_init(|| Regex::new(r"\*([^*]+)\*").expect("valid italic regex"))
}

/// Extract a plain-text description from a published body
///
/// Uses the first non-empty line that is not a heading, a blockquote or a bold
/// label. Links are reduced to their text before bold and
/// italic markers are removed.
pub fn extract(body: &str) -> String {
    body.lines()
        .map(str::trim)
        .find(|line| is_prose(line))
        .map(|line| truncate(&strip_markdown(line)))
        .unwrap_or_else(|| FALLBACK_DESCRIPTION.to_string())
}

fn is_prose(line: &str) -> bool {
    !line.is_empty()
        && !line.starts_with('#')
        && !line.starts_with('>')
        && !line.starts_with("**")
}

fn strip_markdown(line: &str) -> String {
    let text = link_re().replace_all(line, "$1");
    let text = bold_re().replace_all(&text, "$1");
    italic_re().replace_all(&text, "$1").into_owned()
}

fn truncate(text: &str) -> String {
    if text.chars().count() <= MAX_DESCRIPTION_LEN {
        return text.to_string();
    }
    let keep = MAX_DESCRIPTION_LEN - ELLIPSIS.len();
    let mut truncated: String = text.chars().take(keep).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}
