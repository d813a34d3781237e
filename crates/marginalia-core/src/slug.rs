//! Slug and title generation from source URLs
//!
//! Both functions pick the same "segment" of a URL: the last path segment when
//! the path is non-empty, otherwise the host without a leading `www.`. Neither
//! function fails; empty results fall back to fixed strings.

use std::sync::OnceLock;

use regex::Regex;
use url::Url;

/// Slug used when nothing usable survives cleanup
pub const FALLBACK_SLUG: &str = "note";

/// Title used when nothing usable survives cleanup
pub const FALLBACK_TITLE: &str = "Learning Notes";

/// Maximum slug length in characters
pub const MAX_SLUG_LEN: usize = 50;

static SLUG_STRIP: OnceLock<Regex> = OnceLock::new();
static SLUG_COLLAPSE: OnceLock<Regex> = OnceLock::new();
static TITLE_STRIP: OnceLock<Regex> = OnceLock::new();

fn slug_strip() -> &'static Regex {
    SLUG_STRIP.get_or_init(|| Regex::new(r"[^\w\s.-]").expect("valid slug strip regex"))
}

fn slug_collapse() -> &'static Regex {
    SLUG_COLLAPSE.get_or_init(|| Regex::new(r"[-\s]+").expect("valid slug collapse regex"))
}

fn title_strip() -> &'static Regex {
    TITLE_STRIP.get_or_init(|| Regex::new(r"[^\w\s]").expect("valid title strip regex"))
}

/// Split a URL into (host, path). Anything that is not an absolute URL is a bare path.
fn split_url(url: &str) -> (String, String) {
    match Url::parse(url) {
        Ok(parsed) => (
            parsed.host_str().unwrap_or_default().to_string(),
            parsed.path().to_string(),
        ),
        Err(_) => (String::new(), url.to_string()),
    }
}

/// The part of the URL that names the article
fn source_segment(url: &str) -> String {
    let (host, path) = split_url(url.trim());
    let path = path.trim_matches('/');

    if path.is_empty() {
        return host.strip_prefix("www.").unwrap_or(&host).to_string();
    }

    let last = path.rsplit('/').next().unwrap_or_default();
    urlencoding::decode(last)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| last.to_string())
}

/// Generate a URL-safe slug from a source URL
///
/// Keeps word characters, dots and hyphens; whitespace and hyphen runs collapse
/// to a single hyphen. Case is preserved.
pub fn slug(url: &str) -> String {
    let segment = source_segment(url);
    let cleaned = slug_strip().replace_all(&segment, "");
    let collapsed = slug_collapse().replace_all(&cleaned, "-");
    let truncated: String = collapsed.chars().take(MAX_SLUG_LEN).collect();

    if truncated.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        truncated
    }
}

/// Generate a human-readable title from a source URL
pub fn title(url: &str) -> String {
    let segment = source_segment(url).replace(['-', '_'], " ");
    let cleaned = title_strip().replace_all(&segment, "");
    let title = cleaned
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ");

    if title.is_empty() {
        FALLBACK_TITLE.to_string()
    } else {
        title
    }
}

/// Uppercase the first character, lowercase the rest
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
