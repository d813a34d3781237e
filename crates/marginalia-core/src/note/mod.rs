//! Draft and post data structures for marginalia
//!
//! Drafts and published posts are markdown files with a YAML frontmatter
//! header. A draft body is a sequence of `## Highlight N` sections, each with a
//! blockquote and optional free-text commentary.

pub mod document;
pub mod frontmatter;
pub mod parse;
pub mod render;

use serde::{Deserialize, Serialize};

pub use document::Document;
pub use frontmatter::{DraftFrontmatter, PostFrontmatter, PostParams};
pub use parse::parse_highlights;
pub use render::render_body;

/// A single quote/commentary pair
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    /// Quoted text from the source, without blockquote markers
    #[serde(default)]
    pub quote: String,
    /// Free-text commentary, possibly multi-line
    #[serde(default)]
    pub commentary: String,
}

impl Highlight {
    pub fn new(quote: impl Into<String>, commentary: impl Into<String>) -> Self {
        Highlight {
            quote: quote.into(),
            commentary: commentary.into(),
        }
    }

    /// True when both quote and commentary are blank
    pub fn is_empty(&self) -> bool {
        self.quote.trim().is_empty() && self.commentary.trim().is_empty()
    }
}

/// A loaded draft: header metadata plus the highlights parsed from its body
#[derive(Debug, Clone, Serialize)]
pub struct Draft {
    pub metadata: DraftFrontmatter,
    pub highlights: Vec<Highlight>,
    pub filename: String,
}

/// Header-only view of a draft, used for listings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DraftSummary {
    pub filename: String,
    pub source_url: String,
    pub created_at: String,
    pub tags: Vec<String>,
}

impl DraftSummary {
    pub fn new(filename: impl Into<String>, frontmatter: DraftFrontmatter) -> Self {
        DraftSummary {
            filename: filename.into(),
            source_url: frontmatter.source_url,
            created_at: frontmatter.created_at,
            tags: frontmatter.tags,
        }
    }

    /// Format tags as comma-separated values, using "-" for no tags
    pub fn format_tags(&self) -> String {
        if self.tags.is_empty() {
            "-".to_string()
        } else {
            self.tags.join(",")
        }
    }
}
