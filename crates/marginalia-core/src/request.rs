//! Draft requests: raw capture input and the presence checks applied to it

use serde::{Deserialize, Serialize};

use crate::bail_validation;
use crate::error::Result;
use crate::note::Highlight;

/// Message shown when no source URL was given
pub const MISSING_SOURCE_URL: &str = "Source URL is required";

/// Message shown when every highlight was blank
pub const MISSING_HIGHLIGHTS: &str = "Add at least one highlight or commentary";

/// Input for creating or replacing a draft
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DraftRequest {
    pub source_url: String,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl DraftRequest {
    pub fn new(
        source_url: impl Into<String>,
        highlights: Vec<Highlight>,
        tags: Vec<String>,
    ) -> Self {
        DraftRequest {
            source_url: source_url.into(),
            highlights,
            tags,
        }
    }

    /// Trim every field, drop blank highlights and tags, then check presence
    ///
    /// A highlight is kept when either its quote or its commentary is
    /// non-blank. Fails with a validation error when the source URL is blank or
    /// no highlight survives.
    pub fn validate(self) -> Result<Self> {
        let source_url = self.source_url.trim().to_string();
        if source_url.is_empty() {
            bail_validation!(MISSING_SOURCE_URL);
        }

        let highlights: Vec<Highlight> = self
            .highlights
            .into_iter()
            .map(|h| Highlight::new(h.quote.trim(), h.commentary.trim()))
            .filter(|h| !h.is_empty())
            .collect();
        if highlights.is_empty() {
            bail_validation!(MISSING_HIGHLIGHTS);
        }

        let tags = self
            .tags
            .into_iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();

        Ok(DraftRequest {
            source_url,
            highlights,
            tags,
        })
    }
}

/// Pair quotes and commentaries by position, like numbered form fields
///
/// The longer list decides the number of pairs; missing entries are blank.
pub fn pair_highlights(quotes: &[String], commentaries: &[String]) -> Vec<Highlight> {
    let count = quotes.len().max(commentaries.len());
    (0..count)
        .map(|i| {
            Highlight::new(
                quotes.get(i).map(String::as_str).unwrap_or_default(),
                commentaries.get(i).map(String::as_str).unwrap_or_default(),
            )
        })
        .collect()
}
