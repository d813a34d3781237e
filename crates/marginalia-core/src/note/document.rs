//! Frontmatter documents: a YAML header between `---` lines, then a markdown body

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{MarginaliaError, Result};

/// A markdown document with a typed frontmatter header
#[derive(Debug, Clone, PartialEq)]
pub struct Document<F> {
    pub frontmatter: F,
    pub body: String,
}

impl<F> Document<F> {
    pub fn new(frontmatter: F, body: impl Into<String>) -> Self {
        Document {
            frontmatter,
            body: body.into(),
        }
    }
}

impl<F: DeserializeOwned + Default> Document<F> {
    /// Parse a document from markdown content
    ///
    /// Content without a complete `---` header is treated as all body with
    /// default frontmatter. A header that is present but not valid YAML for
    /// `F` is an error.
    #[tracing::instrument(skip(content), fields(path = ?path))]
    pub fn parse(content: &str, path: Option<&Path>) -> Result<Self> {
        let Some((yaml, body)) = split_frontmatter(content) else {
            tracing::debug!("no frontmatter header, using defaults");
            return Ok(Document::new(F::default(), content));
        };

        let frontmatter = if yaml.trim().is_empty() {
            F::default()
        } else {
            serde_yaml::from_str(yaml).map_err(|e| MarginaliaError::InvalidFrontmatter {
                path: path.map(Path::to_path_buf).unwrap_or_default(),
                reason: e.to_string(),
            })?
        };

        Ok(Document::new(frontmatter, body))
    }
}

impl<F: Serialize> Document<F> {
    /// Serialize the document to markdown
    pub fn to_markdown(&self) -> Result<String> {
        let yaml = serde_yaml::to_string(&self.frontmatter)?;
        let body = self.body.trim_end();
        if body.is_empty() {
            Ok(format!("---\n{}---\n", yaml))
        } else {
            Ok(format!("---\n{}---\n\n{}\n", yaml, body))
        }
    }
}

/// Split content into (yaml, body) when it opens with a complete header
fn split_frontmatter(content: &str) -> Option<(&str, &str)> {
    let content = content.trim_start();
    let after_first = content.strip_prefix("---")?;

    // The opening delimiter must be alone on its line
    let after_first = after_first
        .strip_prefix("\r\n")
        .or_else(|| after_first.strip_prefix('\n'))?;

    let (yaml, rest) = if let Some(rest) = after_first.strip_prefix("---") {
        ("", rest)
    } else {
        let end_pos = after_first.find("\n---")?;
        (&after_first[..end_pos], &after_first[end_pos + 4..])
    };

    // Skip the remainder of the closing delimiter line
    let body = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        None => "",
    };

    Some((yaml, body.trim_start_matches(['\n', '\r'])))
}
