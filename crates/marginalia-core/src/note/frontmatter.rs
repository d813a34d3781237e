use serde::{Deserialize, Serialize};

/// Draft frontmatter (YAML header)
///
/// Every field has a default so that hand-edited or foreign files still load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DraftFrontmatter {
    /// Article the highlights were taken from
    #[serde(default)]
    pub source_url: String,
    /// Creation time as an ISO-8601 local timestamp without offset
    #[serde(default)]
    pub created_at: String,
    /// Tags for categorization
    #[serde(default)]
    pub tags: Vec<String>,
    /// Always true for drafts
    #[serde(default = "default_draft")]
    pub draft: bool,
}

fn default_draft() -> bool {
    true
}

impl DraftFrontmatter {
    /// Create new frontmatter with required fields
    pub fn new(source_url: impl Into<String>, created_at: impl Into<String>) -> Self {
        DraftFrontmatter {
            source_url: source_url.into(),
            created_at: created_at.into(),
            tags: Vec::new(),
            draft: true,
        }
    }

    /// Add tags
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }
}

/// Static-site post frontmatter
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostFrontmatter {
    pub title: String,
    /// RFC3339 timestamp
    pub date: String,
    pub draft: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    pub description: String,
    #[serde(default)]
    pub params: PostParams,
}

/// Custom site parameters nested under `params`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostParams {
    /// Original source URL
    #[serde(default)]
    pub source: String,
}
