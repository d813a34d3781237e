//! Project configuration for marginalia
//!
//! Configuration lives in an optional `marginalia.toml` at the project root.
//! Every field has a default, so a missing file means "use the defaults".

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MarginaliaError, Result};

/// Configuration filename
pub const CONFIG_FILE: &str = "marginalia.toml";

/// Default draft directory, relative to the project root
pub const DEFAULT_DRAFTS_DIR: &str = "drafts";

/// Default published posts directory, relative to the project root
pub const DEFAULT_POSTS_DIR: &str = "content/posts";

/// Project configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding drafts
    #[serde(default = "default_drafts_dir")]
    pub drafts_dir: String,

    /// Directory published posts are written to
    #[serde(default = "default_posts_dir")]
    pub posts_dir: String,

    /// Tags applied to new drafts when none are given
    #[serde(default)]
    pub default_tags: Vec<String>,
}

fn default_drafts_dir() -> String {
    DEFAULT_DRAFTS_DIR.to_string()
}

fn default_posts_dir() -> String {
    DEFAULT_POSTS_DIR.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            drafts_dir: default_drafts_dir(),
            posts_dir: default_posts_dir(),
            default_tags: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load `marginalia.toml` from the project root, or defaults if it is absent
    pub fn load_or_default(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE);
        if path.exists() {
            tracing::debug!(path = %path.display(), "loading config");
            Self::load(&path)
        } else {
            Ok(Config::default())
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| MarginaliaError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }
}
