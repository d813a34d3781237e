//! Flat-file stores for marginalia
//!
//! Two directories under the project root, both keyed by filename:
//! - drafts (default `drafts/`): unpublished highlight notes
//! - posts (default `content/posts/`): published static-site documents
//!
//! There is no locking. Two writers targeting the same filename race and the
//! last write wins.

mod drafts;
pub mod paths;
mod posts;

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Result;

/// Draft and post directories for one project
#[derive(Debug, Clone)]
pub struct Store {
    /// Project root
    root: PathBuf,
    /// Project configuration
    config: Config,
}

impl Store {
    /// Open the store rooted at `root`, reading `marginalia.toml` if present
    #[tracing::instrument(skip(root), fields(root = %root.display()))]
    pub fn open(root: &Path) -> Result<Self> {
        let config = Config::load_or_default(root)?;
        Ok(Self::with_config(root, config))
    }

    /// Build a store from an already loaded configuration
    pub fn with_config(root: &Path, config: Config) -> Self {
        Store {
            root: root.to_path_buf(),
            config,
        }
    }

    /// Get the config
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the drafts directory
    pub fn drafts_dir(&self) -> PathBuf {
        self.root.join(&self.config.drafts_dir)
    }

    /// Get the published posts directory
    pub fn posts_dir(&self) -> PathBuf {
        self.root.join(&self.config.posts_dir)
    }

    /// Path of a draft file, after checking the filename is a plain file name
    pub fn draft_path(&self, filename: &str) -> Result<PathBuf> {
        paths::validate_filename(filename)?;
        Ok(self.drafts_dir().join(filename))
    }

    /// Path of a published post, after checking the filename is a plain file name
    pub fn post_path(&self, filename: &str) -> Result<PathBuf> {
        paths::validate_filename(filename)?;
        Ok(self.posts_dir().join(filename))
    }
}
