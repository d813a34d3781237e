use std::fs;

use crate::error::{MarginaliaError, Result};
use crate::note::{Document, PostFrontmatter};

use super::Store;

impl Store {
    /// Write a published post, replacing any post with the same filename
    ///
    /// The document is serialized completely before the file is touched.
    pub fn write_post(&self, filename: &str, post: &Document<PostFrontmatter>) -> Result<()> {
        let markdown = post.to_markdown()?;
        let path = self.post_path(filename)?;

        let dir = self.posts_dir();
        fs::create_dir_all(&dir)
            .map_err(|e| MarginaliaError::io_operation("create", dir.display(), e))?;

        fs::write(&path, markdown)
            .map_err(|e| MarginaliaError::io_operation("write", path.display(), e))?;
        tracing::debug!(filename, path = %path.display(), "wrote post");
        Ok(())
    }

    /// Check whether a post with this filename has been published
    pub fn post_exists(&self, filename: &str) -> bool {
        self.post_path(filename)
            .map(|path| path.is_file())
            .unwrap_or(false)
    }
}
