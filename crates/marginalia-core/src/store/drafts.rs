//! Draft lifecycle: save, load, list, update, delete

use std::fs;
use std::io::ErrorKind;
use std::time::Instant;

use chrono::{Local, NaiveDateTime};
use tracing::{debug, warn};

use crate::error::{MarginaliaError, Result};
use crate::note::{parse_highlights, render_body, Document, Draft, DraftFrontmatter, DraftSummary};
use crate::request::DraftRequest;

use super::paths::{self, DOCUMENT_EXTENSION};
use super::Store;

impl Store {
    /// Save a new draft stamped with the current local time
    ///
    /// Returns the draft filename. Presence checks are the caller's job: an
    /// empty highlight list is accepted and produces an empty body.
    pub fn save_draft(&self, request: &DraftRequest) -> Result<String> {
        self.save_draft_at(request, Local::now().naive_local())
    }

    /// Save a new draft with an explicit creation time
    #[tracing::instrument(skip(self, request), fields(source_url = %request.source_url))]
    pub fn save_draft_at(&self, request: &DraftRequest, created_at: NaiveDateTime) -> Result<String> {
        let filename = paths::draft_filename(&created_at, &request.source_url);

        let tags = if request.tags.is_empty() {
            self.config().default_tags.clone()
        } else {
            request.tags.clone()
        };

        let frontmatter =
            DraftFrontmatter::new(&request.source_url, paths::format_created_at(&created_at))
                .with_tags(tags);
        let document = Document::new(frontmatter, render_body(&request.highlights));
        let markdown = document.to_markdown()?;

        let dir = self.drafts_dir();
        fs::create_dir_all(&dir)
            .map_err(|e| MarginaliaError::io_operation("create", dir.display(), e))?;

        let path = self.draft_path(&filename)?;
        fs::write(&path, markdown)
            .map_err(|e| MarginaliaError::io_operation("write", path.display(), e))?;

        debug!(filename, highlights = request.highlights.len(), "saved draft");
        Ok(filename)
    }

    /// Load a draft's raw document (header + unparsed body)
    pub fn load_draft_document(&self, filename: &str) -> Result<Document<DraftFrontmatter>> {
        let path = self.draft_path(filename)?;
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(MarginaliaError::draft_not_found(filename))
            }
            Err(e) => return Err(MarginaliaError::io_operation("read", path.display(), e)),
        };
        Document::parse(&content, Some(&path))
    }

    /// Load a draft and parse its highlights
    #[tracing::instrument(skip(self))]
    pub fn load_draft(&self, filename: &str) -> Result<Draft> {
        let document = self.load_draft_document(filename)?;
        let highlights = parse_highlights(&document.body);
        Ok(Draft {
            metadata: document.frontmatter,
            highlights,
            filename: filename.to_string(),
        })
    }

    /// List drafts, newest first
    ///
    /// Only headers are parsed. A missing drafts directory yields an empty list;
    /// files that cannot be read or whose header cannot be parsed are skipped
    /// with a warning.
    pub fn list_drafts(&self) -> Result<Vec<DraftSummary>> {
        let start = Instant::now();
        let dir = self.drafts_dir();
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(MarginaliaError::io_operation("read", dir.display(), e)),
        };

        let mut drafts = Vec::new();
        for entry in entries {
            let path = entry?.path();
            let is_document = path.is_file()
                && path.extension().and_then(|e| e.to_str()) == Some(DOCUMENT_EXTENSION);
            if !is_document {
                continue;
            }
            let Some(filename) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };

            let content = match fs::read_to_string(&path) {
                Ok(content) => content,
                Err(e) => {
                    warn!(filename, error = %e, "skipping unreadable draft");
                    continue;
                }
            };
            match Document::<DraftFrontmatter>::parse(&content, Some(&path)) {
                Ok(document) => drafts.push(DraftSummary::new(filename, document.frontmatter)),
                Err(e) => warn!(filename, error = %e, "skipping unreadable draft"),
            }
        }

        // ISO-8601 timestamps sort lexicographically
        drafts.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.filename.cmp(&b.filename))
        });

        crate::trace_time!(start, "list_drafts", count = drafts.len());
        Ok(drafts)
    }

    /// Replace a draft with new content
    ///
    /// The replacement is saved as a fresh draft (new timestamp, possibly a new
    /// filename); the old file is removed once the new one is written.
    pub fn update_draft(&self, filename: &str, request: &DraftRequest) -> Result<String> {
        let old_path = self.draft_path(filename)?;
        if !old_path.is_file() {
            return Err(MarginaliaError::draft_not_found(filename));
        }

        let new_filename = self.save_draft(request)?;
        if new_filename != filename {
            fs::remove_file(&old_path)
                .map_err(|e| MarginaliaError::io_operation("remove", old_path.display(), e))?;
        }

        debug!(old = filename, new = %new_filename, "updated draft");
        Ok(new_filename)
    }

    /// Delete a draft
    pub fn delete_draft(&self, filename: &str) -> Result<()> {
        let path = self.draft_path(filename)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!(filename, "deleted draft");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(MarginaliaError::draft_not_found(filename))
            }
            Err(e) => Err(MarginaliaError::io_operation("remove", path.display(), e)),
        }
    }
}
