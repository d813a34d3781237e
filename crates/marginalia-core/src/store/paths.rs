use chrono::NaiveDateTime;

use crate::error::{MarginaliaError, Result};
use crate::slug;

/// Extension of draft and post files
pub const DOCUMENT_EXTENSION: &str = "md";

/// Format of the `created_at` header field
pub const CREATED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Generate a draft filename from its creation time and source URL
///
/// Format: `<YYYY-MM-DD>-<slug(source_url)>.md`
/// Example: `2024-03-09-my-post-title.md`
pub fn draft_filename(created_at: &NaiveDateTime, source_url: &str) -> String {
    format!(
        "{}-{}.{}",
        created_at.format("%Y-%m-%d"),
        slug::slug(source_url),
        DOCUMENT_EXTENSION
    )
}

/// Format a creation time for the `created_at` header
pub fn format_created_at(created_at: &NaiveDateTime) -> String {
    created_at.format(CREATED_AT_FORMAT).to_string()
}

/// Reject filenames that could escape the store directory
pub fn validate_filename(filename: &str) -> Result<()> {
    let invalid = filename.trim().is_empty()
        || filename.contains(['/', '\\'])
        || filename == "."
        || filename == "..";

    if invalid {
        return Err(MarginaliaError::InvalidFilename {
            filename: filename.to_string(),
        });
    }
    Ok(())
}
