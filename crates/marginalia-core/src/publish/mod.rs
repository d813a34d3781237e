//! Publishing drafts as static-site posts
//!
//! A post is built entirely in memory from the draft (title, date, tags,
//! description, transformed body) and only then written to the posts
//! directory under the draft's filename. Publishing again overwrites the
//! earlier post; concurrent publishes of one draft are not coordinated and the
//! last write wins. Publishing never removes the draft; that is up to the
//! caller once the write has succeeded.

pub mod description;
pub mod transform;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use tracing::debug;

use crate::error::Result;
use crate::note::{Document, DraftFrontmatter, PostFrontmatter, PostParams};
use crate::slug;
use crate::store::Store;

pub use description::extract as extract_description;
pub use transform::transform;

/// Offset appended to every published date
///
/// This is a fixed literal. The draft's wall-clock time is not converted.
pub const PUBLISH_OFFSET: &str = "-08:00";

/// Build the publishable document for a loaded draft
///
/// `now` is used when the draft's `created_at` cannot be parsed.
pub fn build_post(
    draft: &Document<DraftFrontmatter>,
    title_override: Option<&str>,
    now: NaiveDateTime,
) -> Document<PostFrontmatter> {
    let source_url = draft.frontmatter.source_url.as_str();

    let title = match title_override.map(str::trim) {
        Some(title) if !title.is_empty() => title.to_string(),
        _ => slug::title(source_url),
    };

    let body = with_source_footer(transform(&draft.body), source_url);
    let description = extract_description(&body);

    let frontmatter = PostFrontmatter {
        title,
        date: publish_date(&draft.frontmatter.created_at, now),
        draft: false,
        tags: draft.frontmatter.tags.clone(),
        description,
        params: PostParams {
            source: source_url.to_string(),
        },
    };

    Document::new(frontmatter, body)
}

/// Load a draft and build its post without writing anything
pub fn render_post(
    store: &Store,
    filename: &str,
    title_override: Option<&str>,
) -> Result<Document<PostFrontmatter>> {
    let draft = store.load_draft_document(filename)?;
    Ok(build_post(&draft, title_override, Local::now().naive_local()))
}

/// Publish a draft to the posts directory
///
/// Returns the filename of the written post, which matches the draft's.
#[tracing::instrument(skip(store))]
pub fn publish(store: &Store, filename: &str, title_override: Option<&str>) -> Result<String> {
    let post = render_post(store, filename, title_override)?;
    store.write_post(filename, &post)?;
    debug!(title = %post.frontmatter.title, "published");
    Ok(filename.to_string())
}

/// Append the source link footer when a source URL is known
fn with_source_footer(mut body: String, source_url: &str) -> String {
    if source_url.is_empty() {
        return body;
    }
    if !body.is_empty() {
        body.push_str("\n\n");
    }
    body.push_str(&format!(
        "---\n\n**Source:** [{url}]({url})",
        url = source_url
    ));
    body
}

/// Format the post date as RFC3339 with the fixed offset
fn publish_date(created_at: &str, now: NaiveDateTime) -> String {
    let when = parse_created_at(created_at).unwrap_or(now);
    format!("{}{}", when.format("%Y-%m-%dT%H:%M:%S"), PUBLISH_OFFSET)
}

/// Parse an ISO-8601 timestamp, keeping its wall-clock time
fn parse_created_at(created_at: &str) -> Option<NaiveDateTime> {
    let created_at = created_at.trim();

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(created_at, format) {
            return Some(parsed);
        }
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(created_at) {
        return Some(parsed.naive_local());
    }

    NaiveDate::parse_from_str(created_at, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}
