//! `marginalia edit` command - replace a draft's contents
//!
//! Fields not given on the command line keep their current values. The draft
//! is saved again with a fresh timestamp, so its filename may change.

use tracing::info;

use crate::cli::{Cli, EditArgs};
use crate::commands::format::{output_by_format_result, print_json};
use crate::commands::input::read_highlights;
use marginalia_core::error::Result;
use marginalia_core::request::DraftRequest;
use marginalia_core::store::Store;

/// Execute the edit command
pub fn execute(cli: &Cli, store: &Store, args: &EditArgs) -> Result<()> {
    let current = store.load_draft(&args.filename)?;

    let source_url = args
        .draft
        .source
        .clone()
        .unwrap_or(current.metadata.source_url);
    let highlights = if args.draft.has_highlights() {
        read_highlights(&args.draft)?
    } else {
        current.highlights
    };
    let tags = if args.draft.tag.is_empty() {
        current.metadata.tags
    } else {
        args.draft.tag.clone()
    };

    let request = DraftRequest::new(source_url, highlights, tags).validate()?;
    let filename = store.update_draft(&args.filename, &request)?;
    info!(from = %args.filename, to = %filename, "draft updated");

    output_by_format_result!(cli.format,
        json => print_json(&serde_json::json!({
            "status": "ok",
            "previous": args.filename,
            "filename": filename,
        })),
        human => {
            println!("{}", filename);
        }
    )
}
