//! `marginalia publish` command - publish a draft as a post
//!
//! The draft is removed only after the post was written, and kept entirely
//! with `--keep-draft`.

use tracing::{info, warn};

use crate::cli::{Cli, PublishArgs};
use crate::commands::format::{output_by_format_result, print_json};
use marginalia_core::error::Result;
use marginalia_core::publish;
use marginalia_core::store::Store;

/// Execute the publish command
pub fn execute(cli: &Cli, store: &Store, args: &PublishArgs) -> Result<()> {
    let overwritten = store.post_exists(&args.filename);
    if overwritten {
        warn!(filename = %args.filename, "overwriting existing post");
    }

    let filename = publish::publish(store, &args.filename, args.title.as_deref())?;
    let path = store.post_path(&filename)?;

    let draft_removed = !args.keep_draft;
    if draft_removed {
        store.delete_draft(&filename)?;
    }
    info!(filename = %filename, draft_removed, "draft published");

    output_by_format_result!(cli.format,
        json => print_json(&serde_json::json!({
            "status": "ok",
            "filename": filename,
            "path": path.display().to_string(),
            "overwritten": overwritten,
            "draft_removed": draft_removed,
        })),
        human => {
            if cli.quiet {
                println!("{}", path.display());
            } else {
                println!("Published {}", path.display());
            }
        }
    )
}
