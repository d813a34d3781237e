//! `marginalia list` command - list drafts, newest first

use crate::cli::{Cli, ListArgs};
use crate::commands::format::{output_by_format_result, print_json};
use marginalia_core::error::Result;
use marginalia_core::store::Store;

/// Execute the list command
pub fn execute(cli: &Cli, store: &Store, args: &ListArgs) -> Result<()> {
    let mut drafts = store.list_drafts()?;

    if let Some(tag) = args.tag.as_deref() {
        drafts.retain(|d| d.tags.iter().any(|t| t == tag));
    }

    output_by_format_result!(cli.format,
        json => print_json(&drafts),
        human => {
            if drafts.is_empty() {
                if !cli.quiet {
                    println!("No drafts found");
                }
            } else {
                for draft in &drafts {
                    let source = if draft.source_url.is_empty() {
                        "-"
                    } else {
                        draft.source_url.as_str()
                    };
                    println!("{} {} [{}]", draft.filename, source, draft.format_tags());
                }
            }
        }
    )
}
