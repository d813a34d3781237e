//! `marginalia delete` command - remove a draft

use crate::cli::Cli;
use crate::commands::format::{output_by_format_result, print_json};
use marginalia_core::error::Result;
use marginalia_core::store::Store;

/// Execute the delete command
pub fn execute(cli: &Cli, store: &Store, filename: &str) -> Result<()> {
    store.delete_draft(filename)?;

    output_by_format_result!(cli.format,
        json => print_json(&serde_json::json!({
            "status": "ok",
            "filename": filename,
            "deleted": true,
        })),
        human => {
            if !cli.quiet {
                println!("Deleted {}", filename);
            }
        }
    )
}
