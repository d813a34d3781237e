//! `marginalia show` command - display a draft
//!
//! Human output is the draft file as stored. JSON output carries the parsed
//! metadata and highlights.

use crate::cli::{Cli, OutputFormat};
use crate::commands::format::print_json;
use marginalia_core::error::Result;
use marginalia_core::store::Store;

/// Execute the show command
pub fn execute(cli: &Cli, store: &Store, filename: &str) -> Result<()> {
    match cli.format {
        OutputFormat::Json => print_json(&store.load_draft(filename)?),
        OutputFormat::Human => {
            let document = store.load_draft_document(filename)?;
            print!("{}", document.to_markdown()?);
            Ok(())
        }
    }
}
