//! `marginalia new` command - capture highlights into a draft

use tracing::info;

use crate::cli::{Cli, DraftArgs};
use crate::commands::format::{output_by_format_result, print_json};
use crate::commands::input::read_highlights;
use marginalia_core::error::Result;
use marginalia_core::request::DraftRequest;
use marginalia_core::store::Store;

/// Execute the new command
pub fn execute(cli: &Cli, store: &Store, args: &DraftArgs) -> Result<()> {
    let request = DraftRequest::new(
        args.source.clone().unwrap_or_default(),
        read_highlights(args)?,
        args.tag.clone(),
    )
    .validate()?;

    let filename = store.save_draft(&request)?;
    let path = store.draft_path(&filename)?;
    info!(filename = %filename, highlights = request.highlights.len(), "draft saved");

    output_by_format_result!(cli.format,
        json => print_json(&serde_json::json!({
            "status": "ok",
            "filename": filename,
            "path": path.display().to_string(),
            "source_url": request.source_url,
            "highlights": request.highlights.len(),
            "tags": request.tags,
        })),
        human => {
            println!("{}", filename);
        }
    )
}
