//! `marginalia preview` command - render a post without writing it

use crate::cli::{Cli, PreviewArgs};
use crate::commands::format::{output_by_format_result, print_json};
use marginalia_core::error::Result;
use marginalia_core::publish::render_post;
use marginalia_core::store::Store;

/// Execute the preview command
pub fn execute(cli: &Cli, store: &Store, args: &PreviewArgs) -> Result<()> {
    let post = render_post(store, &args.filename, args.title.as_deref())?;

    output_by_format_result!(cli.format,
        json => print_json(&serde_json::json!({
            "filename": args.filename,
            "frontmatter": post.frontmatter,
            "body": post.body,
        })),
        human => {
            print!("{}", post.to_markdown()?);
        }
    )
}
