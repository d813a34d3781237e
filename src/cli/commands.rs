use clap::Subcommand;

use super::args::{DraftArgs, EditArgs, FilenameArgs, InitArgs, ListArgs, PreviewArgs, PublishArgs};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a default marginalia.toml in the project root
    Init(InitArgs),

    /// Capture highlights from a source into a new draft
    New(DraftArgs),

    /// Replace the contents of an existing draft
    Edit(EditArgs),

    /// List drafts, newest first
    List(ListArgs),

    /// Show a draft's metadata and highlights
    Show(FilenameArgs),

    /// Render the post a draft would publish, without writing it
    Preview(PreviewArgs),

    /// Publish a draft as a post
    Publish(PublishArgs),

    /// Delete a draft
    Delete(FilenameArgs),
}
