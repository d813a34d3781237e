use clap::Args;

/// Source, highlights and tags for a draft
#[derive(Args, Debug, Clone, Default)]
pub struct DraftArgs {
    /// URL of the article the highlights come from
    #[arg(long, short)]
    pub source: Option<String>,

    /// Quoted text (repeatable, paired with --commentary by position)
    #[arg(long, action = clap::ArgAction::Append)]
    pub quote: Vec<String>,

    /// Commentary on a quote (repeatable, paired with --quote by position)
    #[arg(long, short, action = clap::ArgAction::Append)]
    pub commentary: Vec<String>,

    /// Tags (can be specified multiple times)
    #[arg(long, short, action = clap::ArgAction::Append)]
    pub tag: Vec<String>,

    /// Read highlights from stdin as a JSON array of {quote, commentary}
    #[arg(long, conflicts_with_all = ["quote", "commentary"])]
    pub stdin: bool,
}

impl DraftArgs {
    /// True when highlights were given on the command line or stdin
    pub fn has_highlights(&self) -> bool {
        self.stdin || !self.quote.is_empty() || !self.commentary.is_empty()
    }
}

#[derive(Args, Debug, Clone)]
pub struct EditArgs {
    /// Draft filename (as shown by `list`)
    pub filename: String,

    #[command(flatten)]
    pub draft: DraftArgs,
}

#[derive(Args, Debug, Clone)]
pub struct FilenameArgs {
    /// Draft filename (as shown by `list`)
    pub filename: String,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// Only show drafts with this tag
    #[arg(long, short)]
    pub tag: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct PreviewArgs {
    /// Draft filename (as shown by `list`)
    pub filename: String,

    /// Post title (defaults to one derived from the source URL)
    #[arg(long)]
    pub title: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct PublishArgs {
    /// Draft filename (as shown by `list`)
    pub filename: String,

    /// Post title (defaults to one derived from the source URL)
    #[arg(long)]
    pub title: Option<String>,

    /// Keep the draft after publishing
    #[arg(long)]
    pub keep_draft: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct InitArgs {
    /// Overwrite an existing marginalia.toml
    #[arg(long, short)]
    pub force: bool,
}
