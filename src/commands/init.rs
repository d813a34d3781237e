//! `marginalia init` command - write a default configuration
//!
//! Creates `marginalia.toml` plus the draft and post directories it names.
//! An existing configuration is left alone unless `--force` is given.

use std::fs;
use std::path::Path;

use crate::cli::{Cli, InitArgs};
use crate::commands::format::{output_by_format_result, print_json};
use marginalia_core::bail_usage;
use marginalia_core::config::{Config, CONFIG_FILE};
use marginalia_core::error::{MarginaliaError, Result};

/// Execute the init command
pub fn execute(cli: &Cli, root: &Path, args: &InitArgs) -> Result<()> {
    let path = root.join(CONFIG_FILE);
    if path.exists() && !args.force {
        bail_usage!(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        ));
    }

    let config = Config::default();
    for dir in [&config.drafts_dir, &config.posts_dir] {
        let dir = root.join(dir);
        fs::create_dir_all(&dir)
            .map_err(|e| MarginaliaError::io_operation("create directory", dir.display(), e))?;
    }
    config.save(&path)?;

    output_by_format_result!(cli.format,
        json => print_json(&serde_json::json!({
            "status": "ok",
            "config": path.display().to_string(),
            "drafts_dir": config.drafts_dir,
            "posts_dir": config.posts_dir,
        })),
        human => {
            if !cli.quiet {
                println!("Initialized marginalia at {}", root.display());
            }
        }
    )
}
