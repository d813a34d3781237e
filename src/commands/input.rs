//! Highlight input from flags or stdin

use std::io::{self, Read};

use crate::cli::DraftArgs;
use marginalia_core::error::{MarginaliaError, Result};
use marginalia_core::note::Highlight;
use marginalia_core::request::pair_highlights;

/// Collect highlights from `--quote`/`--commentary` pairs or `--stdin`
pub fn read_highlights(args: &DraftArgs) -> Result<Vec<Highlight>> {
    if args.stdin {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        parse_highlights_json(&input)
    } else {
        Ok(pair_highlights(&args.quote, &args.commentary))
    }
}

/// Parse a JSON array of `{"quote": ..., "commentary": ...}` objects
pub fn parse_highlights_json(input: &str) -> Result<Vec<Highlight>> {
    serde_json::from_str(input).map_err(|e| {
        MarginaliaError::UsageError(format!(
            "expected a JSON array of {{\"quote\", \"commentary\"}} objects on stdin: {}",
            e
        ))
    })
}
