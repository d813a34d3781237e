//! Shared output helpers for commands

use serde::Serialize;

use marginalia_core::error::Result;

pub use crate::output_by_format_result;

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
