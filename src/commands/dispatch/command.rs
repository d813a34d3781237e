//! Command trait and context for dispatching commands

use std::path::PathBuf;
use std::time::Instant;

use crate::cli::Cli;
use marginalia_core::error::Result;
use marginalia_core::store::Store;

use super::trace_command;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub root: &'a PathBuf,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, root: &'a PathBuf, start: Instant) -> Self {
        Self { cli, root, start }
    }

    /// Open the store at the resolved project root
    pub fn open_store(&self) -> Result<Store> {
        let store = Store::open(self.root)?;
        trace_command!(self.cli, self.start, "open_store");
        Ok(store)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("marginalia {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Capture article highlights as drafts and publish them as posts.");
        println!();
        println!("Run `marginalia --help` for usage information.");
        Ok(())
    }
}
