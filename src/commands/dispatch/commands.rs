//! Command implementations for all marginalia commands

use crate::cli::Commands;
use crate::commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use marginalia_core::error::Result;

use super::trace_command;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let cli = ctx.cli;

        let result = match self {
            Commands::Init(args) => commands::init::execute(cli, ctx.root, args),
            Commands::New(args) => commands::new::execute(cli, &ctx.open_store()?, args),
            Commands::Edit(args) => commands::edit::execute(cli, &ctx.open_store()?, args),
            Commands::List(args) => commands::list::execute(cli, &ctx.open_store()?, args),
            Commands::Show(args) => {
                commands::show::execute(cli, &ctx.open_store()?, &args.filename)
            }
            Commands::Preview(args) => commands::preview::execute(cli, &ctx.open_store()?, args),
            Commands::Publish(args) => commands::publish::execute(cli, &ctx.open_store()?, args),
            Commands::Delete(args) => {
                commands::delete::execute(cli, &ctx.open_store()?, &args.filename)
            }
        };

        trace_command!(cli, ctx.start, "execute_command");
        result
    }
}
