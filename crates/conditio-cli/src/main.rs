//! Conditio CLI: the `conditio` command.

mod cli;
mod commands;
mod support;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    support::init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Eval {
            file,
            config,
            no_context,
            fail_on_disabled,
            json,
        } => commands::eval::run(commands::eval::Args {
            file,
            config,
            no_context,
            fail_on_disabled,
            json,
        }),

        Commands::Synthesize {
            file,
            family,
            config,
            json,
        } => commands::synthesize::run(file, family.map(Into::into), config, json),

        Commands::Engines { json } => commands::engines::run(json),
    }
}
