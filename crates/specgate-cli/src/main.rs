//! Specgate CLI: the `specgate` command.

mod cli;
mod commands;
mod support;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Verify {
            input,
            specification,
            output,
            json,
        } => commands::verify::run(input, specification, output, json),
    }
}
