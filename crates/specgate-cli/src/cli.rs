use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "specgate",
    about = "Specgate: adversarial verification of specification documents against their source inputs",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Verify one specification document against an input corpus
    Verify {
        /// Input folder containing source documents (requirements, principles)
        #[arg(long)]
        input: String,

        /// Specification document to verify
        #[arg(long)]
        specification: String,

        /// Report destination file (default: stdout)
        #[arg(long)]
        output: Option<String>,

        /// Output violations as JSON
        #[arg(long)]
        json: bool,
    },
}
