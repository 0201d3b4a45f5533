mod check;
mod completions;
mod generate;
mod init;
mod preview;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use init::InitCommand;
use preview::PreviewCommand;

/// Extension trait for exiting on configuration errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for faasgen_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "faasgen")]
#[command(version)]
#[command(about = "Scaffold OpenFaaS Node.js function projects")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Init(cmd) => cmd.run(),
            Commands::Generate(cmd) => cmd.run(),
            Commands::Preview(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new function project
    Init(InitCommand),

    /// Generate project files from faasgen.toml
    Generate(GenerateCommand),

    /// Print generated files without writing to disk
    Preview(PreviewCommand),

    /// Validate faasgen.toml without generating files
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
