//! CLI argument definitions for elmkit.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "elmkit",
    version,
    about = "Manage the tools an Elm project depends on",
    long_about = "elmkit scaffolds an elm-tooling.json describing which Elm tool versions \
                  a project depends on and where its program entrypoints live, for a \
                  separate installer to consume."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create an elm-tooling.json for the current project
    Init,
}

/// Parse command-line arguments.
pub fn parse() -> Cli {
    Cli::parse()
}
