mod doc;
mod sample;
mod symbols;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "autodoc",
    version,
    about = "Generates markdown docs for the exported symbols of Go sources",
    long_about = "Autodoc parses Go sources with tree-sitter, collects exported functions, \
                  constants and variables, and renders the doc comment above each exported \
                  function as markdown. Without a subcommand it documents a built-in sample."
)]
pub struct Cli {
    /// Also print log events to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the public symbols of a Go file as JSON
    Symbols {
        /// Path to the Go source file
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },
    /// Generate one markdown document per package
    #[command(
        long_about = "Scans a Go file or directory, groups files by package clause, and writes \
                            <OUT>/<package>/doc.md for every package found."
    )]
    Doc {
        /// Go source file or project directory
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Output root directory. Defaults to the current directory.
        #[arg(short, long, value_name = "DIR")]
        out: Option<PathBuf>,

        /// Print the documents instead of writing files
        #[arg(long)]
        stdout: bool,
    },
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let _guard = autodoc_core::logging::init_logging("cli", cli.verbose);

    match cli.command {
        None => {
            sample::run();
            Ok(())
        }
        Some(Commands::Symbols { path }) => symbols::run(path),
        Some(Commands::Doc { path, out, stdout }) => doc::run(path, out, stdout),
    }
}
