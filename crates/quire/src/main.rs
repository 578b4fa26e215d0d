//! Quire CLI - book navigation inspector.
//!
//! Provides commands for:
//! - `list`: Print the numbered reading sequence
//! - `nav`: Print previous/next links for a page
//! - `toc`: Print the table of contents for a page
//! - `check`: Validate the book manifest

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, ListArgs, NavArgs, TocArgs};
use output::Output;

/// Quire - navigation index for multi-chapter books.
#[derive(Parser)]
#[command(name = "quire", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the numbered reading sequence.
    List(ListArgs),
    /// Print previous/next links and position for a page.
    Nav(NavArgs),
    /// Print the table of contents as seen from a page.
    Toc(TocArgs),
    /// Validate the book manifest.
    Check(CheckArgs),
}

impl Commands {
    fn verbose(&self) -> bool {
        match self {
            Self::List(args) => args.book.verbose,
            Self::Nav(args) => args.book.verbose,
            Self::Toc(args) => args.book.verbose,
            Self::Check(args) => args.book.verbose,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.command.verbose() {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::List(args) => args.execute(),
        Commands::Nav(args) => args.execute(),
        Commands::Toc(args) => args.execute(),
        Commands::Check(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
