//! `quire list` command implementation.

use clap::Args;
use quire_nav::{FlattenedEntry, flatten};

use super::BookArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the list command.
#[derive(Args)]
pub(crate) struct ListArgs {
    #[command(flatten)]
    pub book: BookArgs,

    /// Print the sequence as JSON.
    #[arg(long)]
    json: bool,
}

impl ListArgs {
    /// Execute the list command.
    ///
    /// # Errors
    ///
    /// Returns an error if the book cannot be loaded or is malformed.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let (_, book) = self.book.load()?;
        let entries = flatten(&book)?;

        if self.json {
            output.data(&serde_json::to_string_pretty(&entries)?);
            return Ok(());
        }

        for entry in &entries {
            output.data(&format_entry(entry));
        }
        Ok(())
    }
}

/// Format one row: sequence, label, path, title.
fn format_entry(entry: &FlattenedEntry) -> String {
    format!(
        "{:>4}  {:<7} {}  {}",
        entry.sequence,
        entry.label(),
        entry.path(),
        entry.unit.title()
    )
}
