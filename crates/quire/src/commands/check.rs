//! `quire check` command implementation.

use clap::Args;
use quire_nav::flatten;

use super::BookArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    pub book: BookArgs,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if the book cannot be loaded or is malformed.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let (config, book) = self.book.load()?;
        let entries = flatten(&book)?;

        tracing::info!(
            manifest = %config.book_resolved.manifest.display(),
            units = entries.len(),
            "Manifest validated"
        );
        output.success(&format!(
            "Book is valid: {} chapters, {} navigable units",
            book.chapters.len(),
            entries.len()
        ));
        Ok(())
    }
}
