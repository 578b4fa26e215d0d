//! `quire nav` command implementation.

use clap::Args;
use quire_nav::{NavigationResult, UnitPath, flatten, locate};

use super::BookArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the nav command.
#[derive(Args)]
pub(crate) struct NavArgs {
    #[command(flatten)]
    pub book: BookArgs,

    /// Identity of the page being rendered (the book path for the overview).
    path: String,

    /// Print the result as JSON.
    #[arg(long)]
    json: bool,
}

impl NavArgs {
    /// Execute the nav command.
    ///
    /// # Errors
    ///
    /// Returns an error if the book cannot be loaded, is malformed, or does
    /// not contain `path`.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let (_, book) = self.book.load()?;
        let entries = flatten(&book)?;
        let result = locate(&book, &entries, &UnitPath::new(self.path))?;

        if self.json {
            output.data(&serde_json::to_string_pretty(&result)?);
        } else {
            output.data(&format_paging(&result));
        }
        Ok(())
    }
}

/// Format paging controls as `← previous | N / total | next →`.
fn format_paging(result: &NavigationResult) -> String {
    let previous = result
        .previous
        .as_ref()
        .map_or_else(|| "-".to_owned(), |path| format!("← {path}"));
    let next = result
        .next
        .as_ref()
        .map_or_else(|| "-".to_owned(), |path| format!("{path} →"));
    format!("{previous} | {} | {next}", result.position_label())
}
