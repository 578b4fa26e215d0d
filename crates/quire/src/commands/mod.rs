//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod list;
pub(crate) mod nav;
pub(crate) mod toc;

use std::path::PathBuf;

use clap::Args;
use quire_book::load_manifest;
use quire_config::{CliSettings, Config};
use quire_nav::Section;

use crate::error::CliError;

pub(crate) use check::CheckArgs;
pub(crate) use list::ListArgs;
pub(crate) use nav::NavArgs;
pub(crate) use toc::TocArgs;

/// Arguments shared by every command for locating the book.
#[derive(Args)]
pub(crate) struct BookArgs {
    /// Path to configuration file (default: auto-discover quire.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Book manifest, YAML or JSON (overrides config).
    #[arg(short, long, env = "QUIRE_MANIFEST")]
    manifest: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl BookArgs {
    /// Load configuration and the book tree it points to.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or the manifest cannot be loaded.
    pub(crate) fn load(&self) -> Result<(Config, Section), CliError> {
        self.load_with(CliSettings::default())
    }

    /// Load like [`BookArgs::load`], applying command-specific overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or the manifest cannot be loaded.
    pub(crate) fn load_with(&self, overrides: CliSettings) -> Result<(Config, Section), CliError> {
        let cli_settings = CliSettings {
            manifest: self.manifest.clone(),
            ..overrides
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let book = load_manifest(&config.book_resolved.manifest)?;
        Ok((config, book))
    }
}
