//! CLI error types.

use quire_book::ManifestError;
use quire_config::ConfigError;
use quire_nav::NavError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Manifest(#[from] ManifestError),

    #[error("{0}")]
    Nav(#[from] NavError),

    #[error("{0}")]
    Json(#[from] serde_json::Error),
}
