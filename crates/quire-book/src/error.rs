//! Manifest error types.

use std::path::PathBuf;

/// Error type for manifest loading.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    /// Manifest file does not exist.
    #[error("Manifest not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error while reading the manifest.
    #[error("I/O error reading {}: {source}", path.display())]
    Io {
        /// Manifest path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// Invalid YAML manifest.
    #[error("Invalid YAML manifest: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// Invalid JSON manifest.
    #[error("Invalid JSON manifest: {0}")]
    Json(#[from] serde_json::Error),
    /// File extension is neither YAML nor JSON.
    #[error("Unsupported manifest format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
}
