//! Configuration management for Quire.
//!
//! Parses `quire.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ```toml
//! [book]
//! manifest = "book.yaml"
//!
//! [toc]
//! min_chapter_headings = 2
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

use quire_nav::{DEFAULT_MIN_CHAPTER_HEADINGS, TocOptions};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override book manifest path.
    pub manifest: Option<PathBuf>,
    /// Override chapter heading threshold.
    pub min_chapter_headings: Option<usize>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "quire.toml";

/// Default manifest filename, relative to the config directory.
const DEFAULT_MANIFEST: &str = "book.yaml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Book configuration (paths are relative strings from TOML).
    #[serde(default)]
    book: BookConfigRaw,
    /// Table of contents configuration.
    pub toc: TocConfig,

    /// Resolved book configuration (set after loading).
    #[serde(skip)]
    pub book_resolved: BookConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw book configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct BookConfigRaw {
    manifest: Option<String>,
}

/// Resolved book configuration with absolute paths.
#[derive(Debug, Default)]
pub struct BookConfig {
    /// Book manifest file (YAML or JSON).
    pub manifest: PathBuf,
}

/// Table of contents configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct TocConfig {
    /// Chapter headings are shown only when there are at least this many.
    pub min_chapter_headings: usize,
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            min_chapter_headings: DEFAULT_MIN_CHAPTER_HEADINGS,
        }
    }
}

impl TocConfig {
    /// Options for the TOC builder.
    #[must_use]
    pub fn options(&self) -> TocOptions {
        TocOptions {
            min_chapter_headings: self.min_chapter_headings,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `quire.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(manifest) = &settings.manifest {
            self.book_resolved.manifest.clone_from(manifest);
        }
        if let Some(min_chapter_headings) = settings.min_chapter_headings {
            self.toc.min_chapter_headings = min_chapter_headings;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            book: BookConfigRaw::default(),
            toc: TocConfig::default(),
            book_resolved: BookConfig {
                manifest: base.join(DEFAULT_MANIFEST),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.book_resolved.manifest.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "book.manifest cannot be empty".to_owned(),
            ));
        }
        if self.toc.min_chapter_headings == 0 {
            return Err(ConfigError::Validation(
                "toc.min_chapter_headings must be greater than 0".to_owned(),
            ));
        }
        Ok(())
    }

    /// Resolve relative paths against the config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let manifest = match self.book.manifest.as_deref() {
            Some("") => PathBuf::new(),
            Some(path) => config_dir.join(path),
            None => config_dir.join(DEFAULT_MANIFEST),
        };
        self.book_resolved = BookConfig { manifest };
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/test"));
        assert_eq!(
            config.book_resolved.manifest,
            PathBuf::from("/test/book.yaml")
        );
        assert_eq!(config.toc.min_chapter_headings, 2);
        assert!(config.config_path.is_none());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.toc.min_chapter_headings, 2);
        assert!(config.book.manifest.is_none());
    }

    #[test]
    fn test_parse_toc_config() {
        let toml = r"
[toc]
min_chapter_headings = 4
";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.toc.min_chapter_headings, 4);
        assert_eq!(config.toc.options().min_chapter_headings, 4);
    }

    #[test]
    fn test_resolve_paths() {
        let toml = r#"
[book]
manifest = "content/book.json"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));
        assert_eq!(
            config.book_resolved.manifest,
            PathBuf::from("/project/content/book.json")
        );
    }

    #[test]
    fn test_resolve_paths_default_manifest() {
        let mut config: Config = toml::from_str("").unwrap();
        config.resolve_paths(Path::new("/project"));
        assert_eq!(
            config.book_resolved.manifest,
            PathBuf::from("/project/book.yaml")
        );
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[book]\nmanifest = \"book.yml\"\n").unwrap();

        let config = Config::load(Some(path.as_path()), None).unwrap();

        assert_eq!(config.book_resolved.manifest, dir.path().join("book.yml"));
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let result = Config::load(Some(path.as_path()), None);

        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[toc\n").unwrap();

        let result = Config::load(Some(path.as_path()), None);

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_apply_cli_settings_manifest() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let settings = CliSettings {
            manifest: Some(PathBuf::from("/other/book.json")),
            ..Default::default()
        };
        config.apply_cli_settings(&settings);
        assert_eq!(
            config.book_resolved.manifest,
            PathBuf::from("/other/book.json")
        );
    }

    #[test]
    fn test_apply_cli_settings_min_chapter_headings() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let settings = CliSettings {
            min_chapter_headings: Some(1),
            ..Default::default()
        };
        config.apply_cli_settings(&settings);
        assert_eq!(config.toc.min_chapter_headings, 1);
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.apply_cli_settings(&CliSettings::default());
        assert_eq!(
            config.book_resolved.manifest,
            PathBuf::from("/test/book.yaml")
        );
        assert_eq!(config.toc.min_chapter_headings, 2);
    }

    #[test]
    fn test_validate_default_config_passes() {
        let config = Config::default_with_base(Path::new("/test"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_min_chapter_headings_zero() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.toc.min_chapter_headings = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("toc.min_chapter_headings"));
    }

    #[test]
    fn test_validate_empty_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[book]\nmanifest = \"\"\n").unwrap();

        let result = Config::load(Some(path.as_path()), None);

        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_load_with_cli_settings_validates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "").unwrap();
        let settings = CliSettings {
            min_chapter_headings: Some(0),
            ..Default::default()
        };

        let result = Config::load(Some(path.as_path()), Some(&settings));

        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }
}
