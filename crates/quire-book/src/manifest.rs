//! Manifest parsing and conversion to a [`Section`] tree.
//!
//! The manifest lists chapters and pages in any order; siblings are sorted by
//! weight so the tree handed to the engine is in display order. Unweighted
//! nodes sort last and are reported by the engine as malformed.

use std::collections::HashMap;
use std::path::Path;

use quire_nav::{Chapter, Heading, Page, Section, UnitPath};
use serde::Deserialize;

use crate::error::ManifestError;

/// Manifest serialization format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ManifestFormat {
    /// YAML (`.yaml`, `.yml`).
    Yaml,
    /// JSON (`.json`).
    Json,
}

impl ManifestFormat {
    /// Detect the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
struct RawBook {
    title: String,
    #[serde(default)]
    path: String,
    #[serde(default)]
    chapters: Vec<RawChapter>,
}

#[derive(Deserialize)]
struct RawChapter {
    title: String,
    path: String,
    weight: Option<i64>,
    #[serde(default)]
    pages: Vec<RawPage>,
}

#[derive(Deserialize)]
struct RawPage {
    title: String,
    path: String,
    weight: Option<i64>,
    #[serde(default, alias = "chapter_front_matter")]
    front_matter: bool,
    #[serde(default)]
    headings: Vec<RawHeading>,
}

/// Heading given either as plain text or with an explicit anchor.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawHeading {
    Title(String),
    Full { title: String, anchor: Option<String> },
}

impl From<RawPage> for Page {
    fn from(raw: RawPage) -> Self {
        let mut anchors = AnchorIds::default();
        let headings = raw
            .headings
            .into_iter()
            .map(|heading| match heading {
                RawHeading::Title(title) | RawHeading::Full { title, anchor: None } => {
                    let anchor = anchors.generate(&title);
                    Heading { title, anchor }
                }
                RawHeading::Full {
                    title,
                    anchor: Some(anchor),
                } => {
                    anchors.reserve(&anchor);
                    Heading { title, anchor }
                }
            })
            .collect();

        Page {
            title: raw.title,
            path: UnitPath::new(raw.path),
            weight: raw.weight,
            front_matter: raw.front_matter,
            headings,
        }
    }
}

impl From<RawChapter> for Chapter {
    fn from(raw: RawChapter) -> Self {
        let mut pages: Vec<Page> = raw.pages.into_iter().map(Page::from).collect();
        sort_by_weight(&mut pages, |page| page.weight);
        Chapter {
            title: raw.title,
            path: UnitPath::new(raw.path),
            weight: raw.weight,
            pages,
        }
    }
}

impl From<RawBook> for Section {
    fn from(raw: RawBook) -> Self {
        let mut chapters: Vec<Chapter> = raw.chapters.into_iter().map(Chapter::from).collect();
        sort_by_weight(&mut chapters, |chapter| chapter.weight);
        Section {
            title: raw.title,
            path: UnitPath::new(raw.path),
            chapters,
        }
    }
}

/// Stable sort by weight with unweighted items last.
fn sort_by_weight<T>(items: &mut [T], weight: impl Fn(&T) -> Option<i64>) {
    items.sort_by_key(|item| weight(item).map_or((1, 0), |w| (0, w)));
}

/// Anchor used when a heading has no alphanumeric characters.
const FALLBACK_ANCHOR: &str = "section";

/// Per-page anchor generator.
///
/// Repeated slugs get a numeric suffix: `setup`, `setup-1`, `setup-2`.
#[derive(Default)]
struct AnchorIds {
    counts: HashMap<String, usize>,
}

impl AnchorIds {
    /// Generate a unique anchor for heading text.
    fn generate(&mut self, text: &str) -> String {
        let mut base = slugify(text);
        if base.is_empty() {
            FALLBACK_ANCHOR.clone_into(&mut base);
        }
        let count = self.counts.entry(base.clone()).or_default();
        let id = match *count {
            0 => base,
            n => format!("{base}-{n}"),
        };
        *count += 1;
        id
    }

    /// Record an explicit anchor so generated ones do not reuse it.
    fn reserve(&mut self, anchor: &str) {
        *self.counts.entry(anchor.to_owned()).or_default() += 1;
    }
}

/// Convert heading text to a URL-safe slug.
///
/// Lowercases, joins words with single dashes and drops other punctuation.
fn slugify(text: &str) -> String {
    let mut result = String::new();
    let mut last_was_dash = true;

    for c in text.trim().chars() {
        if c.is_alphanumeric() {
            result.extend(c.to_lowercase());
            last_was_dash = false;
        } else if !last_was_dash && (c.is_whitespace() || c == '-' || c == '_') {
            result.push('-');
            last_was_dash = true;
        }
    }

    if result.ends_with('-') {
        result.pop();
    }

    result
}

/// Parse a manifest from a string.
///
/// # Errors
///
/// Returns [`ManifestError::Yaml`] or [`ManifestError::Json`] if the content
/// is not a valid manifest.
pub fn parse_manifest(content: &str, format: ManifestFormat) -> Result<Section, ManifestError> {
    let raw: RawBook = match format {
        ManifestFormat::Yaml => serde_yaml::from_str(content)?,
        ManifestFormat::Json => serde_json::from_str(content)?,
    };
    Ok(Section::from(raw))
}

/// Load a manifest file, detecting the format from its extension.
///
/// # Errors
///
/// Returns [`ManifestError::NotFound`] if the file does not exist,
/// [`ManifestError::UnsupportedFormat`] for unknown extensions, and parse
/// errors for invalid content.
pub fn load_manifest(path: &Path) -> Result<Section, ManifestError> {
    if !path.exists() {
        return Err(ManifestError::NotFound(path.to_path_buf()));
    }
    let format = ManifestFormat::from_path(path)
        .ok_or_else(|| ManifestError::UnsupportedFormat(path.to_path_buf()))?;
    let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let book = parse_manifest(&content, format)?;
    tracing::info!(
        path = %path.display(),
        chapters = book.chapters.len(),
        "Loaded book manifest"
    );
    Ok(book)
}
