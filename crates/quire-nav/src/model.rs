//! Book tree supplied by the site toolchain, and the units derived from it.
//!
//! A book is a root [`Section`] holding ordered [`Chapter`]s, each holding
//! ordered [`Page`]s. A page flagged as front matter is the landing content of
//! its chapter: it never becomes a navigation stop of its own, and its
//! presence turns the chapter itself into a stop.
//!
//! All types are plain data with serde support so the tree can be handed over
//! as a manifest and results can be passed to templates as JSON.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identity of a node in the book tree.
///
/// Compared by equality only; titles are not unique and never used for lookup.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitPath(String);

impl UnitPath {
    /// Create a path from any string-like value.
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Borrow the path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UnitPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UnitPath {
    fn from(path: &str) -> Self {
        Self(path.to_owned())
    }
}

impl From<String> for UnitPath {
    fn from(path: String) -> Self {
        Self(path)
    }
}

impl AsRef<str> for UnitPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// In-page heading with its anchor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// Heading text.
    pub title: String,
    /// Anchor ID for linking (without `#`).
    pub anchor: String,
}

impl Heading {
    /// Create a heading.
    pub fn new(title: impl Into<String>, anchor: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            anchor: anchor.into(),
        }
    }
}

/// Leaf document belonging to exactly one chapter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Display title.
    pub title: String,
    /// Page identity.
    pub path: UnitPath,
    /// Ordering key among sibling pages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<i64>,
    /// Page is the landing content of its chapter.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub front_matter: bool,
    /// In-page heading outline, in document order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub headings: Vec<Heading>,
}

impl Page {
    /// Create an unweighted regular page.
    pub fn new(title: impl Into<String>, path: impl Into<UnitPath>) -> Self {
        Self {
            title: title.into(),
            path: path.into(),
            weight: None,
            front_matter: false,
            headings: Vec::new(),
        }
    }

    /// Set the ordering weight.
    pub fn with_weight(mut self, weight: i64) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Flag the page as its chapter's front matter.
    pub fn front_matter(mut self) -> Self {
        self.front_matter = true;
        self
    }

    /// Append a heading.
    pub fn with_heading(mut self, title: &str, anchor: &str) -> Self {
        self.headings.push(Heading::new(title, anchor));
        self
    }
}

/// Chapter section owning an ordered list of pages.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    /// Display title.
    pub title: String,
    /// Chapter identity.
    pub path: UnitPath,
    /// Ordering key among sibling chapters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<i64>,
    /// Pages in display order.
    #[serde(default)]
    pub pages: Vec<Page>,
}

impl Chapter {
    /// Create an unweighted chapter without pages.
    pub fn new(title: impl Into<String>, path: impl Into<UnitPath>) -> Self {
        Self {
            title: title.into(),
            path: path.into(),
            weight: None,
            pages: Vec::new(),
        }
    }

    /// Set the ordering weight.
    pub fn with_weight(mut self, weight: i64) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Append a page.
    pub fn with_page(mut self, page: Page) -> Self {
        self.pages.push(page);
        self
    }

    /// Front-matter page acting as the chapter's landing content.
    ///
    /// A chapter with a landing page is itself a navigation stop.
    pub fn landing_page(&self) -> Option<&Page> {
        self.pages.iter().find(|page| page.front_matter)
    }

    /// Pages that are navigation stops of their own, in display order.
    pub fn navigable_pages(&self) -> impl Iterator<Item = &Page> {
        self.pages.iter().filter(|page| !page.front_matter)
    }

    /// Headings of the chapter's landing content (empty without a landing page).
    pub fn headings(&self) -> &[Heading] {
        self.landing_page().map_or(&[], |page| page.headings.as_slice())
    }

    /// Whether rendering `path` means rendering this chapter itself.
    pub(crate) fn is_rendered_as(&self, path: &UnitPath) -> bool {
        self.path == *path || self.landing_page().is_some_and(|page| page.path == *path)
    }

    /// Whether `path` is this chapter or one of its pages.
    pub(crate) fn contains(&self, path: &UnitPath) -> bool {
        self.path == *path || self.pages.iter().any(|page| page.path == *path)
    }
}

/// Root section of a book.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Book title.
    pub title: String,
    /// Identity of the overview (landing) page.
    #[serde(default)]
    pub path: UnitPath,
    /// Chapters in display order.
    #[serde(default)]
    pub chapters: Vec<Chapter>,
}

impl Section {
    /// Create an empty root section.
    pub fn new(title: impl Into<String>, path: impl Into<UnitPath>) -> Self {
        Self {
            title: title.into(),
            path: path.into(),
            chapters: Vec::new(),
        }
    }

    /// Append a chapter.
    pub fn with_chapter(mut self, chapter: Chapter) -> Self {
        self.chapters.push(chapter);
        self
    }

    /// Whether `path` names the root, a chapter, or a page of this book.
    pub fn contains(&self, path: &UnitPath) -> bool {
        self.path == *path || self.chapters.iter().any(|chapter| chapter.contains(path))
    }

    /// Map a front-matter page path to its chapter's path.
    ///
    /// Any other path is returned unchanged.
    pub(crate) fn canonical_path<'a>(&'a self, path: &'a UnitPath) -> &'a UnitPath {
        self.chapters
            .iter()
            .find(|chapter| chapter.landing_page().is_some_and(|page| page.path == *path))
            .map_or(path, |chapter| &chapter.path)
    }
}

/// Atomic step of the flattened sequence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum NavigableUnit {
    /// Chapter whose landing content is its front-matter page.
    Chapter {
        /// Chapter identity.
        path: UnitPath,
        /// Chapter title.
        title: String,
    },
    /// Regular page.
    Page {
        /// Page identity.
        path: UnitPath,
        /// Page title.
        title: String,
    },
}

impl NavigableUnit {
    pub(crate) fn chapter(chapter: &Chapter) -> Self {
        Self::Chapter {
            path: chapter.path.clone(),
            title: chapter.title.clone(),
        }
    }

    pub(crate) fn page(page: &Page) -> Self {
        Self::Page {
            path: page.path.clone(),
            title: page.title.clone(),
        }
    }

    /// Unit identity.
    pub fn path(&self) -> &UnitPath {
        match self {
            Self::Chapter { path, .. } | Self::Page { path, .. } => path,
        }
    }

    /// Unit title.
    pub fn title(&self) -> &str {
        match self {
            Self::Chapter { title, .. } | Self::Page { title, .. } => title,
        }
    }

    /// True for the chapter-as-landing-page variant.
    pub fn is_chapter(&self) -> bool {
        matches!(self, Self::Chapter { .. })
    }
}

/// One unit of the flattened sequence with its position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlattenedEntry {
    /// The navigable unit.
    pub unit: NavigableUnit,
    /// 1-based global position.
    pub sequence: usize,
    /// 1-based position of the owning chapter among all chapters.
    pub chapter_index: usize,
    /// 1-based position among the chapter's navigable pages (`None` for chapter units).
    pub page_index: Option<usize>,
}

impl FlattenedEntry {
    /// Identity of the entry's unit.
    pub fn path(&self) -> &UnitPath {
        self.unit.path()
    }

    /// Display number, e.g. `"2"` for a chapter or `"2.3"` for a page.
    pub fn label(&self) -> String {
        unit_label(self.chapter_index, self.page_index)
    }
}

/// Display number shared by flattened entries and TOC nodes.
pub(crate) fn unit_label(chapter_index: usize, page_index: Option<usize>) -> String {
    match page_index {
        Some(page_index) => format!("{chapter_index}.{page_index}"),
        None => chapter_index.to_string(),
    }
}
