//! Table of contents with active-path highlighting.
//!
//! Builds the sidebar tree root → chapters → pages. Chapters and pages are
//! numbered with the same skip-front-matter rule as [`flatten`](crate::flatten),
//! so a page labelled `"2.3"` is the entry with `chapter_index == 2` and
//! `page_index == Some(3)`.

use serde::Serialize;

use crate::error::NavError;
use crate::model::{Chapter, Heading, Page, Section, UnitPath, unit_label};
use crate::validate::validate;

/// Default minimum number of chapter headings worth listing.
///
/// A single heading just repeats the chapter title.
pub const DEFAULT_MIN_CHAPTER_HEADINGS: usize = 2;

/// Options for TOC building.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TocOptions {
    /// Chapter headings are listed only when there are at least this many.
    pub min_chapter_headings: usize,
}

impl Default for TocOptions {
    fn default() -> Self {
        Self {
            min_chapter_headings: DEFAULT_MIN_CHAPTER_HEADINGS,
        }
    }
}

/// Node of the table of contents.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TocNode {
    /// Display title.
    pub title: String,
    /// Link target identity.
    ///
    /// A chapter without a front page still carries its own path here, but
    /// it is not a renderable unit: [`page_context`](crate::page_context) and
    /// [`locate`](crate::locate) reject it.
    pub link: UnitPath,
    /// Display number (`""` for the root, `"2"` for a chapter, `"2.3"` for a page).
    pub label: String,
    /// Node is a chapter on the path to the current unit.
    pub is_active_chapter: bool,
    /// Node is the unit being rendered.
    pub is_active_page: bool,
    /// In-page headings, present only on the node being rendered.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub headings: Vec<Heading>,
    /// Child nodes.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TocNode>,
}

/// Build the table of contents with default options.
///
/// # Errors
///
/// See [`build_toc_with`].
pub fn build_toc(root: &Section, current: &UnitPath) -> Result<TocNode, NavError> {
    build_toc_with(root, current, &TocOptions::default())
}

/// Build the table of contents for the page `current`.
///
/// # Arguments
///
/// * `root` - Root section with chapters and pages in display order
/// * `current` - Identity of the unit being rendered (root, chapter or page)
/// * `options` - Heading display options
///
/// # Errors
///
/// Returns [`NavError::MalformedTree`] if ordering metadata is missing or
/// ambiguous, and [`NavError::UnknownCurrentUnit`] if `current` is not in the tree.
pub fn build_toc_with(
    root: &Section,
    current: &UnitPath,
    options: &TocOptions,
) -> Result<TocNode, NavError> {
    validate(root)?;
    build_toc_validated(root, current, options)
}

/// Build the TOC for a tree that already passed validation.
pub(crate) fn build_toc_validated(
    root: &Section,
    current: &UnitPath,
    options: &TocOptions,
) -> Result<TocNode, NavError> {
    if !root.contains(current) {
        return Err(NavError::unknown(current));
    }

    let children: Vec<TocNode> = root
        .chapters
        .iter()
        .zip(1..)
        .map(|(chapter, number)| chapter_node(chapter, number, current, options))
        .collect();

    tracing::debug!(
        current = %current,
        chapters = children.len(),
        "Built table of contents"
    );

    Ok(TocNode {
        title: root.title.clone(),
        link: root.path.clone(),
        label: String::new(),
        is_active_chapter: false,
        is_active_page: root.path == *current,
        headings: Vec::new(),
        children,
    })
}

fn chapter_node(
    chapter: &Chapter,
    number: usize,
    current: &UnitPath,
    options: &TocOptions,
) -> TocNode {
    let is_rendered = chapter.is_rendered_as(current);
    let headings = chapter.headings();
    let headings = if is_rendered && headings.len() >= options.min_chapter_headings {
        headings.to_vec()
    } else {
        Vec::new()
    };

    let children = chapter
        .navigable_pages()
        .zip(1..)
        .map(|(page, page_number)| page_node(page, number, page_number, current))
        .collect();

    TocNode {
        title: chapter.title.clone(),
        link: chapter.path.clone(),
        label: unit_label(number, None),
        is_active_chapter: chapter.contains(current),
        is_active_page: is_rendered,
        headings,
        children,
    }
}

fn page_node(
    page: &Page,
    chapter_number: usize,
    page_number: usize,
    current: &UnitPath,
) -> TocNode {
    let is_active = page.path == *current;

    TocNode {
        title: page.title.clone(),
        link: page.path.clone(),
        label: unit_label(chapter_number, Some(page_number)),
        is_active_chapter: false,
        is_active_page: is_active,
        headings: if is_active {
            page.headings.clone()
        } else {
            Vec::new()
        },
        children: Vec::new(),
    }
}
