//! Per-render navigation context.

use serde::Serialize;

use crate::error::NavError;
use crate::flatten::flatten_validated;
use crate::model::{Section, UnitPath};
use crate::navigator::{NavigationResult, locate};
use crate::toc::{TocNode, TocOptions, build_toc_validated};
use crate::validate::validate;

/// Everything a page template needs for paging controls and the sidebar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageContext {
    /// Previous/next links and position.
    pub navigation: NavigationResult,
    /// Sidebar table of contents.
    pub toc: TocNode,
}

/// Compute navigation and TOC for one render of `current`.
///
/// Validates the tree once, then flattens, locates and builds the TOC.
///
/// `current` must be the root, a page or a chapter with a front page. A
/// chapter without a front page appears in the TOC but is not a unit of the
/// reading sequence, so it has no context of its own.
///
/// # Errors
///
/// Returns [`NavError::MalformedTree`] for an invalid tree and
/// [`NavError::UnknownCurrentUnit`] if `current` is not a unit of the book.
pub fn page_context(
    root: &Section,
    current: &UnitPath,
    options: &TocOptions,
) -> Result<PageContext, NavError> {
    validate(root)?;
    let entries = flatten_validated(root);
    let navigation = locate(root, &entries, current)?;
    let toc = build_toc_validated(root, current, options)?;

    Ok(PageContext { navigation, toc })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::two_chapter_book;
    use crate::model::{Chapter, Page};
    use crate::toc::build_toc;

    #[test]
    fn test_page_context_combines_navigation_and_toc() {
        let context =
            page_context(&two_chapter_book(), &"a/two".into(), &TocOptions::default()).unwrap();

        assert_eq!(context.navigation.current, 3);
        assert_eq!(context.navigation.total, 4);
        assert!(context.toc.children[0].children[1].is_active_page);
    }

    #[test]
    fn test_page_context_unknown_unit_fails() {
        let result = page_context(&two_chapter_book(), &"nope".into(), &TocOptions::default());

        assert!(matches!(result, Err(NavError::UnknownCurrentUnit { .. })));
    }

    #[test]
    fn test_page_context_rejects_header_only_chapter_link() {
        let book = Section::new("Book", "").with_chapter(
            Chapter::new("Parts", "parts")
                .with_weight(1)
                .with_page(Page::new("Gear", "parts/gear").with_weight(1)),
        );

        let toc = build_toc(&book, &"parts/gear".into()).unwrap();
        assert_eq!(toc.children[0].link.as_str(), "parts");

        let result = page_context(&book, &"parts".into(), &TocOptions::default());
        assert!(matches!(result, Err(NavError::UnknownCurrentUnit { .. })));
        assert!(page_context(&book, &"parts/gear".into(), &TocOptions::default()).is_ok());
    }

    #[test]
    fn test_page_context_serializes_both_parts() {
        let context =
            page_context(&two_chapter_book(), &"".into(), &TocOptions::default()).unwrap();

        let json = serde_json::to_value(&context).unwrap();

        assert_eq!(json["navigation"]["next"], "a");
        assert_eq!(json["toc"]["title"], "Book");
    }
}
