//! Navigation index for multi-chapter books.
//!
//! This crate provides:
//! - [`flatten`]: the numbered reading sequence of chapters and pages
//! - [`locate`]: previous/next links and "N / total" for the rendered unit
//! - [`build_toc`]: the sidebar table of contents with the active path marked
//! - [`page_context`]: all of the above for one render
//!
//! Every function is pure over the supplied [`Section`] tree; nothing is
//! cached between calls, so concurrent renders only need their own tree view.
//!
//! # Quick Start
//!
//! ```
//! use quire_nav::{Chapter, Page, Section, build_toc, flatten, locate};
//!
//! let book = Section::new("Handbook", "")
//!     .with_chapter(
//!         Chapter::new("Basics", "basics")
//!             .with_weight(1)
//!             .with_page(Page::new("Basics", "basics/_index").with_weight(0).front_matter())
//!             .with_page(Page::new("Install", "basics/install").with_weight(1)),
//!     );
//!
//! let entries = flatten(&book)?;
//! let nav = locate(&book, &entries, &"basics/install".into())?;
//! assert_eq!(nav.position_label(), "2 / 2");
//! assert_eq!(nav.previous.as_ref().map(|p| p.as_str()), Some("basics"));
//!
//! let toc = build_toc(&book, &"basics/install".into())?;
//! assert_eq!(toc.children[0].children[0].label, "1.1");
//! # Ok::<(), quire_nav::NavError>(())
//! ```

mod context;
mod error;
mod flatten;
mod model;
mod navigator;
mod toc;
mod validate;

#[cfg(test)]
mod properties;

pub use context::{PageContext, page_context};
pub use error::{MalformedReason, NavError};
pub use flatten::flatten;
pub use model::{Chapter, FlattenedEntry, Heading, NavigableUnit, Page, Section, UnitPath};
pub use navigator::{NavigationResult, locate};
pub use toc::{DEFAULT_MIN_CHAPTER_HEADINGS, TocNode, TocOptions, build_toc, build_toc_with};

#[cfg(test)]
mod tests {
    static_assertions::assert_impl_all!(super::Section: Send, Sync);
    static_assertions::assert_impl_all!(super::FlattenedEntry: Send, Sync);
    static_assertions::assert_impl_all!(super::TocNode: Send, Sync);
    static_assertions::assert_impl_all!(super::NavError: Send, Sync);
    static_assertions::assert_impl_all!(super::NavigableUnit: Send, Sync);
    static_assertions::assert_impl_all!(super::NavigationResult: Send, Sync);
    static_assertions::assert_impl_all!(super::PageContext: Send, Sync);
    static_assertions::assert_impl_all!(super::TocOptions: Send, Sync);
    static_assertions::assert_impl_all!(super::UnitPath: Send, Sync);
    static_assertions::assert_impl_all!(super::Heading: Send, Sync);
}
