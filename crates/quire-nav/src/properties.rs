//! Property tests over generated books.

use proptest::prelude::*;

use crate::model::{Chapter, Page, Section, UnitPath};
use crate::{build_toc, flatten, locate};

/// Chapter shape: number of regular pages and optional front-page position.
fn chapter_shape() -> impl Strategy<Value = (usize, Option<usize>)> {
    (0usize..5, prop::option::of(0usize..5))
}

fn book_from(shapes: &[(usize, Option<usize>)]) -> Section {
    shapes
        .iter()
        .zip(1i64..)
        .fold(Section::new("Book", ""), |book, (&(pages, front), ch)| {
            let mut chapter =
                Chapter::new(format!("Chapter {ch}"), format!("c{ch}")).with_weight(ch);
            let front = front.map(|position| position.min(pages));
            let mut weight = 0i64;
            for idx in 0..=pages {
                if front == Some(idx) {
                    weight += 1;
                    chapter = chapter.with_page(
                        Page::new("Front", format!("c{ch}/_index"))
                            .with_weight(weight)
                            .front_matter(),
                    );
                }
                if idx < pages {
                    weight += 1;
                    chapter = chapter.with_page(
                        Page::new(format!("Page {idx}"), format!("c{ch}/p{idx}"))
                            .with_weight(weight),
                    );
                }
            }
            book.with_chapter(chapter)
        })
}

proptest! {
    #[test]
    fn test_sequence_is_contiguous(shapes in prop::collection::vec(chapter_shape(), 0..8)) {
        let book = book_from(&shapes);
        let entries = flatten(&book).unwrap();

        let sequence: Vec<usize> = entries.iter().map(|entry| entry.sequence).collect();
        let expected: Vec<usize> = (1..=entries.len()).collect();
        prop_assert_eq!(sequence, expected);
    }

    #[test]
    fn test_front_pages_never_flattened(shapes in prop::collection::vec(chapter_shape(), 0..8)) {
        let book = book_from(&shapes);
        let entries = flatten(&book).unwrap();

        prop_assert!(entries.iter().all(|entry| !entry.path().as_str().ends_with("/_index")));
    }

    #[test]
    fn test_boundaries_have_no_outer_links(shapes in prop::collection::vec(chapter_shape(), 1..8)) {
        let book = book_from(&shapes);
        let entries = flatten(&book).unwrap();
        prop_assume!(!entries.is_empty());

        let first = locate(&book, &entries, entries[0].path()).unwrap();
        let last = locate(&book, &entries, entries[entries.len() - 1].path()).unwrap();

        prop_assert!(first.previous.is_none());
        prop_assert_eq!(first.current, 1);
        prop_assert!(last.next.is_none());
        prop_assert_eq!(last.current, entries.len());
    }

    #[test]
    fn test_locate_repeats_for_every_entry(shapes in prop::collection::vec(chapter_shape(), 0..8)) {
        let book = book_from(&shapes);
        let entries = flatten(&book).unwrap();

        for entry in &entries {
            let first = locate(&book, &entries, entry.path()).unwrap();
            let second = locate(&book, &entries, entry.path()).unwrap();
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn test_toc_labels_agree_with_entries(shapes in prop::collection::vec(chapter_shape(), 0..8)) {
        let book = book_from(&shapes);
        let entries = flatten(&book).unwrap();
        let toc = build_toc(&book, &UnitPath::default()).unwrap();

        for entry in &entries {
            let chapter = &toc.children[entry.chapter_index - 1];
            let node = match entry.page_index {
                Some(page_index) => &chapter.children[page_index - 1],
                None => chapter,
            };
            prop_assert_eq!(&node.link, entry.path());
            prop_assert_eq!(node.label.clone(), entry.label());
        }
    }
}
