//! Flattening the book tree into one numbered reading sequence.
//!
//! Chapters are walked in order. A chapter with a landing page contributes a
//! chapter entry first; then its non-front-matter pages follow, numbered from
//! 1 within the chapter. Sequence numbers come from enumerating the emitted
//! entries, so they are contiguous from 1 regardless of what was filtered out.

use crate::error::NavError;
use crate::model::{FlattenedEntry, NavigableUnit, Section};
use crate::validate::validate;

/// Flatten the book into its reading sequence.
///
/// # Arguments
///
/// * `root` - Root section with chapters and pages in display order
///
/// # Errors
///
/// Returns [`NavError::MalformedTree`] if ordering metadata is missing or
/// ambiguous anywhere in the tree. No partial sequence is produced.
pub fn flatten(root: &Section) -> Result<Vec<FlattenedEntry>, NavError> {
    validate(root)?;
    Ok(flatten_validated(root))
}

/// Flatten a tree that already passed validation.
pub(crate) fn flatten_validated(root: &Section) -> Vec<FlattenedEntry> {
    let entries: Vec<FlattenedEntry> = root
        .chapters
        .iter()
        .zip(1..)
        .flat_map(|(chapter, chapter_index)| {
            let landing = chapter
                .landing_page()
                .map(|_| (NavigableUnit::chapter(chapter), chapter_index, None));
            let pages = chapter
                .navigable_pages()
                .zip(1..)
                .map(move |(page, page_index)| {
                    (NavigableUnit::page(page), chapter_index, Some(page_index))
                });
            landing.into_iter().chain(pages)
        })
        .zip(1..)
        .map(
            |((unit, chapter_index, page_index), sequence)| FlattenedEntry {
                unit,
                sequence,
                chapter_index,
                page_index,
            },
        )
        .collect();

    tracing::debug!(
        chapters = root.chapters.len(),
        entries = entries.len(),
        "Flattened book tree"
    );

    entries
}
