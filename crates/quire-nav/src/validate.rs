//! Tree validation shared by the flattener and the TOC builder.
//!
//! Both refuse to number a tree whose ordering is missing or ambiguous, so
//! the checks live in one place and run before any output is produced.

use std::collections::HashSet;

use crate::error::{MalformedReason, NavError};
use crate::model::{Section, UnitPath};

/// Check ordering weights, front-matter uniqueness and path uniqueness.
///
/// # Errors
///
/// Returns [`NavError::MalformedTree`] naming the first offending node.
pub(crate) fn validate(root: &Section) -> Result<(), NavError> {
    let mut seen: HashSet<&UnitPath> = HashSet::new();
    seen.insert(&root.path);

    check_sibling_order(
        root.chapters
            .iter()
            .map(|chapter| (&chapter.path, chapter.weight)),
    )?;

    for chapter in &root.chapters {
        if !seen.insert(&chapter.path) {
            return Err(NavError::malformed(&chapter.path, MalformedReason::DuplicatePath));
        }

        if chapter.pages.iter().filter(|page| page.front_matter).count() > 1 {
            return Err(NavError::malformed(
                &chapter.path,
                MalformedReason::MultipleFrontMatter,
            ));
        }

        check_sibling_order(chapter.pages.iter().map(|page| (&page.path, page.weight)))?;

        for page in &chapter.pages {
            if !seen.insert(&page.path) {
                return Err(NavError::malformed(&page.path, MalformedReason::DuplicatePath));
            }
        }
    }

    Ok(())
}

/// Require every sibling to be weighted, with strictly increasing weights.
fn check_sibling_order<'a>(
    siblings: impl IntoIterator<Item = (&'a UnitPath, Option<i64>)>,
) -> Result<(), NavError> {
    let mut previous: Option<i64> = None;

    for (path, weight) in siblings {
        let Some(weight) = weight else {
            return Err(NavError::malformed(path, MalformedReason::MissingWeight));
        };

        if let Some(previous) = previous {
            if weight == previous {
                return Err(NavError::malformed(
                    path,
                    MalformedReason::DuplicateWeight(weight),
                ));
            }
            if weight < previous {
                return Err(NavError::malformed(
                    path,
                    MalformedReason::OutOfOrder { weight, previous },
                ));
            }
        }
        previous = Some(weight);
    }

    Ok(())
}
