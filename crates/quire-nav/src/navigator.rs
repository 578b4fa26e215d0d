//! Locating the rendered unit in the reading sequence.
//!
//! Produces the previous/next links and the "N / total" indicator for paging
//! controls. Boundaries yield `None` links, which are normal results.

use serde::{Deserialize, Serialize};

use crate::error::NavError;
use crate::model::{FlattenedEntry, Section, UnitPath};

/// Position of the rendered unit and its neighbors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationResult {
    /// Identity of the preceding unit, `None` at the first unit.
    pub previous: Option<UnitPath>,
    /// Identity of the following unit, `None` at the last unit.
    pub next: Option<UnitPath>,
    /// 1-based position of the current unit, 0 on the overview page.
    pub current: usize,
    /// Number of units in the sequence.
    pub total: usize,
}

impl NavigationResult {
    /// Position indicator such as `"3 / 4"`.
    pub fn position_label(&self) -> String {
        format!("{} / {}", self.current, self.total)
    }

    /// True when the overview page (root) is being rendered.
    pub fn is_overview(&self) -> bool {
        self.current == 0
    }
}

/// Locate `current` in the flattened sequence.
///
/// The root identity is the overview page: it sits before the first entry.
/// A chapter's front-matter page resolves to the chapter's own entry.
///
/// # Arguments
///
/// * `root` - Root section the entries were flattened from
/// * `entries` - Output of [`flatten`](crate::flatten) for `root`
/// * `current` - Identity of the unit being rendered
///
/// # Errors
///
/// Returns [`NavError::UnknownCurrentUnit`] if `current` is neither the root
/// nor the identity of an entry.
pub fn locate(
    root: &Section,
    entries: &[FlattenedEntry],
    current: &UnitPath,
) -> Result<NavigationResult, NavError> {
    let total = entries.len();

    if *current == root.path {
        return Ok(NavigationResult {
            previous: None,
            next: entries.first().map(|entry| entry.path().clone()),
            current: 0,
            total,
        });
    }

    let target = root.canonical_path(current);
    let Some(idx) = entries.iter().position(|entry| entry.path() == target) else {
        return Err(NavError::unknown(current));
    };

    let previous = idx
        .checked_sub(1)
        .and_then(|i| entries.get(i))
        .map(|entry| entry.path().clone());
    let next = entries.get(idx + 1).map(|entry| entry.path().clone());

    Ok(NavigationResult {
        previous,
        next,
        current: entries[idx].sequence,
        total,
    })
}
