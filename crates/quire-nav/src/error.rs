//! Navigation error types.

use crate::model::UnitPath;

/// Error produced by flattening, locating or TOC building.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavError {
    /// Ordering or identity metadata of the tree is missing or ambiguous.
    #[error("Malformed book tree at '{path}': {reason}")]
    MalformedTree {
        /// Path of the offending node.
        path: UnitPath,
        /// What is wrong with it.
        reason: MalformedReason,
    },
    /// The unit being rendered is neither the root nor part of the tree.
    #[error("Current unit '{path}' is not part of the book tree")]
    UnknownCurrentUnit {
        /// Identity that was requested.
        path: UnitPath,
    },
}

/// Reason a tree was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MalformedReason {
    /// Node has no ordering weight.
    #[error("missing ordering weight")]
    MissingWeight,
    /// Node shares its weight with the preceding sibling.
    #[error("weight {0} is shared with a sibling")]
    DuplicateWeight(i64),
    /// Node is listed after a sibling with a higher weight.
    #[error("weight {weight} is listed after sibling weight {previous}")]
    OutOfOrder {
        /// Weight of the node.
        weight: i64,
        /// Weight of the sibling listed before it.
        previous: i64,
    },
    /// Chapter has more than one front-matter page.
    #[error("chapter has more than one front-matter page")]
    MultipleFrontMatter,
    /// Path is already used by another node.
    #[error("path is used by more than one node")]
    DuplicatePath,
}

impl NavError {
    pub(crate) fn malformed(path: &UnitPath, reason: MalformedReason) -> Self {
        Self::MalformedTree {
            path: path.clone(),
            reason,
        }
    }

    pub(crate) fn unknown(path: &UnitPath) -> Self {
        Self::UnknownCurrentUnit { path: path.clone() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_display_names_path_and_reason() {
        let err = NavError::malformed(
            &UnitPath::from("guide/setup"),
            MalformedReason::MissingWeight,
        );

        assert_eq!(
            err.to_string(),
            "Malformed book tree at 'guide/setup': missing ordering weight"
        );
    }

    #[test]
    fn test_unknown_display_names_path() {
        let err = NavError::unknown(&UnitPath::from("gone"));

        assert_eq!(err.to_string(), "Current unit 'gone' is not part of the book tree");
    }

    #[test]
    fn test_out_of_order_display() {
        let reason = MalformedReason::OutOfOrder {
            weight: 1,
            previous: 5,
        };

        assert_eq!(reason.to_string(), "weight 1 is listed after sibling weight 5");
    }
}
