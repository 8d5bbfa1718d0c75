// SPDX-FileCopyrightText: The eval-pathiter authors
// SPDX-License-Identifier: MPL-2.0

use thiserror::Error;

use crate::NamePath;

/// Failure reported by the evaluator at the cursor boundary.
///
/// Errors are local to the node or child they concern. A failed child
/// resolution during iteration is yielded with its pair and does not
/// affect the remaining siblings.
#[derive(Debug, Error)]
pub enum CursorError {
    /// The requested child does not exist.
    #[error("no child named `{name}` at `{at}`")]
    NotFound { at: NamePath, name: String },

    /// The node has no children to enumerate or resolve.
    #[error("node at `{at}` is not traversable")]
    NotTraversable { at: NamePath },

    /// The node is not a scalar leaf.
    #[error("node at `{at}` is not a scalar value")]
    WrongKind { at: NamePath },

    /// The evaluator failed to produce the requested value.
    #[error("evaluation failed: {0}")]
    Eval(String),
}

/// Failure while constructing a [`PathIter`](crate::PathIter).
///
/// Construction either succeeds completely or fails without returning a
/// partial iterator.
#[derive(Debug, Error)]
pub enum NavigationError {
    /// Computing the tree root failed. Nothing has been cached.
    #[error("failed to compute the tree root")]
    Compute(#[source] CursorError),

    /// The child names of the node to iterate could not be materialized.
    #[error("cannot enumerate the children of `{at}`")]
    Enumerate {
        at: NamePath,
        #[source]
        source: CursorError,
    },

    /// A segment of the base path did not resolve.
    #[error("failed to resolve `{segment}` below `{at}`")]
    Segment {
        at: NamePath,
        segment: String,
        #[source]
        source: CursorError,
    },
}
