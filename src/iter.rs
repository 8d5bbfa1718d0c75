// SPDX-FileCopyrightText: The eval-pathiter authors
// SPDX-License-Identifier: MPL-2.0

use std::{collections::VecDeque, iter::FusedIterator};

use crate::{CursorError, NamePath, NavigationError, RootCache, RootSource, SharedCursor};

/// Walk `path` from `start`, resolving one child per segment.
///
/// Fails at the first segment that does not resolve.
pub fn descend(start: SharedCursor, path: &NamePath) -> Result<SharedCursor, NavigationError> {
    let mut node = start;
    for segment in path.segments() {
        node = match node.child(segment) {
            Ok(child) => child,
            Err(source) => {
                return Err(NavigationError::Segment {
                    at: node.path(),
                    segment: segment.to_owned(),
                    source,
                });
            }
        };
    }
    Ok(node)
}

/// Lazy enumeration of the direct children of a single node as
/// `(path, cursor)` pairs.
///
/// The child names are captured once at construction, in the order the
/// evaluator reports them. Each advance resolves exactly one child and
/// pairs it with the base path extended by that child's name. A failed
/// resolution is yielded inside the pair and leaves the iterator
/// advanceable for the remaining siblings.
///
/// Once exhausted the iterator stays exhausted. Enumerating the same node
/// again requires constructing a new `PathIter`.
#[derive(Debug)]
pub struct PathIter {
    base_path: NamePath,
    node: SharedCursor,
    pending: VecDeque<String>,
    child_count: usize,
}

impl PathIter {
    /// Enumerate the children of an already resolved node.
    ///
    /// The base path is read once from the cursor itself.
    pub fn new(node: SharedCursor) -> Result<Self, NavigationError> {
        let base_path = node.path();
        Self::start(node, base_path)
    }

    /// Enumerate the children of the node at `base_path` within the tree
    /// described by `source`.
    ///
    /// The tree root is obtained through `cache` and `base_path` is then
    /// walked with [`descend`]. Fails without returning a partial iterator
    /// if the root cannot be computed or a segment does not resolve.
    pub fn from_source(
        cache: &RootCache,
        source: &dyn RootSource,
        base_path: NamePath,
    ) -> Result<Self, NavigationError> {
        let root = cache.open(source).map_err(NavigationError::Compute)?;
        let node = descend(root, &base_path)?;
        Self::start(node, base_path)
    }

    fn start(node: SharedCursor, base_path: NamePath) -> Result<Self, NavigationError> {
        let names = match node.child_names() {
            Ok(names) => names,
            Err(source) => {
                return Err(NavigationError::Enumerate {
                    at: base_path,
                    source,
                });
            }
        };
        let child_count = names.len();
        Ok(Self {
            base_path,
            node,
            pending: names.into(),
            child_count,
        })
    }

    /// Path of the node whose children are enumerated.
    #[must_use]
    pub const fn base_path(&self) -> &NamePath {
        &self.base_path
    }

    /// The node whose children are enumerated.
    #[must_use]
    pub const fn node(&self) -> &SharedCursor {
        &self.node
    }

    /// Total number of direct children.
    ///
    /// Counts the names materialized at construction without resolving
    /// any child. Unaffected by advancing the iterator.
    #[must_use]
    pub const fn child_count(&self) -> usize {
        self.child_count
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.child_count == 0
    }
}

impl Iterator for PathIter {
    type Item = (NamePath, Result<SharedCursor, CursorError>);

    fn next(&mut self) -> Option<Self::Item> {
        let name = self.pending.pop_front()?;
        let path = self.base_path.join(name.as_str());
        log::debug!("Resolving child `{path}`");
        let child = self.node.child(&name);
        Some((path, child))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.pending.len(), Some(self.pending.len()))
    }
}

impl FusedIterator for PathIter {}
