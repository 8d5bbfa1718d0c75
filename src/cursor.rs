// SPDX-FileCopyrightText: The eval-pathiter authors
// SPDX-License-Identifier: MPL-2.0

use std::{fmt, sync::Arc};

use crate::{CursorError, NamePath};

/// Scalar value of a leaf node.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::From)]
pub enum Scalar {
    #[display(fmt = "{}", _0)]
    String(String),
    #[display(fmt = "{}", _0)]
    Integer(i64),
    #[display(fmt = "{}", _0)]
    Float(f64),
    #[display(fmt = "{}", _0)]
    Bool(bool),
}

impl Scalar {
    /// The string content, if the scalar is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            Self::Integer(_) | Self::Float(_) | Self::Bool(_) => None,
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

/// Capability handle to one node of an externally evaluated tree.
///
/// Implemented by the binding layer that talks to the evaluator. Consumers
/// only ever hold shared handles and never duplicate the underlying node.
///
/// The `Send + Sync` bound is the precondition for driving independent
/// iterators over the same tree from multiple threads and for sharing a
/// [`RootCache`](crate::RootCache) between them.
pub trait TreeCursor: fmt::Debug + Send + Sync {
    /// Names of all direct children of this node.
    ///
    /// The list is finite and fully materialized by the evaluator, even
    /// though the subtrees behind the names are not. Enumerating names is
    /// cheap compared to resolving a child.
    fn child_names(&self) -> Result<Vec<String>, CursorError>;

    /// Resolve a single direct child by name.
    ///
    /// This is where evaluation work happens and where it may fail.
    fn child(&self, name: &str) -> Result<SharedCursor, CursorError>;

    /// The scalar value of this node.
    ///
    /// Fails with [`CursorError::WrongKind`] if the node is not a scalar
    /// leaf.
    fn scalar(&self) -> Result<Scalar, CursorError>;

    /// The accumulated path from the tree root to this node.
    ///
    /// Available without evaluation.
    fn path(&self) -> NamePath;
}

/// Shared, non-owning handle to a [`TreeCursor`].
pub type SharedCursor = Arc<dyn TreeCursor>;
