// SPDX-FileCopyrightText: The eval-pathiter authors
// SPDX-License-Identifier: MPL-2.0

//! Lazy, path-tracking child iteration over fingerprint-cached evaluation trees.
//!
//! The tree itself lives in an external evaluator and is only reachable
//! through [`TreeCursor`] handles. This crate adds the two pieces around
//! those handles: a [`RootCache`] that decides per access whether a
//! previously computed root can be reused for a given [`Fingerprint`],
//! and a [`PathIter`] that enumerates the direct children of one node as
//! ([`NamePath`], cursor) pairs, resolving each child only when the
//! iteration reaches it.

mod cache;
pub use self::cache::{Caching, Fingerprint, RootCache, RootSource};

mod cursor;
pub use self::cursor::{Scalar, SharedCursor, TreeCursor};

mod error;
pub use self::error::{CursorError, NavigationError};

mod iter;
pub use self::iter::{descend, PathIter};

mod path;
pub use self::path::NamePath;

#[cfg(feature = "im")]
type HashMap<K, V> = im::HashMap<K, V>;

#[cfg(not(feature = "im"))]
type HashMap<K, V> = std::collections::HashMap<K, V>;
