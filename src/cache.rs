// SPDX-FileCopyrightText: The eval-pathiter authors
// SPDX-License-Identifier: MPL-2.0

use std::{
    fmt,
    sync::{Arc, RwLock},
};

use crate::{CursorError, HashMap, SharedCursor};

/// Opaque identity of a tree's provenance.
///
/// Derived by the caller from whatever describes the tree's source and
/// only ever compared for equality. Used as a cache key and not otherwise
/// interpreted.
///
/// ```
/// # use eval_pathiter::Fingerprint;
/// let fingerprint = Fingerprint::from_bytes([0x42; 16]);
/// assert_eq!(fingerprint, Fingerprint::from_bytes([0x42; 16]));
/// assert_ne!(fingerprint, Fingerprint::new(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display(fmt = "{:032x}", _0)]
pub struct Fingerprint(u128);

impl Fingerprint {
    #[must_use]
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(u128::from_be_bytes(bytes))
    }
}

/// Caching policy of a [`RootCache`].
///
/// Decided by the caller at construction, deliberately independent of
/// whether a fingerprint is supplied for a particular tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Caching {
    #[default]
    Enabled,
    Disabled,
}

/// Provenance of a tree: an optional fingerprint plus the thunk that
/// computes the tree's root node.
pub trait RootSource: fmt::Debug {
    /// Identity of the tree, if one can be derived from its provenance.
    fn fingerprint(&self) -> Option<Fingerprint>;

    /// Compute the root node.
    ///
    /// Expected to be expensive. Invoked at most once per distinct
    /// fingerprint for the lifetime of a caching [`RootCache`].
    fn load_root(&self) -> Result<SharedCursor, CursorError>;
}

/// Fingerprint-keyed table of previously computed tree roots.
///
/// Append-only: an entry is inserted on the first successful computation
/// for its fingerprint and afterwards treated as authoritative. There is
/// no eviction, size bound, or expiry. Disabling caching entirely is the
/// only invalidation mechanism.
#[derive(Debug)]
pub struct RootCache {
    caching: Caching,
    roots: RwLock<HashMap<Fingerprint, SharedCursor>>,
}

impl RootCache {
    #[must_use]
    pub fn new(caching: Caching) -> Self {
        Self {
            caching,
            roots: RwLock::new(HashMap::new()),
        }
    }

    #[must_use]
    pub const fn caching(&self) -> Caching {
        self.caching
    }

    /// Return the cached root for `fingerprint` or compute and store it.
    ///
    /// Without a fingerprint or with caching disabled `compute` is always
    /// invoked and the table is left untouched. A failing `compute` stores
    /// nothing and the next call with the same fingerprint retries.
    ///
    /// Concurrent first access for the *same* fingerprint may invoke
    /// `compute` redundantly. The first writer wins and all callers
    /// receive the stored root. No lock is held while `compute` runs.
    #[allow(clippy::missing_panics_doc)] // Never panics
    pub fn get_or_compute(
        &self,
        fingerprint: Option<Fingerprint>,
        compute: impl FnOnce() -> Result<SharedCursor, CursorError>,
    ) -> Result<SharedCursor, CursorError> {
        let Some(fingerprint) = fingerprint else {
            return compute();
        };
        if self.caching == Caching::Disabled {
            return compute();
        }
        if let Some(root) = self.roots.read().expect("not poisoned").get(&fingerprint) {
            log::debug!("Reusing cached root for fingerprint {fingerprint}");
            return Ok(Arc::clone(root));
        }
        let root = compute()?;
        let mut roots = self.roots.write().expect("not poisoned");
        if let Some(winner) = roots.get(&fingerprint) {
            // Lost a race against a concurrent computation for the
            // same fingerprint. The stored root is authoritative.
            return Ok(Arc::clone(winner));
        }
        log::debug!("Caching root for fingerprint {fingerprint}");
        roots.insert(fingerprint, Arc::clone(&root));
        Ok(root)
    }

    /// [`get_or_compute`](Self::get_or_compute) driven by a [`RootSource`].
    pub fn open(&self, source: &dyn RootSource) -> Result<SharedCursor, CursorError> {
        self.get_or_compute(source.fingerprint(), || source.load_root())
    }
}
