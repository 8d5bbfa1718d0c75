// SPDX-FileCopyrightText: The eval-pathiter authors
// SPDX-License-Identifier: MPL-2.0

use std::fmt;

/// Location of a node relative to the root of its tree.
///
/// An ordered sequence of name segments. The empty path addresses the
/// tree root itself.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, derive_more::From)]
pub struct NamePath(Vec<String>);

impl NamePath {
    /// The empty path addressing the tree root.
    #[must_use]
    pub const fn root() -> Self {
        Self(Vec::new())
    }

    /// Check if the path addresses the tree root.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of segments, i.e. the nesting depth of the addressed node.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// Iterate over all segments in nesting order.
    pub fn segments(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.iter().map(String::as_str)
    }

    /// The final segment, i.e. the name of the addressed node.
    ///
    /// `None` for the root path.
    #[must_use]
    pub fn last_segment(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// Path of a direct child, i.e. with a single segment appended.
    ///
    /// Leaves `self` untouched.
    ///
    /// ```
    /// # use eval_pathiter::NamePath;
    /// let base: NamePath = ["x", "y"].into_iter().collect();
    /// assert_eq!("x.y.z", base.join("z").to_string());
    /// assert_eq!("x.y", base.to_string());
    /// ```
    #[must_use]
    pub fn join(&self, name: impl Into<String>) -> Self {
        let mut segments = Vec::with_capacity(self.0.len() + 1);
        segments.extend(self.0.iter().cloned());
        segments.push(name.into());
        Self(segments)
    }

    /// Append a single segment in place.
    pub fn push(&mut self, name: impl Into<String>) {
        self.0.push(name.into());
    }
}

impl<S> FromIterator<S> for NamePath
where
    S: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for NamePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut segments = self.segments();
        if let Some(first) = segments.next() {
            f.write_str(first)?;
            for segment in segments {
                write!(f, ".{segment}")?;
            }
        }
        Ok(())
    }
}
