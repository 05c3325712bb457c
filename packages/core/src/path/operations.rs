//! Path operations and relationships
//!
//! Creating child paths, finding parents, and determining relationships
//! between paths.

use super::types::Path;

impl Path {
    /// Create a child path by appending a key segment
    #[inline]
    #[must_use]
    pub fn child(&self, segment: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.to_string());
        Self {
            segments,
            separator: self.separator,
        }
    }

    /// Create a child path by appending an index segment
    #[inline]
    #[must_use]
    pub fn child_index(&self, index: usize) -> Self {
        self.child(&index.to_string())
    }

    /// Get the parent path (all segments except the last)
    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        if self.segments.len() <= 1 {
            return None;
        }

        Some(Self {
            segments: self.segments[..self.segments.len() - 1].to_vec(),
            separator: self.separator,
        })
    }

    /// Check if this path is a descendant of another path
    #[inline]
    #[must_use]
    pub fn is_descendant_of(&self, ancestor: &Path) -> bool {
        if self.segments.len() <= ancestor.segments.len() {
            return false;
        }

        self.segments[..ancestor.segments.len()] == ancestor.segments
    }

    /// Check if this path is an ancestor of another path
    #[inline]
    #[must_use]
    pub fn is_ancestor_of(&self, descendant: &Path) -> bool {
        descendant.is_descendant_of(self)
    }
}
