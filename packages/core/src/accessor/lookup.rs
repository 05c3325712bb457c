//! Lookup outcomes
//!
//! Distinguishes a found value (which may be `null`) from a missing one and
//! records the segment at which resolution stopped.

use serde_json::Value;

/// Why resolution stopped at a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissReason {
    /// The value reached before this segment was `null`
    NullCursor,
    /// Mapping has no entry with this key
    KeyAbsent,
    /// Segment is not a canonical index into a sequence
    NotAnIndex,
    /// Index is past the end of the sequence
    IndexOutOfRange,
    /// The value reached is a string, number or boolean
    NotTraversable,
}

/// Where and why a lookup missed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Miss {
    /// Zero-based position of the segment that could not be resolved
    pub segment: usize,
    pub reason: MissReason,
}

/// Result of resolving a path
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookup<'a> {
    /// Every segment resolved; the value may be `null`
    Found(&'a Value),
    /// Some segment did not resolve
    Missing(Miss),
}

impl<'a> Lookup<'a> {
    #[inline]
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    #[inline]
    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, Lookup::Missing(_))
    }

    /// The found value, `None` if missing
    #[inline]
    #[must_use]
    pub fn found(self) -> Option<&'a Value> {
        match self {
            Lookup::Found(value) => Some(value),
            Lookup::Missing(_) => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn miss(self) -> Option<Miss> {
        match self {
            Lookup::Found(_) => None,
            Lookup::Missing(miss) => Some(miss),
        }
    }

    /// The found value or `fallback`
    #[inline]
    #[must_use]
    pub fn or(self, fallback: &'a Value) -> &'a Value {
        self.found().unwrap_or(fallback)
    }

    /// Clone the found value, or produce one from `fallback`
    #[inline]
    pub fn cloned_or_else(self, fallback: impl FnOnce() -> Value) -> Value {
        self.found().cloned().unwrap_or_else(fallback)
    }
}
