//! Core path type

use std::fmt;

use crate::config::path::DEFAULT_SEPARATOR;

/// Segments of a dotted path, in traversal order
///
/// A path always has at least one segment: parsing the empty string yields
/// a single empty segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    pub(crate) segments: Vec<String>,
    pub(crate) separator: char,
}

impl Path {
    /// Build a path from already split segments
    #[must_use]
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        if segments.is_empty() {
            segments.push(String::new());
        }
        Self {
            segments,
            separator: DEFAULT_SEPARATOR,
        }
    }

    #[inline]
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    #[inline]
    #[must_use]
    pub fn separator(&self) -> char {
        self.separator
    }

    /// Number of segments
    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Last segment of the path
    #[inline]
    #[must_use]
    pub fn leaf(&self) -> &str {
        self.segments.last().map_or("", String::as_str)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for segment in &self.segments {
            if !first {
                write!(f, "{}", self.separator)?;
            }
            first = false;
            f.write_str(segment)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}
