//! Path string parsing

use std::convert::Infallible;
use std::str::FromStr;

use super::types::Path;
use crate::config::PathConfig;

impl Path {
    /// Split `path` on `.`
    #[inline]
    #[must_use]
    pub fn parse(path: &str) -> Self {
        Self::parse_with(path, &PathConfig::default())
    }

    /// Split `path` on the configured separator
    ///
    /// Splitting never fails: consecutive separators produce empty segments
    /// and the empty string produces one empty segment.
    #[must_use]
    pub fn parse_with(path: &str, config: &PathConfig) -> Self {
        Self {
            segments: path.split(config.separator).map(str::to_string).collect(),
            separator: config.separator,
        }
    }
}

impl FromStr for Path {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for Path {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

/// Read a segment as a sequence index
///
/// Only the canonical decimal form is accepted: ASCII digits, no sign, no
/// leading zeros except for `"0"` itself. `"01"`, `"+1"`, `"-1"` and `"1.0"`
/// name no element.
#[must_use]
pub fn parse_index(segment: &str) -> Option<usize> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if segment.len() > 1 && segment.starts_with('0') {
        return None;
    }
    segment.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_separator() {
        let path = Path::parse("address.city");
        assert_eq!(path.segments(), ["address", "city"]);
        assert_eq!(path.to_string(), "address.city");
    }

    #[test]
    fn empty_string_is_one_empty_segment() {
        let path = Path::parse("");
        assert_eq!(path.segments(), [""]);
        assert_eq!(path.depth(), 1);
    }

    #[test]
    fn consecutive_separators_keep_empty_segments() {
        assert_eq!(Path::parse("a..b").segments(), ["a", "", "b"]);
    }

    #[test]
    fn custom_separator() {
        let path = Path::parse_with("a/b.c", &PathConfig::with_separator('/'));
        assert_eq!(path.segments(), ["a", "b.c"]);
        assert_eq!(path.to_string(), "a/b.c");
    }

    #[test]
    fn canonical_indices_only() {
        assert_eq!(parse_index("0"), Some(0));
        assert_eq!(parse_index("12"), Some(12));
        assert_eq!(parse_index("01"), None);
        assert_eq!(parse_index("-1"), None);
        assert_eq!(parse_index("+1"), None);
        assert_eq!(parse_index("1.0"), None);
        assert_eq!(parse_index(""), None);
        assert_eq!(parse_index("length"), None);
        assert_eq!(parse_index("99999999999999999999999999"), None);
    }
}
