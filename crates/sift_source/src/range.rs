//! Line/column ranges locating a marker within its resource.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A range of text within a resource, in 1-indexed line/column coordinates.
///
/// The derived ordering compares `start_line`, `start_column`, `end_line` and
/// `end_column` in that order, which is the positional part of marker sorting.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextRange {
    /// The starting line number (1-indexed).
    pub start_line: u32,
    /// The starting column number (1-indexed).
    pub start_column: u32,
    /// The ending line number (1-indexed).
    pub end_line: u32,
    /// The ending column number (1-indexed).
    pub end_column: u32,
}

impl TextRange {
    /// Creates a new range from its start and end coordinates.
    pub fn new(start_line: u32, start_column: u32, end_line: u32, end_column: u32) -> Self {
        Self {
            start_line,
            start_column,
            end_line,
            end_column,
        }
    }

    /// Creates an empty range positioned at a single line/column.
    pub fn point(line: u32, column: u32) -> Self {
        Self::new(line, column, line, column)
    }

    /// Returns `true` if the range starts and ends on the same line.
    pub fn is_single_line(&self) -> bool {
        self.start_line == self.end_line
    }

    /// Returns `true` if the range covers no text.
    pub fn is_empty(&self) -> bool {
        self.start_line == self.end_line && self.start_column == self.end_column
    }
}

impl fmt::Display for TextRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}-{}:{}",
            self.start_line, self.start_column, self.end_line, self.end_column
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construct() {
        let r = TextRange::new(10, 5, 11, 10);
        assert_eq!(r.start_line, 10);
        assert_eq!(r.start_column, 5);
        assert_eq!(r.end_line, 11);
        assert_eq!(r.end_column, 10);
        assert!(!r.is_single_line());
    }

    #[test]
    fn point_is_empty() {
        let p = TextRange::point(3, 7);
        assert!(p.is_empty());
        assert!(p.is_single_line());
        assert!(!TextRange::new(3, 7, 3, 8).is_empty());
    }

    #[test]
    fn ordering_is_start_then_end() {
        assert!(TextRange::new(3, 5, 4, 10) < TextRange::new(4, 1, 4, 2));
        assert!(TextRange::new(8, 1, 8, 4) < TextRange::new(8, 1, 9, 3));
        assert!(TextRange::new(8, 1, 9, 3) < TextRange::new(8, 2, 8, 4));
        assert!(TextRange::new(8, 1, 8, 4) < TextRange::new(8, 1, 8, 5));
    }

    #[test]
    fn display_format() {
        assert_eq!(format!("{}", TextRange::new(10, 5, 11, 10)), "10:5-11:10");
    }

    #[test]
    fn serde_uses_camel_case() {
        let json = serde_json::to_string(&TextRange::new(1, 2, 3, 4)).unwrap();
        assert_eq!(
            json,
            r#"{"startLine":1,"startColumn":2,"endLine":3,"endColumn":4}"#
        );
    }
}
