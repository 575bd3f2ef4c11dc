//! Cursor positions and offset translation.
//!
//! Editors address text by `(row, column)` with columns counted in UTF-16 code
//! units, while tree-sitter reports rows and UTF-8 byte columns. [`LineIndex`]
//! translates between the two and to absolute offsets, so every caller-facing
//! position stays in editor units and every tree lookup stays in byte units.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A cursor position: zero-based row and UTF-16 column within that row.
///
/// Ordering is row-major, so `a <= b` means `a` is at or before `b` in the
/// document.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Point {
    pub row: usize,
    pub column: usize,
}

impl Point {
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// The same row, one column to the left (saturating at column 0).
    pub fn step_left(self) -> Self {
        Self::new(self.row, self.column.saturating_sub(1))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row, self.column)
    }
}

/// Line table over a source text.
#[derive(Debug, Clone)]
pub struct LineIndex<'a> {
    source: &'a str,
    /// Byte offset at which each row starts.
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    pub fn new(source: &'a str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(source.match_indices('\n').map(|(idx, _)| idx + 1));
        Self {
            source,
            line_starts,
        }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Text of `row` without its `\n` terminator.
    pub fn line(&self, row: usize) -> Option<&'a str> {
        let start = *self.line_starts.get(row)?;
        let end = self
            .line_starts
            .get(row + 1)
            .map_or(self.source.len(), |next| next - 1);
        Some(&self.source[start..end])
    }

    /// Convert an editor point into a tree-sitter point.
    ///
    /// Out-of-range rows and columns are carried through unchanged (columns
    /// past the end of a line keep their excess) so tree-sitter resolves them
    /// exactly as it resolves any other out-of-range position.
    pub fn to_ts_point(&self, point: Point) -> tree_sitter::Point {
        let Some(line) = self.line(point.row) else {
            return tree_sitter::Point::new(point.row, point.column);
        };

        let mut units = 0;
        for (byte, ch) in line.char_indices() {
            if units >= point.column {
                return tree_sitter::Point::new(point.row, byte);
            }
            units += ch.len_utf16();
        }

        tree_sitter::Point::new(point.row, line.len() + point.column.saturating_sub(units))
    }

    /// Convert a tree-sitter point into an editor point.
    pub fn from_ts_point(&self, point: tree_sitter::Point) -> Point {
        let column = match self.line(point.row) {
            Some(line) => {
                let within = point.column.min(line.len());
                utf16_len_before(line, within) + (point.column - within)
            }
            None => point.column,
        };
        Point::new(point.row, column)
    }

    /// UTF-16 offset of a byte offset, counted from the start of the document.
    pub fn index_of_byte(&self, byte: usize) -> usize {
        utf16_len_before(self.source, byte)
    }

    /// Byte offset of an editor point, clamped to the document.
    pub fn byte_of(&self, point: Point) -> usize {
        let (Some(&start), Some(line)) = (self.line_starts.get(point.row), self.line(point.row))
        else {
            return self.source.len();
        };
        start + self.to_ts_point(point).column.min(line.len())
    }
}

/// Number of UTF-16 code units in `text`.
pub fn utf16_len(text: &str) -> usize {
    text.chars().map(char::len_utf16).sum()
}

/// Number of UTF-16 code units in the characters starting before `byte`.
fn utf16_len_before(text: &str, byte: usize) -> usize {
    text.char_indices()
        .take_while(|(idx, _)| *idx < byte)
        .map(|(_, ch)| ch.len_utf16())
        .sum()
}

/// Byte offset in `text` reached after `units` UTF-16 code units, clamped to
/// the end of the text.
pub fn byte_offset_of_units(text: &str, units: usize) -> usize {
    let mut seen = 0;
    for (byte, ch) in text.char_indices() {
        if seen >= units {
            return byte;
        }
        seen += ch.len_utf16();
    }
    text.len()
}
