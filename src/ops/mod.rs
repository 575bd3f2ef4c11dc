//! Structural edit operations.
//!
//! Operations never touch the document. Each one inspects a parsed snapshot
//! and returns a [`Replacement`]: replace the span `[start, end)` of the
//! original text with `content`.

pub mod barf;
pub mod indent;
pub mod raise;
pub mod split;

pub use barf::barf_forward_at;
pub use raise::raise_expression_at;
pub use split::split_expression_at;

use crate::position::{LineIndex, Point};
use serde::{Deserialize, Serialize};

/// Instruction to replace the span `[start, end)` of the original text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replacement {
    pub start: Point,
    pub end: Point,
    pub content: String,
    /// Where the cursor should land after the edit, when the operation
    /// moved it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point: Option<Point>,
}

impl Replacement {
    pub fn new(start: Point, end: Point, content: impl Into<String>) -> Self {
        Self {
            start,
            end,
            content: content.into(),
            point: None,
        }
    }

    pub fn with_point(mut self, point: Point) -> Self {
        self.point = Some(point);
        self
    }

    /// Splice this replacement into `source`, the text it was computed from.
    pub fn apply(&self, source: &str) -> String {
        let lines = LineIndex::new(source);
        let start = lines.byte_of(self.start);
        let end = lines.byte_of(self.end).max(start);

        let mut edited = String::with_capacity(source.len() + self.content.len());
        edited.push_str(&source[..start]);
        edited.push_str(&self.content);
        edited.push_str(&source[end..]);
        edited
    }
}
