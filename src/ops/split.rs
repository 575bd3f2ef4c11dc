//! Split: divide a delimited expression into two siblings at the cursor.

use crate::lang::LanguageProfile;
use crate::ops::Replacement;
use crate::position::{byte_offset_of_units, Point};
use crate::ts::search::{children_of, find_node_of_type, point_index};
use crate::ts::ParsedSource;
use log::trace;
use tree_sitter::Node;

/// Split the nearest splittable node enclosing `point`.
///
/// The node is read as `[open, ...middle, close]`. Its inner text (between
/// `open` and `close`) is cut at the cursor and each half is wrapped in the
/// same delimiters. When the node holds several elements the cursor is first
/// snapped to the start of the element it is on (or the next one), so the cut
/// falls on an element boundary. The halves are joined by the delimiter
/// configured for the node's parent kind.
///
/// The returned replacement carries the (possibly snapped) cursor.
pub fn split_expression_at(
    profile: &LanguageProfile,
    parsed: &ParsedSource<'_>,
    point: Point,
) -> Option<Replacement> {
    let nodes = profile.nodes();
    let expr = find_node_of_type(parsed, point, &nodes.splittable)?;

    let children = children_of(expr);
    let (open, rest) = children.split_first()?;
    let (close, middle) = rest.split_last()?;

    let point = snap_to_element(parsed, middle, point);

    let inner_start = open.end_byte();
    let inner_end = close.start_byte().max(inner_start);
    let inner = &parsed.source[inner_start..inner_end];

    let offset = point_index(parsed, point).saturating_sub(parsed.lines().index_of_byte(inner_start));
    let (left, right) = inner.split_at(byte_offset_of_units(inner, offset));

    let open_text = parsed.node_text(*open);
    let close_text = parsed.node_text(*close);
    let parent_kind = expr.parent().map_or("", |parent| parent.kind());
    let separator = format!("{} ", nodes.delimiter_for(parent_kind).trim_end());

    trace!(
        "split {} at {point}: {left:?} | {right:?} (parent {parent_kind})",
        expr.kind()
    );

    let content = format!("{open_text}{left}{close_text}{separator}{open_text}{right}{close_text}");

    Some(
        Replacement::new(parsed.start_point(expr), parsed.end_point(expr), content)
            .with_point(point),
    )
}

/// Move `point` to the start of the first element ending after it.
///
/// Single-element constructs (a string's one fragment) are cut exactly at the
/// cursor, so the point is left alone.
fn snap_to_element(parsed: &ParsedSource<'_>, middle: &[Node<'_>], point: Point) -> Point {
    if middle.len() < 2 {
        return point;
    }
    let target = parsed.lines().to_ts_point(point);
    middle
        .iter()
        .find(|child| child.end_position() > target)
        .map_or(point, |child| parsed.start_point(*child))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::registry;

    fn split(source: &str, point: Point) -> Option<Replacement> {
        let profile = registry().get("typescript").unwrap();
        let parsed = profile.parse(source).unwrap();
        split_expression_at(&profile, &parsed, point)
    }

    #[test]
    fn splits_string_at_point() {
        let result = split(r#"const myString = "my dapper string""#, Point::new(0, 20)).unwrap();
        assert_eq!(result.start, Point::new(0, 17));
        assert_eq!(result.end, Point::new(0, 35));
        assert_eq!(result.content, r#""my" " dapper string""#);
        assert_eq!(result.point, Some(Point::new(0, 20)));
    }

    #[test]
    fn splits_array_on_element_boundary() {
        // cursor inside `22`: split lands before it
        let result = split("f([1, 22, 3])", Point::new(0, 7)).unwrap();
        assert_eq!(result.start, Point::new(0, 2));
        assert_eq!(result.end, Point::new(0, 12));
        assert_eq!(result.content, "[1, ], [22, 3]");
        assert_eq!(result.point, Some(Point::new(0, 6)));
    }

    #[test]
    fn cursor_on_separator_snaps_to_separator() {
        let result = split("f([1, 2])", Point::new(0, 4)).unwrap();
        assert_eq!(result.content, "[1], [, 2]");
        assert_eq!(result.point, Some(Point::new(0, 4)));
    }

    #[test]
    fn splits_argument_list() {
        let result = split("g(a, b);", Point::new(0, 5)).unwrap();
        assert_eq!(result.content, "(a, ) (b)");
        assert_eq!(result.start, Point::new(0, 1));
        assert_eq!(result.end, Point::new(0, 7));
    }

    #[test]
    fn string_with_non_ascii_text() {
        let result = split(r#"s = "é😀 ok""#, Point::new(0, 8)).unwrap();
        assert_eq!(result.content, r#""é😀" " ok""#);
        assert_eq!(result.end, Point::new(0, 12));
    }

    #[test]
    fn no_splittable_node_is_none() {
        assert!(split("let a = 1;", Point::new(0, 4)).is_none());
    }
}
