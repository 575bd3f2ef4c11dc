//! Point resolution and category search over a parsed tree.
//!
//! Categories are grammar node kinds (`"object"`, `"string"`, ...). All
//! searches are read-only walks over the tree; nothing here allocates beyond
//! a tree cursor.

use crate::position::Point;
use crate::ts::parser::ParsedSource;
use tree_sitter::Node;

/// The deepest node whose span contains `point`.
///
/// Falls back to the root when tree-sitter finds no narrower node, which is
/// also what happens for points outside the document.
pub fn node_at<'t>(parsed: &'t ParsedSource<'_>, point: Point) -> Node<'t> {
    let root = parsed.root_node();
    let target = parsed.lines().to_ts_point(point);
    root.descendant_for_point_range(target, target)
        .unwrap_or(root)
}

/// Absolute UTF-16 offset of `point`.
///
/// Resolves the containing node and walks the text from the node's own start
/// to `point`, crossing line breaks as it goes. Points that precede the node
/// (leading whitespace before the root) are walked from the document start.
pub fn point_index(parsed: &ParsedSource<'_>, point: Point) -> usize {
    let node = node_at(parsed, point);
    let origin = parsed.start_point(node);

    let (from, mut index, text) = if origin <= point {
        (origin, parsed.start_index(node), &parsed.source[node.start_byte()..])
    } else {
        (Point::default(), 0, parsed.source)
    };

    let (mut row, mut column) = (from.row, from.column);
    for ch in text.chars() {
        if (row, column) >= (point.row, point.column) {
            break;
        }
        index += ch.len_utf16();
        if ch == '\n' {
            row += 1;
            column = 0;
        } else {
            column += ch.len_utf16();
        }
    }
    index
}

fn is_one_of<S: AsRef<str>>(node: Node<'_>, allowed: &[S]) -> bool {
    let kind = node.kind();
    allowed.iter().any(|candidate| candidate.as_ref() == kind)
}

/// Walk parent links from `node` (inclusive) to the first node whose kind is
/// in `allowed`.
pub fn find_ancestor_of_type<'t, S: AsRef<str>>(node: Node<'t>, allowed: &[S]) -> Option<Node<'t>> {
    let mut current = Some(node);
    while let Some(candidate) = current {
        if is_one_of(candidate, allowed) {
            return Some(candidate);
        }
        current = candidate.parent();
    }
    None
}

/// First node of a kind in `allowed` below `node`, in pre-order.
///
/// Each child is checked before its own subtree is searched; `node` itself
/// is never a match.
pub fn find_descendant_of_type<'t, S: AsRef<str>>(
    node: Node<'t>,
    allowed: &[S],
) -> Option<Node<'t>> {
    let mut cursor = node.walk();
    let children: Vec<Node<'t>> = node.children(&mut cursor).collect();
    for child in children {
        if is_one_of(child, allowed) {
            return Some(child);
        }
        if let Some(found) = find_descendant_of_type(child, allowed) {
            return Some(found);
        }
    }
    None
}

/// Nearest enclosing node at `point` whose kind is in `allowed`.
pub fn find_node_of_type<'t, S: AsRef<str>>(
    parsed: &'t ParsedSource<'_>,
    point: Point,
    allowed: &[S],
) -> Option<Node<'t>> {
    find_ancestor_of_type(node_at(parsed, point), allowed)
}

/// All children of `node`, named and anonymous, in order.
pub fn children_of<'t>(node: Node<'t>) -> Vec<Node<'t>> {
    let mut cursor = node.walk();
    node.children(&mut cursor).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ts::LanguageParser;
    use ast_grep_language::SupportLang;

    fn parse(source: &str) -> ParsedSource<'_> {
        LanguageParser::new(SupportLang::TypeScript)
            .unwrap()
            .parse_with_source(source)
            .unwrap()
    }

    #[test]
    fn node_at_finds_deepest_node() {
        let parsed = parse("const myString = \"my dapper string\"");
        let node = node_at(&parsed, Point::new(0, 20));
        assert_eq!(node.kind(), "string_fragment");
        assert_eq!(parsed.node_text(node), "my dapper string");
    }

    #[test]
    fn node_at_out_of_range_falls_back_to_root() {
        let parsed = parse("let a = 1;\n");
        let node = node_at(&parsed, Point::new(40, 3));
        assert_eq!(node.kind(), "program");
    }

    #[test]
    fn ancestor_search_includes_start_node() {
        let parsed = parse("f([1, 2])");
        let number = node_at(&parsed, Point::new(0, 3));
        assert_eq!(number.kind(), "number");

        let found = find_ancestor_of_type(number, &["number", "array"]).unwrap();
        assert_eq!(found.kind(), "number");

        let array = find_ancestor_of_type(number, &["array"]).unwrap();
        assert_eq!(parsed.node_text(array), "[1, 2]");

        assert!(find_ancestor_of_type(number, &["object"]).is_none());
    }

    #[test]
    fn descendant_search_is_preorder() {
        let parsed = parse("f({ a: [1] }, [2])");
        let call = find_node_of_type(&parsed, Point::new(0, 0), &["call_expression"]).unwrap();

        let first = find_descendant_of_type(call, &["array"]).unwrap();
        assert_eq!(parsed.node_text(first), "[1]");

        assert!(find_descendant_of_type(first, &["array"]).is_none());
    }

    #[test]
    fn category_lists_accept_owned_strings() {
        let parsed = parse("f(x)");
        let allowed = vec!["arguments".to_string()];
        let found = find_node_of_type(&parsed, Point::new(0, 2), &allowed).unwrap();
        assert_eq!(parsed.node_text(found), "(x)");
    }

    #[test]
    fn point_index_counts_across_lines() {
        let source = "let a = {\n  b: 1,\n};\n";
        let parsed = parse(source);
        assert_eq!(point_index(&parsed, Point::new(0, 0)), 0);
        assert_eq!(point_index(&parsed, Point::new(1, 2)), 12);
        assert_eq!(point_index(&parsed, Point::new(2, 1)), 19);
    }

    #[test]
    fn point_index_handles_leading_whitespace() {
        let source = "\n\n  let a = 1;";
        let parsed = parse(source);
        assert_eq!(point_index(&parsed, Point::new(0, 0)), 0);
        assert_eq!(point_index(&parsed, Point::new(2, 1)), 3);
        assert_eq!(point_index(&parsed, Point::new(2, 6)), 8);
    }
}
