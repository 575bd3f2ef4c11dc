//! Node queries: describe the node at a point and its immediate family.

use crate::position::Point;
use crate::ts::search::{children_of, node_at};
use crate::ts::ParsedSource;
use serde::Serialize;
use tree_sitter::Node;

/// A node boundary as both a point and a UTF-16 offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub pos: Point,
    pub index: usize,
}

/// Summary of one node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeDescriptor {
    pub category: String,
    pub text: String,
    pub start: Position,
    pub end: Position,
}

impl NodeDescriptor {
    pub fn describe(parsed: &ParsedSource<'_>, node: Node<'_>) -> Self {
        Self {
            category: node.kind().to_string(),
            text: parsed.node_text(node).to_string(),
            start: Position {
                pos: parsed.start_point(node),
                index: parsed.start_index(node),
            },
            end: Position {
                pos: parsed.end_point(node),
                index: parsed.end_index(node),
            },
        }
    }
}

/// A node with its parent (absent for the root) and direct children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeInfo {
    pub node: NodeDescriptor,
    pub parent: Option<NodeDescriptor>,
    pub children: Vec<NodeDescriptor>,
}

impl NodeInfo {
    pub fn describe(parsed: &ParsedSource<'_>, node: Node<'_>) -> Self {
        Self {
            node: NodeDescriptor::describe(parsed, node),
            parent: node
                .parent()
                .map(|parent| NodeDescriptor::describe(parsed, parent)),
            children: children_of(node)
                .into_iter()
                .map(|child| NodeDescriptor::describe(parsed, child))
                .collect(),
        }
    }
}

/// The deepest node containing `point`.
pub fn node_at_point(parsed: &ParsedSource<'_>, point: Point) -> NodeInfo {
    NodeInfo::describe(parsed, node_at(parsed, point))
}

/// The sibling immediately before the node at `point`.
pub fn node_before(parsed: &ParsedSource<'_>, point: Point) -> Option<NodeInfo> {
    node_at(parsed, point)
        .prev_sibling()
        .map(|node| NodeInfo::describe(parsed, node))
}

/// The parent of the node at `point`.
pub fn node_parent(parsed: &ParsedSource<'_>, point: Point) -> Option<NodeInfo> {
    node_at(parsed, point)
        .parent()
        .map(|node| NodeInfo::describe(parsed, node))
}
