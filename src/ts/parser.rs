use crate::position::{LineIndex, Point};
use crate::ts::errors::TreeSitterError;
use ast_grep_language::{LanguageExt, SupportLang};
use tree_sitter::{Node, Parser, Tree};

/// Tree-sitter parser bound to one of the grammars bundled with ast-grep.
pub struct LanguageParser {
    parser: Parser,
    grammar: SupportLang,
}

impl LanguageParser {
    /// Create a parser for `grammar`.
    pub fn new(grammar: SupportLang) -> Result<Self, TreeSitterError> {
        let mut parser = Parser::new();
        // Get the tree-sitter Language from ast-grep-language
        let ts_lang = grammar.get_ts_language();
        parser
            .set_language(&ts_lang)
            .map_err(|_| TreeSitterError::LanguageSet {
                grammar: format!("{grammar:?}"),
            })?;

        Ok(Self { parser, grammar })
    }

    /// Get the grammar this parser was built for.
    pub fn grammar(&self) -> SupportLang {
        self.grammar
    }

    /// Parse source code into a tree-sitter Tree.
    pub fn parse(&mut self, source: &str) -> Result<Tree, TreeSitterError> {
        self.parser
            .parse(source, None)
            .ok_or(TreeSitterError::ParseFailed)
    }

    /// Parse source code and return the tree along with the source.
    pub fn parse_with_source<'a>(
        &mut self,
        source: &'a str,
    ) -> Result<ParsedSource<'a>, TreeSitterError> {
        let tree = self.parse(source)?;
        Ok(ParsedSource::new(source, tree))
    }
}

/// A snapshot of source text with its freshly parsed tree.
///
/// Node positions are exposed in editor units ([`Point`] rows and UTF-16
/// columns, UTF-16 indices) through the accessors here; raw node methods keep
/// reporting bytes.
pub struct ParsedSource<'a> {
    pub source: &'a str,
    pub tree: Tree,
    lines: LineIndex<'a>,
}

impl<'a> ParsedSource<'a> {
    pub fn new(source: &'a str, tree: Tree) -> Self {
        Self {
            source,
            tree,
            lines: LineIndex::new(source),
        }
    }

    /// Get the root node of the tree.
    pub fn root_node(&self) -> Node<'_> {
        self.tree.root_node()
    }

    pub fn lines(&self) -> &LineIndex<'a> {
        &self.lines
    }

    /// Check if the tree contains any ERROR or MISSING nodes.
    pub fn has_errors(&self) -> bool {
        has_error_nodes(self.tree.root_node())
    }

    /// Get all ERROR and MISSING nodes in the tree.
    pub fn error_nodes(&self) -> Vec<ErrorNode> {
        let mut errors = Vec::new();
        collect_error_nodes(&self.lines, self.tree.root_node(), &mut errors);
        errors
    }

    /// Extract text for a node's byte range.
    pub fn node_text(&self, node: Node<'_>) -> &'a str {
        &self.source[node.byte_range()]
    }

    pub fn start_point(&self, node: Node<'_>) -> Point {
        self.lines.from_ts_point(node.start_position())
    }

    pub fn end_point(&self, node: Node<'_>) -> Point {
        self.lines.from_ts_point(node.end_position())
    }

    /// UTF-16 offset of the node's first character.
    pub fn start_index(&self, node: Node<'_>) -> usize {
        self.lines.index_of_byte(node.start_byte())
    }

    /// UTF-16 offset just past the node's last character.
    pub fn end_index(&self, node: Node<'_>) -> usize {
        self.lines.index_of_byte(node.end_byte())
    }
}

/// Information about an ERROR node in the parse tree.
#[derive(Debug, Clone)]
pub struct ErrorNode {
    pub byte_start: usize,
    pub byte_end: usize,
    pub start: Point,
}

fn has_error_nodes(node: Node<'_>) -> bool {
    if node.is_error() || node.is_missing() {
        return true;
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if has_error_nodes(child) {
            return true;
        }
    }

    false
}

fn collect_error_nodes(lines: &LineIndex<'_>, node: Node<'_>, errors: &mut Vec<ErrorNode>) {
    if node.is_error() || node.is_missing() {
        errors.push(ErrorNode {
            byte_start: node.start_byte(),
            byte_end: node.end_byte(),
            start: lines.from_ts_point(node.start_position()),
        });
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_error_nodes(lines, child, errors);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_typescript() {
        let mut parser = LanguageParser::new(SupportLang::TypeScript).unwrap();
        let source = "const answer: number = 42;";
        let parsed = parser.parse_with_source(source).unwrap();

        assert!(!parsed.has_errors());
        assert_eq!(parsed.root_node().kind(), "program");
    }

    #[test]
    fn parse_invalid_typescript() {
        let mut parser = LanguageParser::new(SupportLang::TypeScript).unwrap();
        let source = "function f( { ";
        let parsed = parser.parse_with_source(source).unwrap();

        assert!(parsed.has_errors());
        assert!(!parsed.error_nodes().is_empty());
    }

    #[test]
    fn node_positions_use_utf16_columns() {
        let mut parser = LanguageParser::new(SupportLang::TypeScript).unwrap();
        let source = "const s = \"😀\"; const n = 1;";
        let parsed = parser.parse_with_source(source).unwrap();

        let root = parsed.root_node();
        let second = root.child(1).unwrap();
        assert_eq!(parsed.node_text(second), "const n = 1;");
        // the emoji is 4 bytes but 2 UTF-16 units
        assert_eq!(second.start_byte(), 18);
        assert_eq!(parsed.start_point(second), Point::new(0, 16));
        assert_eq!(parsed.start_index(second), 16);
        assert_eq!(parsed.end_index(second), 28);
    }

    #[test]
    fn parse_rust_grammar() {
        let mut parser = LanguageParser::new(SupportLang::Rust).unwrap();
        let parsed = parser.parse_with_source("fn main() {}").unwrap();
        assert!(matches!(parser.grammar(), SupportLang::Rust));
        assert_eq!(parsed.root_node().kind(), "source_file");
    }
}
