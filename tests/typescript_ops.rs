//! Integration tests for structural operations and node queries over TypeScript
//!
//! Runs operate and query against the route metadata fixture and checks
//! that applied edits leave a document without syntax errors

use tree_climber::{
    operate, query, registry, EngineError, OperationCommand, Point, QueryCommand, Replacement,
};

const FIXTURE: &str = include_str!("fixtures/ts/route-metadata.ts");

fn op(command: OperationCommand, row: usize, column: usize) -> Option<Replacement> {
    operate("typescript", command, FIXTURE, Point::new(row, column)).unwrap()
}

fn assert_parses_cleanly(source: &str) {
    let profile = registry().get("typescript").unwrap();
    let parsed = profile.parse(source).unwrap();
    assert!(!parsed.has_errors(), "syntax errors in:\n{source}");
}

#[test]
fn test_barf_forward_moves_closing_brace_before_last_field() {
    let result = op(OperationCommand::BarfForward, 7, 11).unwrap();
    assert_eq!(result.start, Point::new(9, 6));
    assert_eq!(result.end, Point::new(10, 5));
    assert_eq!(result.content, "}\n    templated: boolean");
    assert_eq!(result.point, None);
}

#[test]
fn test_barf_forward_on_inline_object() {
    let result = op(OperationCommand::BarfForward, 29, 15).unwrap();
    assert_eq!(result.start, Point::new(29, 37));
    assert_eq!(result.end, Point::new(29, 54));
    assert_eq!(result.content, "} templated: true");
}

#[test]
fn test_raise_nested_object_type() {
    let result = op(OperationCommand::RaiseExpr, 7, 11).unwrap();
    assert_eq!(result.start, Point::new(3, 10));
    assert_eq!(result.end, Point::new(11, 3));
    assert_eq!(
        result.content,
        "{\n      href: string\n      templated: boolean\n    }"
    );
    assert_parses_cleanly(&result.apply(FIXTURE));
}

#[test]
fn test_raise_property_over_its_parent_property() {
    let result = op(OperationCommand::RaiseExpr, 8, 8).unwrap();
    assert_eq!(result.start, Point::new(7, 4));
    assert_eq!(result.end, Point::new(10, 5));
    assert_eq!(result.content, "href: string");
    assert_parses_cleanly(&result.apply(FIXTURE));
}

#[test]
fn test_raise_dedents_multiline_property() {
    let result = op(OperationCommand::RaiseExpr, 7, 4).unwrap();
    assert_eq!(result.start, Point::new(3, 2));
    assert_eq!(result.end, Point::new(11, 3));
    assert_eq!(
        result.content,
        "link: {\n    href: string\n    templated: boolean\n  }"
    );

    let edited = result.apply(FIXTURE);
    assert!(edited.contains("interface RouteMetadata {\n  link: {\n    href: string\n"));
    assert_parses_cleanly(&edited);
}

#[test]
fn test_raise_exhausted_is_a_typed_error() {
    // `'a': 1` is not valid on its own, so not even the program accepts it
    let err = operate(
        "typescript",
        OperationCommand::RaiseExpr,
        "const o = { 'a': 1 };\n",
        Point::new(0, 15),
    )
    .unwrap_err();
    match err {
        EngineError::RaiseExhausted { kind, start } => {
            assert_eq!(kind, "pair");
            assert_eq!(start, Point::new(0, 12));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_split_string_inside_object() {
    let result = op(OperationCommand::SplitExpr, 29, 29).unwrap();
    assert_eq!(result.start, Point::new(29, 22));
    assert_eq!(result.end, Point::new(29, 35));
    // `pair` has no delimiter of its own, so the halves join with a space
    assert_eq!(result.content, "'/users' '/{id}'");
    assert_eq!(result.point, Some(Point::new(29, 29)));
}

#[test]
fn test_split_my_dapper_string() {
    let source = r#"const myString = "my dapper string";"#;
    let result = operate(
        "typescript",
        OperationCommand::SplitExpr,
        source,
        Point::new(0, 20),
    )
    .unwrap()
    .unwrap();
    assert_eq!(result.content, r#""my" " dapper string""#);
    assert_eq!(
        result.apply(source),
        r#"const myString = "my" " dapper string";"#
    );
}

#[test]
fn test_operations_without_construct_are_none() {
    // inside the comment on the first row
    assert_eq!(op(OperationCommand::SplitExpr, 0, 5), None);
    assert_eq!(op(OperationCommand::BarfForward, 0, 5), None);
    assert_eq!(op(OperationCommand::RaiseExpr, 0, 5), None);
}

#[test]
fn test_query_node_at() {
    let info = query("typescript", QueryCommand::NodeAt, FIXTURE, Point::new(2, 12))
        .unwrap()
        .unwrap();
    assert_eq!(info.node.category, "type_identifier");
    assert_eq!(info.node.text, "RouteMetadata");
    assert_eq!(info.node.start.pos, Point::new(2, 10));
    assert_eq!(
        info.node.start.index,
        FIXTURE.lines().take(2).map(|line| line.len() + 1).sum::<usize>() + 10
    );
    assert_eq!(info.parent.unwrap().category, "interface_declaration");
}

#[test]
fn test_query_node_before_and_parent() {
    let before = query("typescript", QueryCommand::NodeBefore, FIXTURE, Point::new(8, 8))
        .unwrap();
    assert!(before.is_none(), "`href` is the first child of its signature");

    let parent = query("typescript", QueryCommand::NodeParent, FIXTURE, Point::new(8, 8))
        .unwrap()
        .unwrap();
    assert_eq!(parent.node.category, "property_signature");
    assert_eq!(parent.node.text, "href: string");
    assert_eq!(parent.children.len(), 2);
    assert_eq!(parent.parent.unwrap().category, "object_type");
}

#[test]
fn test_unsupported_language_suggests_a_name() {
    let err = operate("typescipt", OperationCommand::SplitExpr, FIXTURE, Point::default())
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "unsupported language: typescipt (did you mean 'typescript'?)"
    );
}
