//! Node tables for the languages available without any configuration.

use crate::lang::profile::{NodeTables, ProfileDefinition};
use ast_grep_language::SupportLang;

const TS_SCOPES: &[&str] = &[
    "formal_parameters",
    "interface_body",
    "object",
    "object_type",
    "statement_block",
    "class_body",
    "enum_body",
    "array",
    "arguments",
];

const TS_SPLITTABLE: &[&str] = &["string", "template_string", "array", "object", "arguments"];

const TS_UNITS: &[&str] = &[
    "property_signature",
    "object_type",
    "pair",
    "object",
    "array",
    "call_expression",
    "member_expression",
    "binary_expression",
    "arrow_function",
    "parenthesized_expression",
    "ternary_expression",
    "await_expression",
    "new_expression",
    "string",
    "template_string",
    "identifier",
    "number",
];

/// Kinds that only exist in the TypeScript grammars.
const TS_ONLY: &[&str] = &["interface_body", "object_type", "enum_body", "property_signature"];

const RUST_SCOPES: &[&str] = &[
    "block",
    "parameters",
    "arguments",
    "field_declaration_list",
    "field_initializer_list",
    "declaration_list",
    "array_expression",
    "tuple_expression",
    "use_list",
];

const RUST_SPLITTABLE: &[&str] = &[
    "string_literal",
    "array_expression",
    "arguments",
    "tuple_expression",
];

const RUST_UNITS: &[&str] = &[
    "call_expression",
    "field_expression",
    "binary_expression",
    "reference_expression",
    "macro_invocation",
    "array_expression",
    "tuple_expression",
    "struct_expression",
    "identifier",
    "integer_literal",
    "string_literal",
    "index_expression",
    "try_expression",
];

fn typescript_tables() -> NodeTables {
    NodeTables::new(
        TS_SCOPES.iter().copied(),
        TS_SPLITTABLE.iter().copied(),
        TS_UNITS.iter().copied(),
    )
    .with_delimiter("arguments", ",")
    .with_delimiter("array", ",")
    .with_delimiter("formal_parameters", ",")
    .with_delimiter("object", ",")
    .with_delimiter("type_arguments", ",")
    .with_delimiter("tuple_type", ",")
    .with_delimiter("object_type", ";")
    .with_delimiter("interface_body", ";")
}

fn javascript_tables() -> NodeTables {
    let keep = |kind: &&str| !TS_ONLY.contains(kind);
    NodeTables::new(
        TS_SCOPES.iter().copied().filter(keep),
        TS_SPLITTABLE.iter().copied().filter(keep),
        TS_UNITS.iter().copied().filter(keep),
    )
    .with_delimiter("arguments", ",")
    .with_delimiter("array", ",")
    .with_delimiter("formal_parameters", ",")
    .with_delimiter("object", ",")
}

fn rust_tables() -> NodeTables {
    NodeTables::new(
        RUST_SCOPES.iter().copied(),
        RUST_SPLITTABLE.iter().copied(),
        RUST_UNITS.iter().copied(),
    )
    .with_delimiter("arguments", ",")
    .with_delimiter("array_expression", ",")
    .with_delimiter("tuple_expression", ",")
    .with_delimiter("parameters", ",")
    .with_delimiter("field_initializer_list", ",")
    .with_delimiter("use_list", ",")
}

/// Every builtin profile definition.
pub fn definitions() -> Vec<ProfileDefinition> {
    vec![
        ProfileDefinition::new(
            "typescript",
            "TypeScript",
            SupportLang::TypeScript,
            typescript_tables(),
        ),
        ProfileDefinition::new("tsx", "TSX", SupportLang::Tsx, typescript_tables()),
        ProfileDefinition::new(
            "javascript",
            "JavaScript",
            SupportLang::JavaScript,
            javascript_tables(),
        ),
        ProfileDefinition::new("rust", "Rust", SupportLang::Rust, rust_tables()),
    ]
}

/// The builtin definition registered under `name`, if any.
pub fn definition(name: &str) -> Option<ProfileDefinition> {
    let key = name.trim().to_ascii_lowercase();
    definitions().into_iter().find(|def| def.name == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_names_are_unique() {
        let defs = definitions();
        let mut names: Vec<_> = defs.iter().map(|d| d.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), defs.len());
    }

    #[test]
    fn javascript_drops_type_only_kinds() {
        let js = definition("JavaScript").unwrap();
        assert!(!js.nodes.scopes.iter().any(|k| k == "interface_body"));
        assert!(js.nodes.scopes.iter().any(|k| k == "statement_block"));
        assert!(!js.nodes.units.iter().any(|k| k == "property_signature"));
        assert_eq!(js.nodes.delimiter_for("object_type"), " ");
    }

    #[test]
    fn typescript_keeps_original_scopes() {
        let ts = definition("typescript").unwrap();
        for kind in [
            "formal_parameters",
            "interface_body",
            "object",
            "object_type",
            "statement_block",
        ] {
            assert!(ts.nodes.scopes.iter().any(|k| k == kind), "missing {kind}");
        }
        assert_eq!(ts.nodes.delimiter_for("arguments"), ",");
    }

    #[test]
    fn unknown_builtin_is_none() {
        assert!(definition("cobol").is_none());
    }
}
