//! Command dispatch: the `navigate`, `operate` and `query` entry points.
//!
//! Each entry point parses a fresh snapshot of the content, runs one command
//! at the given point and returns its result, or `None` when there is nothing
//! to do there.

use crate::error::EngineError;
use crate::lang::{registry, LanguageProfile};
use crate::node::{self, NodeInfo};
use crate::ops::{self, Replacement};
use crate::position::Point;
use crate::scope::ScopeResolver;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum NavigationCommand {
    ScopeEnd,
    ScopeStart,
    ScopeInto,
    ScopeOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum OperationCommand {
    SplitExpr,
    BarfForward,
    RaiseExpr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum QueryCommand {
    NodeAt,
    NodeBefore,
    NodeParent,
}

/// Result of a navigation command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Navigation {
    pub point: Point,
}

pub fn execute_navigation(
    profile: &LanguageProfile,
    command: NavigationCommand,
    content: &str,
    point: Point,
) -> Result<Option<Navigation>, EngineError> {
    let parsed = profile.parse(content)?;
    let scopes = ScopeResolver::new(profile);

    let target = match command {
        NavigationCommand::ScopeEnd => Some(scopes.scope_end(&parsed, point)),
        NavigationCommand::ScopeStart => scopes.scope_start(&parsed, point),
        NavigationCommand::ScopeInto => scopes.scope_into(&parsed, point),
        NavigationCommand::ScopeOut => scopes.scope_out(&parsed, point),
    };
    Ok(target.map(|point| Navigation { point }))
}

pub fn execute_operation(
    profile: &LanguageProfile,
    command: OperationCommand,
    content: &str,
    point: Point,
) -> Result<Option<Replacement>, EngineError> {
    let parsed = profile.parse(content)?;

    match command {
        OperationCommand::SplitExpr => Ok(ops::split_expression_at(profile, &parsed, point)),
        OperationCommand::BarfForward => Ok(ops::barf_forward_at(profile, &parsed, point)),
        OperationCommand::RaiseExpr => ops::raise_expression_at(profile, &parsed, point),
    }
}

pub fn execute_query(
    profile: &LanguageProfile,
    command: QueryCommand,
    content: &str,
    point: Point,
) -> Result<Option<NodeInfo>, EngineError> {
    let parsed = profile.parse(content)?;

    Ok(match command {
        QueryCommand::NodeAt => Some(node::node_at_point(&parsed, point)),
        QueryCommand::NodeBefore => node::node_before(&parsed, point),
        QueryCommand::NodeParent => node::node_parent(&parsed, point),
    })
}

/// Run a navigation command against a builtin language.
pub fn navigate(
    language: &str,
    command: NavigationCommand,
    content: &str,
    point: Point,
) -> Result<Option<Navigation>, EngineError> {
    let profile = registry().get(language)?;
    execute_navigation(&profile, command, content, point)
}

/// Run a structural operation against a builtin language.
pub fn operate(
    language: &str,
    command: OperationCommand,
    content: &str,
    point: Point,
) -> Result<Option<Replacement>, EngineError> {
    let profile = registry().get(language)?;
    execute_operation(&profile, command, content, point)
}

/// Run a node query against a builtin language.
pub fn query(
    language: &str,
    command: QueryCommand,
    content: &str,
    point: Point,
) -> Result<Option<NodeInfo>, EngineError> {
    let profile = registry().get(language)?;
    execute_query(&profile, command, content, point)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_names_use_wire_spelling() {
        assert_eq!(
            serde_json::to_string(&NavigationCommand::ScopeInto).unwrap(),
            "\"scopeInto\""
        );
        let command: OperationCommand = serde_json::from_str("\"barfForward\"").unwrap();
        assert_eq!(command, OperationCommand::BarfForward);
        assert_eq!(
            QueryCommand::from_str("node-before", false).unwrap(),
            QueryCommand::NodeBefore
        );
    }

    #[test]
    fn unsupported_language_is_an_error() {
        let err = navigate("cobol", NavigationCommand::ScopeEnd, "", Point::default()).unwrap_err();
        assert!(matches!(err, EngineError::UnsupportedLanguage { .. }));
    }

    #[test]
    fn navigation_wraps_point() {
        let result = navigate(
            "typescript",
            NavigationCommand::ScopeStart,
            "f(a, b);",
            Point::new(0, 3),
        )
        .unwrap();
        assert_eq!(result, Some(Navigation { point: Point::new(0, 1) }));
        assert_eq!(
            serde_json::to_string(&result).unwrap(),
            r#"{"point":{"row":0,"column":1}}"#
        );
    }

    #[test]
    fn nothing_to_do_serializes_as_null() {
        let result = operate(
            "typescript",
            OperationCommand::SplitExpr,
            "let a = 1;",
            Point::new(0, 4),
        )
        .unwrap();
        assert_eq!(serde_json::to_string(&result).unwrap(), "null");
    }

    #[test]
    fn query_dispatches_to_node_queries() {
        let info = query("javascript", QueryCommand::NodeParent, "f(a);", Point::new(0, 2))
            .unwrap()
            .unwrap();
        assert_eq!(info.node.category, "arguments");
    }

    #[test]
    fn entry_points_share_the_registry_profile() {
        let source = "f([1, 2]);";
        let point = Point::new(0, 3);
        let scope = navigate("typescript", NavigationCommand::ScopeStart, source, point)
            .unwrap()
            .unwrap();
        assert_eq!(scope.point, Point::new(0, 2));

        let split = operate("typescript", OperationCommand::SplitExpr, source, Point::new(0, 6))
            .unwrap()
            .unwrap();
        assert_eq!(split.content, "[1, ], [2]");

        let info = query("typescript", QueryCommand::NodeAt, source, point)
            .unwrap()
            .unwrap();
        assert_eq!(info.node.text, "1");
    }
}
