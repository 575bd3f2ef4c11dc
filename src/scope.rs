//! Scope navigation.
//!
//! A scope is any node whose kind is in the profile's `scopes` table. The top
//! level of a document is an implicit, unbounded scope.

use crate::lang::LanguageProfile;
use crate::position::Point;
use crate::ts::search::{find_ancestor_of_type, find_descendant_of_type, find_node_of_type};
use crate::ts::ParsedSource;
use tree_sitter::Node;

/// Scope queries over one language's scope kinds.
#[derive(Debug, Clone, Copy)]
pub struct ScopeResolver<'p> {
    scopes: &'p [String],
}

impl<'p> ScopeResolver<'p> {
    pub fn new(profile: &'p LanguageProfile) -> Self {
        Self::with_kinds(&profile.nodes().scopes)
    }

    pub fn with_kinds(scopes: &'p [String]) -> Self {
        Self { scopes }
    }

    /// Innermost scope enclosing `point`.
    pub fn scope_at<'t>(&self, parsed: &'t ParsedSource<'_>, point: Point) -> Option<Node<'t>> {
        find_node_of_type(parsed, point, self.scopes)
    }

    /// Start of the enclosing scope.
    ///
    /// A cursor sitting just past a closing delimiter is not inside the scope
    /// that delimiter closes, so the lookup is retried one column to the left.
    pub fn scope_start(&self, parsed: &ParsedSource<'_>, point: Point) -> Option<Point> {
        self.scope_at(parsed, point)
            .or_else(|| self.scope_at(parsed, point.step_left()))
            .map(|scope| parsed.start_point(scope))
    }

    /// End of the enclosing scope, or the end of the document at top level.
    pub fn scope_end(&self, parsed: &ParsedSource<'_>, point: Point) -> Point {
        match self.scope_at(parsed, point) {
            Some(scope) => parsed.end_point(scope),
            None => parsed.end_point(parsed.root_node()),
        }
    }

    /// Start of the first scope nested inside the enclosing one.
    pub fn scope_into(&self, parsed: &ParsedSource<'_>, point: Point) -> Option<Point> {
        let current = self.scope_at(parsed, point)?;
        find_descendant_of_type(current, self.scopes).map(|child| parsed.start_point(child))
    }

    /// Start of the nearest scope strictly outside the enclosing one.
    pub fn scope_out(&self, parsed: &ParsedSource<'_>, point: Point) -> Option<Point> {
        let current = self.scope_at(parsed, point)?;
        find_ancestor_of_type(current.parent()?, self.scopes).map(|outer| parsed.start_point(outer))
    }
}
