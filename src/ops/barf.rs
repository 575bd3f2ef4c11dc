//! Barf: narrow a delimited expression.

use crate::lang::LanguageProfile;
use crate::ops::Replacement;
use crate::position::Point;
use crate::scope::ScopeResolver;
use crate::ts::search::children_of;
use crate::ts::ParsedSource;
use log::trace;

/// Barf forward: exclude the last element of the enclosing scope by moving
/// its closing delimiter to the left of that element.
///
/// The replacement spans the excluded element through the delimiter and
/// reorders it to `<delimiter><gap><element>`, keeping the original gap
/// between them. Scopes with nothing between their delimiters yield `None`.
pub fn barf_forward_at(
    profile: &LanguageProfile,
    parsed: &ParsedSource<'_>,
    point: Point,
) -> Option<Replacement> {
    let scope = ScopeResolver::new(profile).scope_at(parsed, point)?;

    let children = children_of(scope);
    if children.len() < 3 {
        trace!("barf: {} at {point} has nothing to exclude", scope.kind());
        return None;
    }
    let delimiter = children[children.len() - 1];
    let excluded = children[children.len() - 2];

    trace!(
        "barf {} at {point}: excluding {}",
        scope.kind(),
        excluded.kind()
    );

    let gap = &parsed.source[excluded.end_byte()..delimiter.start_byte()];
    let content = format!(
        "{}{}{}",
        parsed.node_text(delimiter),
        gap,
        parsed.node_text(excluded)
    );

    Some(Replacement::new(
        parsed.start_point(excluded),
        parsed.end_point(delimiter),
        content,
    ))
}
