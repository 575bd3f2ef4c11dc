//! Raise: replace an enclosing construct with a nested one.

use crate::error::EngineError;
use crate::lang::LanguageProfile;
use crate::ops::indent::format_operation_result;
use crate::ops::Replacement;
use crate::position::Point;
use crate::ts::search::find_node_of_type;
use crate::ts::ParsedSource;
use log::{debug, trace};

/// Raise the unit at `point` over its smallest ancestor that can be replaced
/// by it without introducing a syntax error.
///
/// Each candidate ancestor is checked by splicing the unit's text into its
/// span and reparsing the whole document. Returns `Ok(None)` when no unit
/// encloses `point` and [`EngineError::RaiseExhausted`] when no ancestor up
/// to the root accepts the unit.
pub fn raise_expression_at(
    profile: &LanguageProfile,
    parsed: &ParsedSource<'_>,
    point: Point,
) -> Result<Option<Replacement>, EngineError> {
    let Some(expr) = find_node_of_type(parsed, point, &profile.nodes().units) else {
        return Ok(None);
    };
    let text = parsed.node_text(expr);

    let mut candidate = expr.parent();
    while let Some(target) = candidate {
        if profile.is_valid_replacement(parsed.source, target.start_byte(), target.end_byte(), text)? {
            debug!(
                "raise {} at {} over {} at {}",
                expr.kind(),
                parsed.start_point(expr),
                target.kind(),
                parsed.start_point(target)
            );
            return Ok(Some(format_operation_result(parsed, target, expr)));
        }
        trace!(
            "raise {}: {} at {} rejects it",
            expr.kind(),
            target.kind(),
            parsed.start_point(target)
        );
        candidate = target.parent();
    }

    Err(EngineError::RaiseExhausted {
        kind: expr.kind().to_string(),
        start: parsed.start_point(expr),
    })
}
