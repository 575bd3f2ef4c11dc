use crate::pool;
use crate::ts::errors::TreeSitterError;
use ast_grep_language::SupportLang;

/// Validate that source code has no syntax errors under `grammar`.
///
/// Returns Ok(()) if the code parses without ERROR or MISSING nodes.
pub fn validate_syntax(grammar: SupportLang, source: &str) -> Result<(), TreeSitterError> {
    let errors = pool::with_parser(grammar, |parser| {
        parser
            .parse_with_source(source)
            .map(|parsed| parsed.error_nodes())
    })??;

    match errors.len() {
        0 => Ok(()),
        1 => Err(TreeSitterError::SyntaxError {
            row: errors[0].start.row,
            column: errors[0].start.column,
            byte_start: errors[0].byte_start,
            byte_end: errors[0].byte_end,
        }),
        n => Err(TreeSitterError::MultipleSyntaxErrors { count: n }),
    }
}

/// Splice `new_text` over `[byte_start, byte_end)` of `source`.
///
/// The inserted text is padded with a single space on each side so it can
/// never glue onto a neighbouring token.
pub fn splice_padded(source: &str, byte_start: usize, byte_end: usize, new_text: &str) -> String {
    let mut spliced =
        String::with_capacity(source.len() + new_text.len() + 2 - (byte_end - byte_start));
    spliced.push_str(&source[..byte_start]);
    spliced.push(' ');
    spliced.push_str(new_text);
    spliced.push(' ');
    spliced.push_str(&source[byte_end..]);
    spliced
}

/// Check whether replacing `[byte_start, byte_end)` with `new_text` leaves a
/// document that reparses with zero syntax errors.
///
/// This reparses the full document; parser failures (as opposed to syntax
/// errors in the result) are propagated.
pub fn is_valid_replacement(
    grammar: SupportLang,
    source: &str,
    byte_start: usize,
    byte_end: usize,
    new_text: &str,
) -> Result<bool, TreeSitterError> {
    let candidate = splice_padded(source, byte_start, byte_end, new_text);
    match validate_syntax(grammar, &candidate) {
        Ok(()) => Ok(true),
        Err(e) if e.is_syntax_error() => Ok(false),
        Err(e) => Err(e),
    }
}
