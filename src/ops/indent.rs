//! Re-indentation of text moved to a different column.

use crate::ops::Replacement;
use crate::ts::ParsedSource;
use tree_sitter::Node;

/// Replace `to_replace` with the text of `replacement`, re-indenting every
/// line after the first by the column difference between the two nodes.
pub fn format_operation_result(
    parsed: &ParsedSource<'_>,
    to_replace: Node<'_>,
    replacement: Node<'_>,
) -> Replacement {
    let from = parsed.start_point(replacement).column;
    let to = parsed.start_point(to_replace).column;
    let shift = to as isize - from as isize;

    Replacement::new(
        parsed.start_point(to_replace),
        parsed.end_point(to_replace),
        reindent(parsed.node_text(replacement), shift),
    )
}

/// Shift every line after the first by `shift` columns.
///
/// Negative shifts strip leading characters only when they are all
/// whitespace; lines indented less than the shift are left untouched.
/// Positive shifts pad with spaces.
pub fn reindent(text: &str, shift: isize) -> String {
    let amount = shift.unsigned_abs();
    text.split('\n')
        .enumerate()
        .map(|(n, line)| match n {
            0 => line.to_string(),
            _ if shift < 0 => dedent_line(line, amount).to_string(),
            _ => format!("{}{line}", " ".repeat(amount)),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn dedent_line(line: &str, amount: usize) -> &str {
    let Some((prefix_end, _)) = line.char_indices().nth(amount).or_else(|| {
        (line.chars().count() == amount).then_some((line.len(), ' '))
    }) else {
        return line;
    };
    let prefix = &line[..prefix_end];
    if prefix.trim().is_empty() {
        &line[prefix_end..]
    } else {
        line
    }
}
