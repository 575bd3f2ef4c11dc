//! Thread-local parser pooling.
//!
//! Tree-sitter parsers are not `Sync`, so language profiles (which are shared
//! process-wide) never own one. Each thread instead keeps one parser per
//! grammar, created on first use and reused for every later parse, including
//! the repeated reparses of the raise validity loop.

use crate::ts::{LanguageParser, TreeSitterError};
use ast_grep_language::SupportLang;
use std::cell::RefCell;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

thread_local! {
    // Keyed by the grammar's debug name; SupportLang is a fieldless enum so
    // the name is unique per grammar.
    static PARSERS: RefCell<HashMap<String, LanguageParser>> = RefCell::new(HashMap::new());
}

/// Execute function with the pooled parser for `grammar`.
///
/// On first call per thread and grammar, creates a new parser. Subsequent
/// calls reuse the same parser instance. `f` must not call back into the
/// pool.
///
/// # Example
///
/// ```no_run
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use ast_grep_language::SupportLang;
/// use tree_climber::pool::with_parser;
///
/// let has_errors = with_parser(SupportLang::TypeScript, |parser| {
///     parser.parse_with_source("const x = 1").map(|parsed| parsed.has_errors())
/// })??;
/// # Ok(())
/// # }
/// ```
pub fn with_parser<F, R>(grammar: SupportLang, f: F) -> Result<R, TreeSitterError>
where
    F: FnOnce(&mut LanguageParser) -> R,
{
    PARSERS.with(|cell| {
        let mut parsers = cell.borrow_mut();
        let parser = match parsers.entry(format!("{grammar:?}")) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(LanguageParser::new(grammar)?),
        };
        Ok(f(parser))
    })
}

/// Number of parsers pooled on the current thread.
#[cfg(test)]
fn pooled_parsers() -> usize {
    PARSERS.with(|cell| cell.borrow().len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parser_is_reused_per_grammar() {
        with_parser(SupportLang::TypeScript, |_| ()).unwrap();
        let after_first = pooled_parsers();
        with_parser(SupportLang::TypeScript, |_| ()).unwrap();
        assert_eq!(pooled_parsers(), after_first);

        with_parser(SupportLang::Rust, |_| ()).unwrap();
        assert_eq!(pooled_parsers(), after_first + 1);
    }

    #[test]
    fn pooled_parser_parses() {
        let kind = with_parser(SupportLang::JavaScript, |parser| {
            parser
                .parse_with_source("let x = [1, 2]")
                .map(|parsed| parsed.root_node().kind().to_string())
        })
        .unwrap()
        .unwrap();
        assert_eq!(kind, "program");
    }
}
